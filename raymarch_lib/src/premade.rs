//! Prebuilt scenes used by the demo app, tests and benches.
//! A user composes their own with [`Scene::add_object`].

use nalgebra::{point, vector};

use crate::color;
use crate::scene::{Plane, Scene, SceneObject, Sphere};

/// Two unit spheres above a floor plane, light up and to the right
pub fn demo_scene() -> Scene {
    let mut scene = Scene::new(point![5.0, 5.0, 5.0], 50.0);

    scene.add_object(SceneObject::Sphere(Sphere::new(
        point![-1.5, 0.0, 5.0],
        1.0,
        0.1,
        color::new(1.0, 0.2, 0.2),
    )));
    scene.add_object(SceneObject::Sphere(Sphere::new(
        point![1.5, 0.0, 5.0],
        1.0,
        0.1,
        color::new(0.2, 1.0, 0.2),
    )));
    scene.add_object(SceneObject::Plane(Plane::new(
        vector![0.0, 1.0, 0.0],
        2.0,
        0.02,
        color::new(0.5, 0.5, 1.0),
    )));

    scene
}

/// One red sphere straight ahead of the default camera
pub fn single_sphere_scene() -> Scene {
    let mut scene = Scene::new(point![5.0, 5.0, 5.0], 50.0);

    scene.add_object(SceneObject::Sphere(Sphere::new(
        point![0.0, 0.0, 5.0],
        1.0,
        0.1,
        color::new(1.0, 0.0, 0.0),
    )));

    scene
}
