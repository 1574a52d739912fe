use nalgebra::{Point3, Vector3};

use crate::color::RGB;
use crate::common::{Hit, Ray};

/// Implicit sphere with a linear density falloff towards the surface
pub struct Sphere {
    pub center: Point3<f32>,
    pub radius: f32,
    pub volume_density: f32,
    pub color: RGB,
}

impl Sphere {
    pub fn new(center: Point3<f32>, radius: f32, volume_density: f32, color: RGB) -> Sphere {
        Sphere {
            center,
            radius,
            volume_density,
            color,
        }
    }

    /// Nearest non-negative intersection of `|o + t*d - c|^2 = r^2`.
    ///
    /// If the smaller root is negative the origin is inside the sphere
    /// and the larger root is used instead.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * oc.dot(&ray.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let mut t = (-b - sqrt_d) / (2.0 * a);
        if t < 0.0 {
            t = (-b + sqrt_d) / (2.0 * a);
            if t < 0.0 {
                return None;
            }
        }

        let point = ray.point_from_t(t);
        Some(Hit {
            t,
            point,
            normal: (point - self.center).normalize(),
            density: self.volume_density,
        })
    }

    /// Linear falloff from `volume_density` at the center to 0 at the surface
    pub fn density_at(&self, point: &Point3<f32>) -> f32 {
        let dist = (point - self.center).norm();
        if dist > self.radius {
            return 0.0;
        }
        self.volume_density * (1.0 - dist / self.radius)
    }
}

/// Infinite plane `n·p + distance = 0`, modelled as a uniform medium
pub struct Plane {
    pub normal: Vector3<f32>,
    pub distance: f32,
    pub volume_density: f32,
    pub color: RGB,
}

impl Plane {
    /// `normal` is normalized here
    pub fn new(normal: Vector3<f32>, distance: f32, volume_density: f32, color: RGB) -> Plane {
        Plane {
            normal: normal.normalize(),
            distance,
            volume_density,
            color,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let denom = self.normal.dot(&ray.direction);
        // near-parallel rays would blow up the division
        if denom.abs() < 1e-6 {
            return None;
        }

        let t = -(self.normal.dot(&ray.origin.coords) + self.distance) / denom;
        if t < 0.0 {
            return None;
        }

        Some(Hit {
            t,
            point: ray.point_from_t(t),
            normal: self.normal,
            density: self.volume_density,
        })
    }

    /// Uniform density everywhere along the infinite plane.
    ///
    /// The plane is not bounded by any thickness; rays nearly parallel
    /// to it accumulate its density over the whole march.
    pub fn density_at(&self, _point: &Point3<f32>) -> f32 {
        self.volume_density
    }
}

/// Scene object, dispatched by matching on the variant.
///
/// Mutation operations (`Scene::adjust_density`, `Scene::adjust_color`)
/// match here exhaustively, so adding a variant is compiler-checked.
pub enum SceneObject {
    Sphere(Sphere),
    Plane(Plane),
}

impl SceneObject {
    /// Nearest intersection at non-negative distance, `None` for a miss
    /// or degenerate geometry (parallel plane, negative discriminant).
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            SceneObject::Sphere(s) => s.intersect(ray),
            SceneObject::Plane(p) => p.intersect(ray),
        }
    }

    /// Medium density at `point`, zero outside the object
    pub fn density_at(&self, point: &Point3<f32>) -> f32 {
        match self {
            SceneObject::Sphere(s) => s.density_at(point),
            SceneObject::Plane(p) => p.density_at(point),
        }
    }

    /// Base color of the object.
    ///
    /// Point-independent for both variants; the seam exists for
    /// textured variants.
    pub fn color_at(&self, _point: &Point3<f32>) -> RGB {
        match self {
            SceneObject::Sphere(s) => s.color,
            SceneObject::Plane(p) => p.color,
        }
    }

    pub fn volume_density(&self) -> f32 {
        match self {
            SceneObject::Sphere(s) => s.volume_density,
            SceneObject::Plane(p) => p.volume_density,
        }
    }

    pub fn color(&self) -> RGB {
        match self {
            SceneObject::Sphere(s) => s.color,
            SceneObject::Plane(p) => p.color,
        }
    }
}

#[cfg(test)]
mod test {

    use nalgebra::{point, vector};

    use super::*;
    use crate::color;

    fn unit_sphere() -> Sphere {
        Sphere::new(point![0.0, 0.0, 5.0], 1.0, 0.1, color::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn sphere_density_linear_falloff() {
        let sphere = unit_sphere();

        assert_eq!(sphere.density_at(&point![0.0, 0.0, 5.0]), 0.1);
        // half radius
        let half = sphere.density_at(&point![0.5, 0.0, 5.0]);
        assert!((half - 0.05).abs() < 1e-6);
        // on the surface
        let surface = sphere.density_at(&point![1.0, 0.0, 5.0]);
        assert!(surface.abs() < 1e-6);
        // outside
        assert_eq!(sphere.density_at(&point![3.0, 0.0, 5.0]), 0.0);
    }

    #[test]
    fn sphere_intersect_from_outside() {
        let sphere = unit_sphere();
        let ray = Ray::new(point![0.0, 0.0, 0.0], vector![0.0, 0.0, 1.0]);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-5);
        assert_eq!(hit.density, 0.1);
        assert!((hit.normal.norm() - 1.0).abs() < 1e-5);
        assert!((hit.normal - vector![0.0, 0.0, -1.0]).norm() < 1e-4);
    }

    #[test]
    fn sphere_intersect_from_inside_takes_far_root() {
        let sphere = unit_sphere();
        let ray = Ray::new(point![0.0, 0.0, 5.0], vector![0.0, 0.0, 1.0]);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn sphere_behind_ray_is_a_miss() {
        let sphere = unit_sphere();
        let ray = Ray::new(point![0.0, 0.0, 10.0], vector![0.0, 0.0, 1.0]);

        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn sphere_miss() {
        let sphere = unit_sphere();
        let ray = Ray::new(point![5.0, 5.0, 0.0], vector![0.0, 0.0, 1.0]);

        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn plane_intersect() {
        // floor at y = -2
        let plane = Plane::new(vector![0.0, 1.0, 0.0], 2.0, 0.02, color::gray(0.5));
        let ray = Ray::new(point![0.0, 0.0, 0.0], vector![0.0, -1.0, 0.0]);

        let hit = plane.intersect(&ray).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-5);
        assert_eq!(hit.normal, vector![0.0, 1.0, 0.0]);
    }

    #[test]
    fn plane_parallel_ray_is_a_miss() {
        let plane = Plane::new(vector![0.0, 1.0, 0.0], 2.0, 0.02, color::gray(0.5));
        let ray = Ray::new(point![0.0, 0.0, 0.0], vector![1.0, 0.0, 0.0]);

        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn plane_behind_ray_is_a_miss() {
        let plane = Plane::new(vector![0.0, 1.0, 0.0], 2.0, 0.02, color::gray(0.5));
        let ray = Ray::new(point![0.0, 0.0, 0.0], vector![0.0, 1.0, 0.0]);

        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn plane_density_is_uniform() {
        let plane = Plane::new(vector![0.0, 1.0, 0.0], 2.0, 0.02, color::gray(0.5));
        assert_eq!(plane.density_at(&point![0.0, 100.0, 0.0]), 0.02);
        assert_eq!(plane.density_at(&point![-50.0, -2.0, 3.0]), 0.02);
    }

    #[test]
    fn plane_normal_normalized_on_construction() {
        let plane = Plane::new(vector![0.0, 2.0, 0.0], 1.0, 0.0, color::gray(1.0));
        assert!((plane.normal.norm() - 1.0).abs() < 1e-6);
    }
}
