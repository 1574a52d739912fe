//! Volumetric light ray marcher
//!
//! Scenes are built from implicit objects carrying a participating medium.
//! A single point light is integrated along camera rays with exponential
//! attenuation (single scattering, no shadow rays).

pub mod camera;
pub mod color;
pub mod common;
pub mod premade;
pub mod render;
pub mod scene;

pub use camera::Camera;
pub use common::{Hit, Ray};
pub use scene::{Plane, Scene, SceneObject, Sphere};

/// Render one full-quality frame of the premade demo scene.
///
/// Returns an RGB8 buffer of `3 * width * height` bytes.
pub fn render_frame(width: usize, height: usize) -> Vec<u8> {
    use crate::render::{RenderOptions, Renderer};
    use nalgebra::point;

    let scene = premade::demo_scene();
    let camera = Camera::new(point![0.0, 0.0, -5.0], (width, height));

    let options = RenderOptions::new((width, height), 20.0, 15, 5);
    let renderer = Renderer::new(scene, options);

    let mut buffer = vec![0; 3 * width * height];
    renderer.render(&camera, buffer.as_mut_slice());

    buffer
}
