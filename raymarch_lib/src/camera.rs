use nalgebra::{vector, Point3, Vector3};

use crate::common::Ray;

/// Fixed-forward camera looking down positive z.
///
/// Maps pixels to a view plane one unit in front of the position;
/// both axes are scaled by the image height, so the horizontal field
/// of view grows with the aspect ratio.
#[derive(Clone)]
pub struct Camera {
    /// Position of the camera in world coordinates
    position: Point3<f32>,
    /// Image resolution in pixels, `(width, height)`
    resolution: (usize, usize),
}

impl Camera {
    pub fn new(position: Point3<f32>, resolution: (usize, usize)) -> Camera {
        Camera {
            position,
            resolution,
        }
    }

    pub fn get_resolution(&self) -> (usize, usize) {
        self.resolution
    }

    pub fn set_resolution(&mut self, resolution: (usize, usize)) {
        self.resolution = resolution;
    }

    pub fn get_position(&self) -> Point3<f32> {
        self.position
    }

    /// Set new position of camera
    pub fn set_pos(&mut self, pos: Point3<f32>) {
        self.position = pos;
    }

    /// Move camera by vector `delta`
    pub fn change_pos(&mut self, delta: Vector3<f32>) {
        self.position += delta;
    }

    /// Ray through pixel `(x, y)`, `(0, 0)` being the upper left corner
    pub fn get_ray(&self, x: usize, y: usize) -> Ray {
        let (width, height) = (self.resolution.0 as f32, self.resolution.1 as f32);
        let u = (2.0 * x as f32 - width) / height;
        let v = (2.0 * y as f32 - height) / height;
        Ray::new(self.position, vector![u, v, 1.0])
    }
}

#[cfg(test)]
mod test {

    use nalgebra::point;

    use super::*;

    #[test]
    fn center_pixel_looks_straight_ahead() {
        let camera = Camera::new(point![0.0, 0.0, -5.0], (800, 600));
        let ray = camera.get_ray(400, 300);

        assert_eq!(ray.origin, point![0.0, 0.0, -5.0]);
        assert!((ray.direction - vector![0.0, 0.0, 1.0]).norm() < 1e-6);
    }

    #[test]
    fn corner_rays_are_normalized() {
        let camera = Camera::new(point![0.0, 0.0, 0.0], (800, 600));

        for (x, y) in [(0, 0), (799, 0), (0, 599), (799, 599)] {
            let ray = camera.get_ray(x, y);
            assert!((ray.direction.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn change_pos_moves_origin() {
        let mut camera = Camera::new(point![0.0, 0.0, 0.0], (100, 100));
        camera.change_pos(vector![1.0, 2.0, 3.0]);

        assert_eq!(camera.get_position(), point![1.0, 2.0, 3.0]);
        assert_eq!(camera.get_ray(50, 50).origin, point![1.0, 2.0, 3.0]);
    }
}
