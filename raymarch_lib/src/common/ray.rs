use nalgebra::{Point3, Vector3};

/// Ray cast by camera.
/// Main usecase is sampling the scene's density field in steps
/// along the direction ([`Ray::point_from_t`]).
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>, // todo Unit<Vector3> to encode normalization
}

impl Ray {
    /// Construct new ray using `origin` and `direction`.
    ///
    /// `direction` is normalized here. A zero-length direction
    /// stays the zero vector, which callers must avoid marching with.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Ray {
        let len = direction.norm();
        let direction = if len < 1e-9 {
            Vector3::zeros()
        } else {
            direction / len
        };
        Ray { origin, direction }
    }

    /// Returns point `t` units far from ray origin in ray direction
    pub fn point_from_t(&self, t: f32) -> Point3<f32> {
        self.origin + t * self.direction
    }
}
