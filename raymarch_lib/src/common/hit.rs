use nalgebra::{Point3, Vector3};

/// Result of a ray-object intersection test.
///
/// Per-call transient; `t == f32::INFINITY` means no hit.
pub struct Hit {
    /// Distance along the ray
    pub t: f32,
    /// Intersection point in world coordinates
    pub point: Point3<f32>,
    /// Surface normal at the intersection, unit length for valid hits
    pub normal: Vector3<f32>,
    /// Medium density at the hit surface
    pub density: f32,
}

impl Default for Hit {
    fn default() -> Self {
        Hit {
            t: f32::INFINITY,
            point: Point3::origin(),
            normal: Vector3::zeros(),
            density: 0.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_means_no_hit() {
        let hit = Hit::default();
        assert!(hit.t.is_infinite());
        assert_eq!(hit.density, 0.0);
    }
}
