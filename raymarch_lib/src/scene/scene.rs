use nalgebra::{Point3, Vector3};

use crate::color::{self, RGB};
use crate::common::Ray;

use super::SceneObject;

/// Total light below this threshold renders as black instead of
/// dividing the accumulated color by a near-zero value.
const MIN_TOTAL_LIGHT: f32 = 1e-9;

/// Collection of objects with one point light.
///
/// Objects are addressed by insertion order; the order is also the
/// summation order when media overlap.
pub struct Scene {
    objects: Vec<SceneObject>,
    light_pos: Point3<f32>,
    light_intensity: f32,
}

impl Scene {
    pub fn new(light_pos: Point3<f32>, light_intensity: f32) -> Scene {
        Scene {
            objects: vec![],
            light_pos,
            light_intensity,
        }
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn object(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    pub fn light_pos(&self) -> Point3<f32> {
        self.light_pos
    }

    pub fn light_intensity(&self) -> f32 {
        self.light_intensity
    }

    /// March `ray` through the scene's density field and integrate the
    /// scattered light of the point source.
    ///
    /// `sample_count` equal steps of `max_distance / sample_count` are
    /// taken, the first one exactly at the ray origin. Per sample, the
    /// densities of all objects are summed, the sample color is the
    /// density-weighted average of the object colors, and the light
    /// contribution is attenuated by the transmittance accumulated so
    /// far (Beer-Lambert). Zero-density samples leave both the
    /// accumulators and the transmittance untouched.
    ///
    /// Returns total light plus the contribution-weighted color, black
    /// when the ray never passed through any medium.
    ///
    /// Single scattering only: no shadow rays towards the light, no
    /// occlusion between objects. Cost per sample is one linear scan
    /// over the objects.
    pub fn integrate_volumetric_light(
        &self,
        ray: &Ray,
        max_distance: f32,
        sample_count: usize,
    ) -> (f32, RGB) {
        let step_size = max_distance / sample_count as f32;

        let mut total_light = 0.0;
        let mut accumulated_color = color::zero();
        let mut transmittance = 1.0;

        for i in 0..sample_count {
            let sample_point = ray.point_from_t(i as f32 * step_size);

            let mut density = 0.0;
            let mut sample_color = color::zero();

            for object in &self.objects {
                let object_density = object.density_at(&sample_point);
                density += object_density;
                if object_density > 0.0 {
                    sample_color += object.color_at(&sample_point) * object_density;
                }
            }

            if density > 0.0 {
                sample_color /= density;

                let to_light = self.light_pos - sample_point;
                let dist_to_light = to_light.norm();

                // inverse square falloff
                let light_falloff = self.light_intensity / (dist_to_light * dist_to_light);

                let contribution = density * light_falloff * step_size * transmittance;
                total_light += contribution;
                accumulated_color += sample_color * contribution;

                transmittance *= f32::exp(-density * step_size);
            }
        }

        let out_color = if total_light > MIN_TOTAL_LIGHT {
            accumulated_color / total_light
        } else {
            color::zero()
        };
        (total_light, out_color)
    }

    /// Change the medium density of the object at `index` by `delta`.
    ///
    /// Density is clamped to a minimum of 0. The object keeps its
    /// position, color and identity. Out-of-range indices are an error
    /// and leave the scene untouched.
    pub fn adjust_density(&mut self, index: usize, delta: f32) -> Result<(), &'static str> {
        let object = self
            .objects
            .get_mut(index)
            .ok_or("object index out of range")?;

        match object {
            SceneObject::Sphere(sphere) => {
                sphere.volume_density = (sphere.volume_density + delta).max(0.0);
            }
            SceneObject::Plane(plane) => {
                plane.volume_density = (plane.volume_density + delta).max(0.0);
            }
        }
        Ok(())
    }

    /// Add `color_delta` to the base color of the object at `index`,
    /// clamping each channel to `[0,1]` independently.
    pub fn adjust_color(
        &mut self,
        index: usize,
        color_delta: Vector3<f32>,
    ) -> Result<(), &'static str> {
        let object = self
            .objects
            .get_mut(index)
            .ok_or("object index out of range")?;

        match object {
            SceneObject::Sphere(sphere) => {
                sphere.color = color::saturate(sphere.color + color_delta);
            }
            SceneObject::Plane(plane) => {
                plane.color = color::saturate(plane.color + color_delta);
            }
        }
        Ok(())
    }
}
