use crate::camera::Camera;
use crate::color;
use crate::scene::Scene;

/// Render pass parameters.
///
/// `sample_count` is the full-quality march resolution,
/// `preview_sample_count` the cheaper one used while the user is
/// interacting. The trade-off is caller-selected, nothing adapts.
pub struct RenderOptions {
    pub resolution: (usize, usize),
    pub max_march_distance: f32,
    pub sample_count: usize,
    pub preview_sample_count: usize,
}

impl RenderOptions {
    pub fn new(
        resolution: (usize, usize),
        max_march_distance: f32,
        sample_count: usize,
        preview_sample_count: usize,
    ) -> RenderOptions {
        RenderOptions {
            resolution,
            max_march_distance,
            sample_count,
            preview_sample_count,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            resolution: (800, 600),
            max_march_distance: 20.0,
            sample_count: 15,
            preview_sample_count: 5,
        }
    }
}

/// Single-threaded scene renderer.
///
/// Owns the scene; mutate it through `scene` strictly between render
/// passes. For rendering off the main thread see
/// [`SerialRenderer`](super::SerialRenderer).
pub struct Renderer {
    pub scene: Scene,
    render_options: RenderOptions,
}

impl Renderer {
    pub fn new(scene: Scene, render_options: RenderOptions) -> Renderer {
        Renderer {
            scene,
            render_options,
        }
    }

    pub fn set_render_options(&mut self, opts: RenderOptions) {
        self.render_options = opts;
    }

    pub fn set_render_resolution(&mut self, res: (usize, usize)) {
        self.render_options.resolution = res;
    }

    /// Full-quality pass into an RGB8 buffer of `3 * width * height` bytes
    pub fn render(&self, camera: &Camera, buffer: &mut [u8]) {
        Renderer::render_pass(
            &self.scene,
            camera,
            &self.render_options,
            self.render_options.sample_count,
            buffer,
        );
    }

    /// Preview-quality pass, same buffer layout
    pub fn render_preview(&self, camera: &Camera, buffer: &mut [u8]) {
        Renderer::render_pass(
            &self.scene,
            camera,
            &self.render_options,
            self.render_options.preview_sample_count,
            buffer,
        );
    }

    /// One sequential pixel loop: build the camera ray, integrate the
    /// volumetric light along it, write the clamped 8-bit color.
    ///
    /// Buffer layout is row-major RGB8, `y = 0` at the top.
    pub fn render_pass(
        scene: &Scene,
        camera: &Camera,
        options: &RenderOptions,
        sample_count: usize,
        buffer: &mut [u8],
    ) {
        let (img_w, img_h) = options.resolution;

        for y in 0..img_h {
            for x in 0..img_w {
                let ray = camera.get_ray(x, y);

                let (_total_light, pixel_color) =
                    scene.integrate_volumetric_light(&ray, options.max_march_distance, sample_count);

                let index = (x + img_w * y) * 3;
                buffer[index] = color::channel_to_u8(pixel_color.x);
                buffer[index + 1] = color::channel_to_u8(pixel_color.y);
                buffer[index + 2] = color::channel_to_u8(pixel_color.z);
            }
        }
    }
}
