use nalgebra::{point, vector};
use raymarch_lib::{
    premade,
    render::{RenderOptions, Renderer, RendererFront, RendererMessage, SerialRenderer},
    Camera, Scene,
};

pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 64;

fn small_options() -> RenderOptions {
    RenderOptions::new((WIDTH, HEIGHT), 20.0, 15, 5)
}

#[test]
fn single_thread_api() {
    let scene = premade::single_sphere_scene();
    let camera = Camera::new(point![0.0, 0.0, -5.0], (WIDTH, HEIGHT));

    let renderer = Renderer::new(scene, small_options());

    let mut buffer = vec![0; 3 * WIDTH * HEIGHT];
    renderer.render(&camera, &mut buffer);

    // center pixel passes through the red sphere
    let index = (WIDTH / 2 + WIDTH * (HEIGHT / 2)) * 3;
    let (r, g, b) = (buffer[index], buffer[index + 1], buffer[index + 2]);
    assert!(r > 0);
    assert!(r > g);
    assert!(r > b);
}

#[test]
fn empty_scene_renders_black() {
    let scene = Scene::new(point![5.0, 5.0, 5.0], 50.0);
    let camera = Camera::new(point![0.0, 0.0, -5.0], (WIDTH, HEIGHT));

    let renderer = Renderer::new(scene, small_options());

    let mut buffer = vec![255; 3 * WIDTH * HEIGHT];
    renderer.render(&camera, &mut buffer);

    assert!(buffer.iter().all(|&b| b == 0));
}

#[test]
fn threaded_api_with_mutation_between_frames() {
    let scene = premade::demo_scene();
    let camera = Camera::new(point![0.0, 0.0, -5.0], (WIDTH, HEIGHT));

    let renderer = SerialRenderer::new(scene, camera, small_options());

    let mut front = RendererFront::new();
    front.start_rendering(renderer);

    let scene_handle = front.get_scene_handle().unwrap();
    let buffer_handle = front.get_buffer_handle().unwrap();

    front.send_message(RendererMessage::StartRendering);
    front.receive_message();

    let first_frame_lit = {
        let buffer = buffer_handle.lock();
        buffer.iter().any(|&b| b > 0)
    };
    assert!(first_frame_lit);

    // mutate between frames, then render a preview
    {
        let mut scene = scene_handle.write();
        scene.adjust_density(0, 0.2).unwrap();
        scene.adjust_color(0, vector![0.0, 0.5, 0.0]).unwrap();
        assert!(scene.adjust_density(17, 1.0).is_err());
    }

    front.send_message(RendererMessage::StartRenderingFast);
    front.receive_message();

    front.send_message(RendererMessage::ShutDown);
    front.finish();
}
