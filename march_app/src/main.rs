//! Interactive volumetric light demo
//!
//! Renders the premade scene (two spheres over a plane) and lets the
//! user edit it live:
//! * `1`/`2`/`3` raise the density of object 0/1/2, with Left Shift lower it
//! * `R`/`G`/`B` while a digit is held shift that object's color channel
//! * `Esc` quits
//!
//! Edits trigger a fast preview pass; releasing the key renders in
//! full quality.

use std::time::Instant;

use minifb::{Key, KeyRepeat, Window, WindowOptions};
use nalgebra::{point, vector, Vector3};

use raymarch_lib::{
    premade,
    render::{RenderOptions, RendererFront, RendererMessage, SerialRenderer},
    Camera,
};

const WIDTH: usize = 800;
const HEIGHT: usize = 600;

const DENSITY_STEP: f32 = 0.05;
const COLOR_STEP: f32 = 0.1;

const OBJECT_KEYS: [Key; 3] = [Key::Key1, Key::Key2, Key::Key3];
const CHANNEL_KEYS: [Key; 3] = [Key::R, Key::G, Key::B];

fn main() {
    let mut window = Window::new(
        "Volumetric light - ESC to exit",
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )
    .unwrap_or_else(|e| {
        panic!("{}", e);
    });

    let scene = premade::demo_scene();
    let camera = Camera::new(point![0.0, 0.0, -5.0], (WIDTH, HEIGHT));
    let options = RenderOptions::new((WIDTH, HEIGHT), 20.0, 15, 5);

    let renderer = SerialRenderer::new(scene, camera, options);

    let mut front = RendererFront::new();
    front.start_rendering(renderer);

    let scene_handle = front.get_scene_handle().unwrap();
    let buffer_handle = front.get_buffer_handle().unwrap();
    let frame_recv = front.get_receiver();

    // First full render
    let mut render_start = Instant::now();
    front.send_message(RendererMessage::StartRendering);

    let mut frame: Vec<u32> = vec![0; WIDTH * HEIGHT];

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let invert = window.is_key_down(Key::LeftShift);
        let mut edited = false;

        // Density of object 0..2 on the digit keys
        for (index, key) in OBJECT_KEYS.iter().enumerate() {
            if window.is_key_pressed(*key, KeyRepeat::Yes) {
                let delta = if invert { -DENSITY_STEP } else { DENSITY_STEP };
                let mut scene = scene_handle.write();
                match scene.adjust_density(index, delta) {
                    Ok(()) => {
                        let new = scene.object(index).unwrap().volume_density();
                        println!("object {}: density -> {:.3}", index, new);
                        edited = true;
                    }
                    Err(e) => eprintln!("adjust_density: {}", e),
                }
            }
        }

        // Color channel of the held object on R/G/B
        for (channel, key) in CHANNEL_KEYS.iter().enumerate() {
            if !window.is_key_pressed(*key, KeyRepeat::Yes) {
                continue;
            }
            let selected = OBJECT_KEYS.iter().position(|k| window.is_key_down(*k));
            if let Some(index) = selected {
                let step = if invert { -COLOR_STEP } else { COLOR_STEP };
                let mut delta: Vector3<f32> = vector![0.0, 0.0, 0.0];
                delta[channel] = step;

                let mut scene = scene_handle.write();
                match scene.adjust_color(index, delta) {
                    Ok(()) => {
                        let c = scene.object(index).unwrap().color();
                        println!(
                            "object {}: color -> ({:.2}, {:.2}, {:.2})",
                            index, c.x, c.y, c.z
                        );
                        edited = true;
                    }
                    Err(e) => eprintln!("adjust_color: {}", e),
                }
            }
        }

        if edited {
            render_start = Instant::now();
            front.send_message(RendererMessage::StartRenderingFast);
        }

        // Full quality once the user lets go
        let released = OBJECT_KEYS
            .iter()
            .chain(CHANNEL_KEYS.iter())
            .any(|k| window.is_key_released(*k));
        if released {
            render_start = Instant::now();
            front.send_message(RendererMessage::StartRendering);
        }

        // Pull in a finished frame, if any
        if frame_recv.try_recv().is_ok() {
            println!("render took {} ms", render_start.elapsed().as_millis());

            let buffer = buffer_handle.lock();
            for (pixel, rgb) in frame.iter_mut().zip(buffer.chunks(3)) {
                *pixel = ((rgb[0] as u32) << 16) | ((rgb[1] as u32) << 8) | (rgb[2] as u32);
            }
        }

        window
            .update_with_buffer(frame.as_slice(), WIDTH, HEIGHT)
            .unwrap();
    }

    println!("App shutting down");
    front.send_message(RendererMessage::ShutDown);
    front.finish();
}
