use std::{sync::Arc, thread::JoinHandle};

use crossbeam::channel::{Receiver, Sender};
use parking_lot::{Mutex, RwLock};

use crate::camera::Camera;
use crate::scene::Scene;

use super::{render_front::RenderThread, RenderOptions, Renderer, RendererMessage};

/// Renders sequentially in its own thread.
///
/// The scene and camera are shared; the main thread mutates them
/// between frames through the handles. Rendering itself is one
/// single-threaded pass per message and always runs to completion.
pub struct SerialRenderer {
    scene: Arc<RwLock<Scene>>,
    shared_buffer: Arc<Mutex<Vec<u8>>>,
    camera: Arc<RwLock<Camera>>,
    render_options: RenderOptions,
    communication: (Sender<()>, Receiver<RendererMessage>),
}

impl RenderThread for SerialRenderer {
    fn get_shared_buffer(&self) -> Arc<Mutex<Vec<u8>>> {
        self.shared_buffer.clone()
    }

    fn get_camera(&self) -> Arc<RwLock<Camera>> {
        self.camera.clone()
    }

    fn get_scene(&self) -> Arc<RwLock<Scene>> {
        self.scene.clone()
    }

    fn start(self) -> JoinHandle<()> {
        self.start_rendering()
    }

    fn set_communication(&mut self, communication: (Sender<()>, Receiver<RendererMessage>)) {
        self.communication = communication;
    }
}

impl SerialRenderer {
    pub fn new(scene: Scene, camera: Camera, render_options: RenderOptions) -> Self {
        let elements = render_options.resolution.0 * render_options.resolution.1;
        let buffer = Arc::new(Mutex::new(vec![0; elements * 3]));

        // Dummy channels
        // Replaced once started
        let (sender_void, _) = crossbeam::channel::unbounded();
        let never = crossbeam::channel::never();
        let communication = (sender_void, never);

        Self {
            communication,
            scene: Arc::new(RwLock::new(scene)),
            shared_buffer: buffer,
            camera: Arc::new(RwLock::new(camera)),
            render_options,
        }
    }

    pub fn start_rendering(self) -> JoinHandle<()> {
        std::thread::spawn(move || {
            // Master loop
            loop {
                // Gather input
                let msg = self.communication.1.recv().unwrap();
                let sample_count = match msg {
                    RendererMessage::StartRendering => self.render_options.sample_count,
                    RendererMessage::StartRenderingFast => self.render_options.preview_sample_count,
                    RendererMessage::ShutDown => break,
                };

                {
                    // Lock buffer
                    let mut buffer = self.shared_buffer.lock();

                    // Lock scene and camera
                    let scene = self.scene.read();
                    let camera = self.camera.read();

                    // Render
                    Renderer::render_pass(
                        &scene,
                        &camera,
                        &self.render_options,
                        sample_count,
                        &mut buffer[..],
                    );
                }

                // Send result
                self.communication.0.send(()).unwrap();
            }
        })
    }
}
