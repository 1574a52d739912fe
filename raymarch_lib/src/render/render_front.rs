use std::{sync::Arc, thread::JoinHandle};

use crossbeam::channel::{Receiver, Sender};
use parking_lot::{Mutex, RwLock};

use crate::camera::Camera;
use crate::scene::Scene;

/// Messages to renderer
///
/// Messages queue up and one is read after frame is done
pub enum RendererMessage {
    /// Start a full-quality render pass
    StartRendering,
    /// Start a preview-quality pass (fewer march samples)
    StartRenderingFast,
    /// Shut down, thread will get ready to be joined
    ShutDown,
}

/// Interface for renderers running in different thread
///
/// Must be implemented by renderers that wish to communicate using
/// [`RendererFront`].
pub trait RenderThread {
    /// Get reference to shared framebuffer
    fn get_shared_buffer(&self) -> Arc<Mutex<Vec<u8>>>;

    /// Get reference to camera
    ///
    /// If you obtain write lock, you can change camera position
    fn get_camera(&self) -> Arc<RwLock<Camera>>;

    /// Get reference to scene
    ///
    /// Obtain write lock to adjust objects between frames; the lock
    /// also keeps mutation and rendering serialized.
    fn get_scene(&self) -> Arc<RwLock<Scene>>;

    /// Spawn thread with renderer
    ///
    /// Renderer waits for messages, does _not_ start rendering.
    /// Returns handle which can be used to sync with parent thread.
    fn start(self) -> JoinHandle<()>;

    /// Communication setter
    fn set_communication(&mut self, communication: (Sender<()>, Receiver<RendererMessage>));
}

/// Communicating with renderer
///
/// Can be active or inactive.
pub struct RendererFront {
    handle: Option<JoinHandle<()>>,
    buffer: Option<Arc<Mutex<Vec<u8>>>>,
    camera: Option<Arc<RwLock<Camera>>>,
    scene: Option<Arc<RwLock<Scene>>>,
    communication_in: (Sender<RendererMessage>, Receiver<RendererMessage>),
    communication_out: (Sender<()>, Receiver<()>),
}

impl RendererFront {
    /// Create inactive front
    pub fn new() -> Self {
        let communication_in = crossbeam::channel::bounded(100); // main -> renderer
        let communication_out = crossbeam::channel::bounded(100); // renderer -> main
        Self {
            handle: None,
            buffer: None,
            camera: None,
            scene: None,
            communication_in,
            communication_out,
        }
    }

    /// Getter for sender
    /// Returned struct can be used to send commands to renderer
    pub fn get_sender(&self) -> Sender<RendererMessage> {
        self.communication_in.0.clone()
    }

    /// Send message to renderer
    pub fn send_message(&self, msg: RendererMessage) {
        self.communication_in.0.send(msg).unwrap()
    }

    /// Getter for message receiver
    ///
    /// Receive messages from renderer.
    /// The only message means a new frame is ready and the shared buffer can be read.
    pub fn get_receiver(&self) -> Receiver<()> {
        self.communication_out.1.clone()
    }

    /// Receive message from renderer
    ///
    /// Blocking call
    pub fn receive_message(&self) {
        self.communication_out.1.recv().unwrap()
    }

    /// Getter for shared framebuffer
    /// If front is inactive, return `None`
    pub fn get_buffer_handle(&self) -> Option<Arc<Mutex<Vec<u8>>>> {
        self.buffer.as_ref().cloned()
    }

    /// Getter for camera handle
    /// If front is inactive, return `None`
    pub fn get_camera_handle(&self) -> Option<Arc<RwLock<Camera>>> {
        self.camera.as_ref().cloned()
    }

    /// Getter for scene handle
    /// If front is inactive, return `None`
    pub fn get_scene_handle(&self) -> Option<Arc<RwLock<Scene>>> {
        self.scene.as_ref().cloned()
    }

    /// Start `renderer`
    ///
    /// Front goes into active state.
    /// If front was already active, previous renderer gets shutdown first.
    pub fn start_rendering<R: RenderThread>(&mut self, mut renderer: R) {
        // Shutdown if needed
        if let Some(handle) = self.handle.take() {
            self.communication_in
                .0
                .send(RendererMessage::ShutDown)
                .unwrap();
            handle.join().unwrap();
            self.buffer = None;
        }

        let communication = (
            self.communication_out.0.clone(),
            self.communication_in.1.clone(),
        );
        renderer.set_communication(communication);
        let buffer = renderer.get_shared_buffer();
        let camera = renderer.get_camera();
        let scene = renderer.get_scene();
        let handle = renderer.start(); // start thread but wait for a start message
        self.buffer = Some(buffer);
        self.handle = Some(handle);
        self.camera = Some(camera);
        self.scene = Some(scene);
    }

    /// Sync thread with parent
    ///
    /// `ShutDown` message must be sent first separately.
    /// Call is blocking until thread is joined.
    /// Front goes into inactive state.
    pub fn finish(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
            self.buffer = None;
            self.handle = None;
            self.camera = None;
            self.scene = None;
        }
    }
}

impl Default for RendererFront {
    fn default() -> Self {
        Self::new()
    }
}
