mod render_front;
mod renderer;
mod serial_renderer;

pub use render_front::{RenderThread, RendererFront, RendererMessage};
pub use renderer::{RenderOptions, Renderer};
pub use serial_renderer::SerialRenderer;
