pub mod canvas;
pub mod renderer;

pub use canvas::{Canvas, DrawCommand};
pub use renderer::Renderer;
