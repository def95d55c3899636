pub mod handler;
pub mod keys;
pub mod pointer;

pub use handler::InputHandler;
pub use pointer::{PointerTracker, TrackerFrame};
