//! Core game logic for Vision Snake
//!
//! Everything here is free of I/O: time comes from an injected `Clock`, food
//! placement from an explicit RNG, and drawing produces a list of draw intents.

pub mod clock;
pub mod config;
pub mod engine;
pub mod gesture;
pub mod hand;
pub mod state;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use config::GameConfig;
pub use engine::{SnakeEngine, UpdateThrottle};
pub use gesture::GestureResetTimer;
pub use hand::{HandLandmarks, Landmark};
pub use state::{Food, Point, Rgb};
