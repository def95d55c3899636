//! Vision Snake - a snake steered by a tracked fingertip
//!
//! This library provides:
//! - Core game logic: snake engine, palm-gesture restart, clock (game module)
//! - Menu and game states with their manager (states module)
//! - Key codes and a mouse-driven stand-in for hand tracking (input module)
//! - Draw intents and a terminal rasteriser (render module)
//! - Frame-rate measurement (metrics module)
//! - The terminal frame loop (modes module)

pub mod error;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod states;

pub use error::GameError;
