//! Errors surfaced by the game core.

use thiserror::Error;

/// Errors that can occur while wiring or driving the game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A transition named a state that was never registered.
    #[error("state '{0}' does not exist")]
    UnknownState(String),

    /// A hand landmark set did not have the expected number of points.
    #[error("expected {expected} hand landmarks, got {actual}")]
    InvalidLandmarks {
        /// Points a hand must have.
        expected: usize,
        /// Points supplied.
        actual: usize,
    },

    /// Configuration values that cannot produce a playable game.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
