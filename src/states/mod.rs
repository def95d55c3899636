//! Game states and the manager that switches between them.
//!
//! The set of states is closed, so they are variants of one enum rather than
//! trait objects. A state never switches itself; it returns a `Signal` and the
//! `StateManager` applies it.

pub mod manager;
pub mod menu;
pub mod playing;

pub use manager::StateManager;
pub use menu::MenuState;
pub use playing::PlayingState;

use crate::game::{HandLandmarks, Point};
use crate::render::Canvas;

/// Registry name of the main menu
pub const MENU: &str = "menu";
/// Registry name of the game itself
pub const PLAYING: &str = "playing";

/// What a state asks of the loop after handling a frame or key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    /// Stop the program
    Quit,
    /// Make the named state current
    Switch(&'static str),
}

pub enum GameState {
    Menu(MenuState),
    Playing(PlayingState),
}

impl GameState {
    pub fn update(&mut self, landmarks: Option<&HandLandmarks>, finger: Option<Point>) -> Signal {
        match self {
            Self::Menu(menu) => menu.update(landmarks, finger),
            Self::Playing(playing) => playing.update(landmarks, finger),
        }
    }

    pub fn render(&self, canvas: Canvas) -> Canvas {
        match self {
            Self::Menu(menu) => menu.render(canvas),
            Self::Playing(playing) => playing.render(canvas),
        }
    }

    pub fn handle_key(&mut self, key: i32) -> Signal {
        match self {
            Self::Menu(menu) => menu.handle_key(key),
            Self::Playing(playing) => playing.handle_key(key),
        }
    }

    pub fn as_menu(&self) -> Option<&MenuState> {
        match self {
            Self::Menu(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn as_playing(&self) -> Option<&PlayingState> {
        match self {
            Self::Playing(playing) => Some(playing),
            _ => None,
        }
    }

    pub fn as_playing_mut(&mut self) -> Option<&mut PlayingState> {
        match self {
            Self::Playing(playing) => Some(playing),
            _ => None,
        }
    }
}

impl From<MenuState> for GameState {
    fn from(menu: MenuState) -> Self {
        Self::Menu(menu)
    }
}

impl From<PlayingState> for GameState {
    fn from(playing: PlayingState) -> Self {
        Self::Playing(playing)
    }
}
