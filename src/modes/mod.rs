pub mod terminal;

pub use terminal::{TerminalMode, select_device};
