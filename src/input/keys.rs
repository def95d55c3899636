//! Integer key codes understood by the game states.
//!
//! Printable keys use their ASCII value; the arrow codes follow the values
//! HighGUI-style windows report for Up and Down.

pub const ENTER: i32 = 13;
pub const ESCAPE: i32 = 27;
pub const SPACE: i32 = 32;
pub const ARROW_UP: i32 = 82;
pub const ARROW_DOWN: i32 = 84;

/// Key code of an ASCII character
pub const fn ascii(c: char) -> i32 {
    c as i32
}

pub fn is_quit(key: i32) -> bool {
    key == ESCAPE || key == ascii('q')
}

pub fn is_up(key: i32) -> bool {
    key == ARROW_UP || key == ascii('w') || key == ascii('i')
}

pub fn is_down(key: i32) -> bool {
    key == ARROW_DOWN || key == ascii('s') || key == ascii('k')
}

pub fn is_activate(key: i32) -> bool {
    key == ENTER || key == SPACE
}
