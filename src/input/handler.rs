use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::keys;

/// Translates terminal key events into the game's integer key codes
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn key_code(&self, key: KeyEvent) -> Option<i32> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(keys::ESCAPE);
        }

        match key.code {
            KeyCode::Up => Some(keys::ARROW_UP),
            KeyCode::Down => Some(keys::ARROW_DOWN),
            KeyCode::Enter => Some(keys::ENTER),
            KeyCode::Esc => Some(keys::ESCAPE),
            KeyCode::Char(c) if c.is_ascii() => Some(keys::ascii(c.to_ascii_lowercase())),
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(handler.key_code(up), Some(keys::ARROW_UP));

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(handler.key_code(down), Some(keys::ARROW_DOWN));
    }

    #[test]
    fn test_letter_keys_lowercased() {
        let handler = InputHandler::new();

        let p = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(handler.key_code(p), Some(112));

        let p_upper = KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT);
        assert_eq!(handler.key_code(p_upper), Some(112));
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new();

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(handler.key_code(enter), Some(keys::ENTER));

        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(handler.key_code(space), Some(keys::SPACE));

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.key_code(esc), Some(keys::ESCAPE));
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        let f1 = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(handler.key_code(f1), None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.key_code(ctrl_c), Some(keys::ESCAPE));
    }
}
