use std::f32::consts::TAU;

use tracing::debug;

use super::{PLAYING, Signal};
use crate::game::{HandLandmarks, Point, Rgb};
use crate::input::keys;
use crate::render::{Canvas, canvas::text_width};

pub const OPTIONS: [&str; 3] = ["Start Game", "Settings", "Exit"];

const START: usize = 0;
const SETTINGS: usize = 1;
const EXIT: usize = 2;

/// Vertical distance between option rows
const OPTION_HEIGHT: i32 = 60;
/// A fingertip within this many pixels of a row points at it
const OPTION_BAND: i32 = 20;
/// Frames the pointer selection is frozen after it changes
const SELECTION_COOLDOWN: u32 = 10;

/// Main menu, driven by pointing or by the keyboard
pub struct MenuState {
    width: i32,
    height: i32,
    options: Vec<&'static str>,
    selected: usize,
    cooldown: u32,
    pulse: f32,
}

impl MenuState {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            options: OPTIONS.to_vec(),
            selected: START,
            cooldown: 0,
            pulse: 0.0,
        }
    }

    pub fn options(&self) -> &[&'static str] {
        &self.options
    }

    pub fn selected_option(&self) -> usize {
        self.selected
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    fn option_start_y(&self) -> i32 {
        self.height / 2 - self.options.len() as i32 * OPTION_HEIGHT / 2
    }

    fn option_y(&self, index: usize) -> i32 {
        self.option_start_y() + index as i32 * OPTION_HEIGHT
    }

    /// Option whose row band contains `y`
    fn option_at(&self, y: i32) -> Option<usize> {
        (0..self.options.len()).find(|&i| (y - self.option_y(i)).abs() <= OPTION_BAND)
    }

    fn activate(&self) -> Signal {
        match self.selected {
            START => Signal::Switch(PLAYING),
            EXIT => Signal::Quit,
            // settings screen not built yet
            SETTINGS => Signal::Continue,
            _ => Signal::Continue,
        }
    }

    pub fn update(&mut self, landmarks: Option<&HandLandmarks>, finger: Option<Point>) -> Signal {
        self.pulse = (self.pulse + 0.1) % TAU;

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return Signal::Continue;
        }

        let Some(finger) = finger else {
            return Signal::Continue;
        };

        if let Some(index) = self.option_at(finger.y) {
            if index != self.selected {
                debug!(option = self.options[index], "menu option pointed at");
                self.selected = index;
                self.cooldown = SELECTION_COOLDOWN;
            }
        }

        if landmarks.is_some() && self.cooldown == 0 {
            return self.activate();
        }
        Signal::Continue
    }

    pub fn handle_key(&mut self, key: i32) -> Signal {
        let count = self.options.len();
        if keys::is_up(key) {
            self.selected = (self.selected + count - 1) % count;
        } else if keys::is_down(key) {
            self.selected = (self.selected + 1) % count;
        } else if keys::is_activate(key) {
            return self.activate();
        } else if keys::is_quit(key) {
            return Signal::Quit;
        }
        Signal::Continue
    }

    pub fn render(&self, mut canvas: Canvas) -> Canvas {
        canvas.shade(0.7);

        let title = "VISION SNAKE";
        let title_y = self.height / 4;
        let title_x = self.width / 2 - text_width(title, 2.0) / 2;
        for offset in (1..=5).rev() {
            let glow = Rgb(50 + offset as u8 * 40, 0, 0);
            canvas.text(Point::new(title_x - offset, title_y), title, glow, 2.0);
        }
        canvas.text(Point::new(title_x, title_y), title, Rgb(255, 200, 0), 2.0);

        for (i, option) in self.options.iter().enumerate() {
            let y = self.option_y(i);
            if i == self.selected {
                let intensity = (155.0 + 100.0 * self.pulse.sin()) as u8;
                let half = text_width(option, 1.0) / 2;
                let (cx, padding) = (self.width / 2, 20);
                canvas.rect(
                    Point::new(cx - half - padding, y - OPTION_BAND - padding),
                    Point::new(cx + half + padding, y + padding),
                    Rgb(255, intensity, 0),
                    false,
                );
                canvas.centered_text(y, *option, Rgb::YELLOW, 1.0);
            } else {
                canvas.centered_text(y, *option, Rgb::GRAY, 1.0);
            }
        }

        canvas.centered_text(
            self.height * 85 / 100,
            "Point at an option and hold to select",
            Rgb(150, 150, 150),
            0.7,
        );
        canvas
    }
}
