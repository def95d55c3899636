//! Draw intents produced by the game states.
//!
//! The core never touches pixels. Each frame the states append commands to a
//! `Canvas`, and whichever backend displays the frame rasterises them in order.

use crate::game::{Point, Rgb};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: i32,
        color: Rgb,
        filled: bool,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        thickness: i32,
    },
    Rect {
        min: Point,
        max: Point,
        color: Rgb,
        filled: bool,
    },
    Text {
        origin: Point,
        text: String,
        color: Rgb,
        scale: f32,
    },
    /// Darken everything drawn so far by `alpha` (0 = none, 1 = black)
    Shade { alpha: f32 },
}

/// A frame-sized list of draw commands
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub width: i32,
    pub height: i32,
    commands: Vec<DrawCommand>,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn push(&mut self, command: DrawCommand) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn circle(&mut self, center: Point, radius: i32, color: Rgb) -> &mut Self {
        self.push(DrawCommand::Circle {
            center,
            radius,
            color,
            filled: false,
        })
    }

    pub fn disc(&mut self, center: Point, radius: i32, color: Rgb) -> &mut Self {
        self.push(DrawCommand::Circle {
            center,
            radius,
            color,
            filled: true,
        })
    }

    pub fn line(&mut self, from: Point, to: Point, color: Rgb, thickness: i32) -> &mut Self {
        self.push(DrawCommand::Line {
            from,
            to,
            color,
            thickness,
        })
    }

    pub fn rect(&mut self, min: Point, max: Point, color: Rgb, filled: bool) -> &mut Self {
        self.push(DrawCommand::Rect {
            min,
            max,
            color,
            filled,
        })
    }

    pub fn text(
        &mut self,
        origin: Point,
        text: impl Into<String>,
        color: Rgb,
        scale: f32,
    ) -> &mut Self {
        self.push(DrawCommand::Text {
            origin,
            text: text.into(),
            color,
            scale,
        })
    }

    /// Text horizontally centred on the canvas at baseline `y`
    pub fn centered_text(
        &mut self,
        y: i32,
        text: impl Into<String>,
        color: Rgb,
        scale: f32,
    ) -> &mut Self {
        let text = text.into();
        let x = self.width / 2 - text_width(&text, scale) / 2;
        self.text(Point::new(x, y), text, color, scale)
    }

    pub fn shade(&mut self, alpha: f32) -> &mut Self {
        self.push(DrawCommand::Shade {
            alpha: alpha.clamp(0.0, 1.0),
        })
    }

    /// Texts drawn so far, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|text| text.contains(needle))
    }
}

/// Approximate pixel width of a label at `scale` (about 20 px per glyph at 1.0)
pub fn text_width(text: &str, scale: f32) -> i32 {
    (text.chars().count() as f32 * 20.0 * scale).round() as i32
}
