//! Terminal mouse as a stand-in for the hand-tracking service.
//!
//! The pointer position is the fingertip. Holding the left button shows an
//! open palm, holding any other button shows a hand with curled fingers, and
//! with no button held no hand is reported. Like a camera tracker that loses
//! the hand, the last known fingertip is kept until a new one arrives.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::game::{HandLandmarks, Landmark, Point};

/// What the tracker reports for one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackerFrame {
    pub finger: Option<Point>,
    pub landmarks: Option<HandLandmarks>,
}

pub struct PointerTracker {
    frame_width: i32,
    frame_height: i32,
    /// Terminal cells the frame is shown in
    area: Rect,
    last_finger: Option<Point>,
    pressed: Option<MouseButton>,
}

impl PointerTracker {
    pub fn new(frame_width: i32, frame_height: i32, area: Rect) -> Self {
        Self {
            frame_width,
            frame_height,
            area,
            last_finger: None,
            pressed: None,
        }
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Down(button) => self.pressed = Some(button),
            MouseEventKind::Up(_) => self.pressed = None,
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {}
            _ => return,
        }
        self.last_finger = Some(self.to_pixels(event.column, event.row));
    }

    /// Cell centre mapped into frame pixels
    fn to_pixels(&self, column: u16, row: u16) -> Point {
        let columns = f64::from(self.area.width.max(1));
        let rows = f64::from(self.area.height.max(1));
        let column = f64::from(column) - f64::from(self.area.x);
        let row = f64::from(row) - f64::from(self.area.y);
        let x = (column + 0.5) * f64::from(self.frame_width) / columns;
        let y = (row + 0.5) * f64::from(self.frame_height) / rows;
        Point::new(
            (x as i32).clamp(0, self.frame_width - 1),
            (y as i32).clamp(0, self.frame_height - 1),
        )
    }

    pub fn sample(&self) -> TrackerFrame {
        let landmarks = match (self.pressed, self.last_finger) {
            (Some(button), Some(finger)) => {
                let wrist = Landmark::new(
                    finger.x as f32 / self.frame_width as f32,
                    finger.y as f32 / self.frame_height as f32,
                );
                let tip_dy = if button == MouseButton::Left { -0.2 } else { 0.1 };
                Some(HandLandmarks::synthetic(wrist, tip_dy))
            }
            _ => None,
        };
        TrackerFrame {
            finger: self.last_finger,
            landmarks,
        }
    }
}
