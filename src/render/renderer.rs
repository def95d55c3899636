use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span},
    widgets::{
        Block, BorderType, Borders, Paragraph,
        canvas::{Canvas as CanvasWidget, Circle, Context, Line, Rectangle},
    },
};

use super::canvas::{Canvas, DrawCommand};
use crate::game::Rgb;

/// Braille dots per filled-disc ring, in frame pixels
const DISC_RING_STEP: usize = 3;

/// Rasterises draw intents onto the terminal
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, canvas: &Canvas) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_canvas(canvas), chunks[0]);
        frame.render_widget(self.render_controls(chunks[1]), chunks[1]);
    }

    /// Cells inside the play field border, used to map the mouse into frame pixels
    pub fn play_area(area: Rect) -> Rect {
        let field = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        Block::default().borders(Borders::ALL).inner(field)
    }

    fn render_canvas<'a>(
        &self,
        canvas: &'a Canvas,
    ) -> CanvasWidget<'a, impl Fn(&mut Context<'_>) + 'a> {
        let (width, height) = (f64::from(canvas.width), f64::from(canvas.height));

        CanvasWidget::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Vision Snake "),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                for command in canvas.commands() {
                    draw_command(ctx, command, height);
                }
            })
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![TextLine::from(vec![
            Span::styled("Mouse", Style::default().fg(Color::Cyan)),
            Span::raw(" steers | hold "),
            Span::styled("Left", Style::default().fg(Color::Cyan)),
            Span::raw(" for open palm | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Draws one intent; frame y grows down, canvas y grows up
fn draw_command(ctx: &mut Context<'_>, command: &DrawCommand, height: f64) {
    let flip = |y: i32| height - f64::from(y);

    match command {
        DrawCommand::Circle {
            center,
            radius,
            color: rgb,
            filled,
        } => {
            let (x, y) = (f64::from(center.x), flip(center.y));
            let radius = f64::from(*radius);
            if *filled {
                for r in (1..=radius as usize).step_by(DISC_RING_STEP) {
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: r as f64,
                        color: color(*rgb),
                    });
                }
            }
            ctx.draw(&Circle {
                x,
                y,
                radius,
                color: color(*rgb),
            });
        }
        DrawCommand::Line {
            from,
            to,
            color: rgb,
            ..
        } => {
            ctx.draw(&Line {
                x1: f64::from(from.x),
                y1: flip(from.y),
                x2: f64::from(to.x),
                y2: flip(to.y),
                color: color(*rgb),
            });
        }
        DrawCommand::Rect {
            min,
            max,
            color: rgb,
            ..
        } => {
            ctx.draw(&Rectangle {
                x: f64::from(min.x),
                y: flip(max.y),
                width: f64::from(max.x - min.x),
                height: f64::from(max.y - min.y),
                color: color(*rgb),
            });
        }
        DrawCommand::Text {
            origin,
            text,
            color: rgb,
            scale,
        } => {
            let mut style = Style::default().fg(color(*rgb));
            if *scale >= 1.5 {
                style = style.add_modifier(Modifier::BOLD);
            }
            ctx.print(
                f64::from(origin.x),
                flip(origin.y),
                TextLine::from(Span::styled(text.clone(), style)),
            );
        }
        // layer everything drawn later above what came before
        DrawCommand::Shade { .. } => ctx.layer(),
    }
}
