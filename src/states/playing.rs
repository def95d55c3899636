use rand::rngs::StdRng;
use tracing::info;

use super::{MENU, Signal};
use crate::game::{
    GameConfig, GestureResetTimer, HandLandmarks, Point, Rgb, SharedClock, SnakeEngine,
};
use crate::input::keys;
use crate::metrics::FpsCounter;
use crate::render::Canvas;

const PROGRESS_BAR_WIDTH: i32 = 200;

/// The game itself: the snake engine, the palm restart timer and pause
pub struct PlayingState {
    width: i32,
    height: i32,
    game: SnakeEngine,
    reset_timer: GestureResetTimer,
    fps: FpsCounter,
    paused: bool,
}

impl PlayingState {
    pub fn new(config: GameConfig, clock: SharedClock, rng: StdRng) -> Self {
        let reset_timer = GestureResetTimer::new(
            clock.clone(),
            config.palm_hold_duration(),
            config.palm_min_fingers,
        );
        Self {
            width: config.width,
            height: config.height,
            fps: FpsCounter::new(clock.clone()),
            game: SnakeEngine::new(config, clock, rng),
            reset_timer,
            paused: false,
        }
    }

    pub fn game(&self) -> &SnakeEngine {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut SnakeEngine {
        &mut self.game
    }

    pub fn reset_timer(&self) -> &GestureResetTimer {
        &self.reset_timer
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn restart(&mut self) {
        self.game.reset();
        self.reset_timer.clear();
    }

    pub fn update(&mut self, landmarks: Option<&HandLandmarks>, finger: Option<Point>) -> Signal {
        self.fps.tick();
        if self.paused {
            return Signal::Continue;
        }

        self.game.advance_animation();

        // frames without a hand leave a running palm hold alone
        if self.game.is_game_over() {
            if let Some(hand) = landmarks {
                if self.reset_timer.observe(Some(hand)) {
                    info!(score = self.game.score(), "restarting after open palm");
                    self.game.reset();
                }
            }
        }

        if finger.is_some() {
            self.game.update(finger);
        }
        Signal::Continue
    }

    pub fn handle_key(&mut self, key: i32) -> Signal {
        if key == keys::ascii('p') {
            self.paused = !self.paused;
            info!(paused = self.paused, "pause toggled");
        } else if key == keys::ascii('m') {
            if self.paused {
                return Signal::Switch(MENU);
            }
        } else if key == keys::ascii('r') {
            self.restart();
        } else if keys::is_quit(key) {
            return Signal::Quit;
        }
        Signal::Continue
    }

    pub fn render(&self, canvas: Canvas) -> Canvas {
        let mut canvas = self.game.draw(canvas);

        if self.game.is_game_over() && self.reset_timer.is_tracking() {
            self.draw_reset_progress(&mut canvas);
        }

        canvas.text(
            Point::new(self.width - 120, 30),
            self.fps.format_fps(),
            Rgb::WHITE,
            0.7,
        );

        if self.paused {
            let text_y = self.height / 2;
            canvas
                .shade(0.5)
                .centered_text(text_y, "PAUSED", Rgb::WHITE, 2.0)
                .centered_text(text_y + 50, "Press 'P' to resume", Rgb::GRAY, 1.0)
                .centered_text(text_y + 90, "Press 'M' for menu", Rgb::GRAY, 1.0);
        }
        canvas
    }

    fn draw_reset_progress(&self, canvas: &mut Canvas) {
        let filled = (PROGRESS_BAR_WIDTH as f32 * self.reset_timer.progress()) as i32;
        let left = self.width / 2 - PROGRESS_BAR_WIDTH / 2;
        let (top, bottom) = (self.height / 2 + 120, self.height / 2 + 140);
        canvas
            .rect(
                Point::new(left, top),
                Point::new(left + filled, bottom),
                Rgb::GREEN,
                true,
            )
            .rect(
                Point::new(left, top),
                Point::new(left + PROGRESS_BAR_WIDTH, bottom),
                Rgb::WHITE,
                false,
            );
    }
}
