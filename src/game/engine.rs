use std::collections::VecDeque;
use std::time::Duration;

use rand::{Rng, rngs::StdRng};
use tracing::{debug, info};

use super::{
    clock::SharedClock,
    config::GameConfig,
    state::{Food, Point, Rgb, snake_color},
};
use crate::render::Canvas;

/// Time gate between movement steps
///
/// Calls arriving before the interval has elapsed are rejected, not queued.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateThrottle {
    last_update: Option<Duration>,
    interval: Duration,
}

impl UpdateThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            last_update: None,
            interval,
        }
    }

    /// Opens the gate when forced or once `interval` has passed, recording `now`
    pub fn try_pass(&mut self, now: Duration, force: bool) -> bool {
        let due = match self.last_update {
            Some(last) => now.saturating_sub(last) >= self.interval,
            None => true,
        };
        if force || due {
            self.last_update = Some(now);
            true
        } else {
            false
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Shortens the interval; a longer one is ignored
    pub fn tighten(&mut self, interval: Duration) {
        self.interval = self.interval.min(interval);
    }

    pub fn reset(&mut self, interval: Duration) {
        self.interval = interval;
    }
}

/// The snake, its food and score
///
/// The body follows the fingertip: every accepted step appends the fingertip
/// position as the new head (last element) and drops the oldest points beyond
/// `max_length`.
pub struct SnakeEngine {
    config: GameConfig,
    clock: SharedClock,
    rng: StdRng,
    body: VecDeque<Point>,
    max_length: usize,
    food: Food,
    score: u32,
    game_over: bool,
    throttle: UpdateThrottle,
}

impl SnakeEngine {
    /// Create a new engine; the first food is placed immediately
    pub fn new(config: GameConfig, clock: SharedClock, rng: StdRng) -> Self {
        let throttle = UpdateThrottle::new(config.update_interval_for(0));
        let food = Food::new(
            Point::new(config.width / 2, config.height / 2),
            config.food_radius,
        );
        let mut engine = Self {
            max_length: config.initial_max_length,
            config,
            clock,
            rng,
            body: VecDeque::new(),
            food,
            score: 0,
            game_over: false,
            throttle,
        };
        engine.generate_food();
        engine
    }

    /// Start a fresh round in place
    pub fn reset(&mut self) {
        self.body.clear();
        self.max_length = self.config.initial_max_length;
        self.score = 0;
        self.game_over = false;
        self.throttle.reset(self.config.update_interval_for(0));
        self.generate_food();
        info!("snake game reset");
    }

    /// Place new food uniformly in `[margin, dimension - margin)` on both axes
    ///
    /// An axis too small for its margins gets the food at its centre.
    pub fn generate_food(&mut self) {
        let margin = self.config.food_margin;
        let x = self.sample_axis(margin, self.config.width);
        let y = self.sample_axis(margin, self.config.height);
        self.food = Food::new(Point::new(x, y), self.config.food_radius);
        debug!(x, y, "food placed");
    }

    fn sample_axis(&mut self, margin: i32, dimension: i32) -> i32 {
        if dimension > 2 * margin {
            self.rng.gen_range(margin..dimension - margin)
        } else {
            dimension / 2
        }
    }

    /// Advance the game with the latest fingertip position
    ///
    /// Returns `false` once the game is over or when there is no input, `true`
    /// otherwise, including when the step was held back by the throttle.
    pub fn update(&mut self, head: Option<Point>) -> bool {
        let Some(head) = head else {
            return false;
        };
        if self.game_over {
            return false;
        }

        if self.collides_with_body(head) {
            self.game_over = true;
            info!(score = self.score, x = head.x, y = head.y, "snake collided with itself");
            return false;
        }

        let now = self.clock.now();
        if !self.throttle.try_pass(now, self.body.is_empty()) {
            return true;
        }

        self.body.push_back(head);

        if self.is_eating(head) {
            self.eat();
        }

        while self.body.len() > self.max_length {
            self.body.pop_front();
        }

        true
    }

    /// Whether `head` hits a body point outside the exclusion window
    pub fn collides_with_body(&self, head: Point) -> bool {
        let checked = self.body.len().saturating_sub(self.config.exclusion_window);
        self.body
            .iter()
            .take(checked)
            .any(|&part| part == head || part.distance(head) < self.config.collision_threshold)
    }

    fn is_eating(&self, head: Point) -> bool {
        let reach = f64::from(self.food.radius + self.config.head_radius);
        head.distance(self.food.pos) < reach
    }

    fn eat(&mut self) {
        self.score += 1;
        self.max_length += self.config.growth_per_food;
        self.throttle.tighten(self.config.update_interval_for(self.score));
        debug!(score = self.score, max_length = self.max_length, "food eaten");
        self.generate_food();
    }

    /// One animation frame for the food
    pub fn advance_animation(&mut self) {
        self.food.advance_pulse();
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn head(&self) -> Option<Point> {
        self.body.back().copied()
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn update_interval(&self) -> Duration {
        self.throttle.interval()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Append the snake, food, score and game-over screen to `canvas`
    pub fn draw(&self, mut canvas: Canvas) -> Canvas {
        self.draw_snake(&mut canvas);
        self.draw_food(&mut canvas);

        let score_text = format!("Score: {}", self.score);
        canvas
            .text(Point::new(11, 31), score_text.clone(), Rgb::BLACK, 1.0)
            .text(Point::new(10, 30), score_text, Rgb::WHITE, 1.0);

        if self.game_over {
            self.draw_game_over(&mut canvas);
        }
        canvas
    }

    fn draw_snake(&self, canvas: &mut Canvas) {
        if self.body.is_empty() {
            return;
        }
        let color = snake_color(self.score, self.config.score_per_tier);
        let len = self.body.len();

        // rings around the points the head can collide with
        let checked = len.saturating_sub(self.config.exclusion_window);
        for &part in self.body.iter().take(checked) {
            canvas.circle(part, 15, Rgb(200, 0, 0));
        }

        for (i, (&from, &to)) in self.body.iter().zip(self.body.iter().skip(1)).enumerate() {
            let thickness = 5 + ((i + 1) * 5 / len) as i32;
            canvas.line(from, to, color, thickness);
        }

        for (i, &part) in self.body.iter().enumerate() {
            if i == len - 1 {
                canvas
                    .circle(part, 12, Rgb::WHITE)
                    .disc(part, 10, color);
            } else {
                let radius = 5 + (i * 5 / len) as i32;
                canvas
                    .disc(part, radius, color)
                    .circle(part, radius, color.darkened());
            }
        }
    }

    fn draw_food(&self, canvas: &mut Canvas) {
        let pos = self.food.pos;
        let size = self.food.pulse_radius();
        let radius = size as i32;

        canvas
            .circle(pos, radius + 10, Rgb(255, 140, 0))
            .circle(pos, radius + 5, Rgb(255, 215, 0))
            .disc(pos, radius, Rgb::RED)
            .circle(pos, radius, Rgb::WHITE)
            .text(
                Point::new(pos.x - 40, pos.y - radius - 10),
                "COLLECT",
                Rgb::YELLOW,
                0.6,
            );
    }

    fn draw_game_over(&self, canvas: &mut Canvas) {
        let (width, height) = (self.config.width, self.config.height);
        canvas.shade(0.5).rect(
            Point::new(10, 10),
            Point::new(width - 10, height - 10),
            Rgb::RED,
            false,
        );

        let text_y = height / 2;
        canvas
            .centered_text(text_y, "GAME OVER!", Rgb::RED, 2.0)
            .centered_text(
                text_y + 50,
                format!("Final Score: {}", self.score),
                Rgb::WHITE,
                1.2,
            )
            .centered_text(text_y + 110, "Show open palm to restart", Rgb::YELLOW, 1.0);
    }
}

#[cfg(test)]
impl SnakeEngine {
    pub(crate) fn place_food(&mut self, pos: Point) {
        self.food = Food::new(pos, self.config.food_radius);
    }

    pub(crate) fn set_body(&mut self, points: &[Point]) {
        self.body = points.iter().copied().collect();
    }

    pub(crate) fn force_game_over(&mut self) {
        self.game_over = true;
    }
}
