/// A pixel coordinate in the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move point by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance in pixels
    pub fn distance(&self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const GRAY: Rgb = Rgb(200, 200, 200);

    /// Same hue at half brightness
    pub fn darkened(&self) -> Self {
        Rgb(self.0 / 2, self.1 / 2, self.2 / 2)
    }
}

/// Snake colours by score tier; the last tier is kept once reached
pub const SNAKE_TIERS: [Rgb; 4] = [Rgb::GREEN, Rgb::YELLOW, Rgb::ORANGE, Rgb::RED];

/// Colour of the snake for a score, `score_per_tier` points per tier
pub fn snake_color(score: u32, score_per_tier: u32) -> Rgb {
    let tier = (score / score_per_tier.max(1)) as usize;
    SNAKE_TIERS[tier.min(SNAKE_TIERS.len() - 1)]
}

/// Frames in one food pulsation cycle
pub const FOOD_PULSE_PERIOD: u32 = 30;

/// The single piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
    pub pos: Point,
    pub radius: i32,
    /// Animation phase, `0..FOOD_PULSE_PERIOD`
    pub pulse: u32,
}

impl Food {
    pub fn new(pos: Point, radius: i32) -> Self {
        Self {
            pos,
            radius,
            pulse: 0,
        }
    }

    pub fn advance_pulse(&mut self) {
        self.pulse = (self.pulse + 1) % FOOD_PULSE_PERIOD;
    }

    /// Current drawn radius, swinging 3 px around `radius`
    pub fn pulse_radius(&self) -> f64 {
        f64::from(self.radius) + 3.0 * (f64::from(self.pulse) * 0.2).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_movement() {
        let pos = Point::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Point::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Point::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Point::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Point::new(5, 4));
    }

    #[test]
    fn test_point_distance() {
        assert_eq!(Point::new(0, 0).distance(Point::new(3, 4)), 5.0);
        assert_eq!(Point::new(7, 7).distance(Point::new(7, 7)), 0.0);
    }

    #[test]
    fn test_snake_color_tiers() {
        assert_eq!(snake_color(0, 5), Rgb::GREEN);
        assert_eq!(snake_color(4, 5), Rgb::GREEN);
        assert_eq!(snake_color(5, 5), Rgb::YELLOW);
        assert_eq!(snake_color(14, 5), Rgb::ORANGE);
        assert_eq!(snake_color(15, 5), Rgb::RED);
        assert_eq!(snake_color(500, 5), Rgb::RED);
    }

    #[test]
    fn test_food_pulse_wraps() {
        let mut food = Food::new(Point::new(100, 100), 15);
        for _ in 0..FOOD_PULSE_PERIOD {
            food.advance_pulse();
        }
        assert_eq!(food.pulse, 0);
        assert_eq!(food.pulse_radius(), 15.0);
    }
}
