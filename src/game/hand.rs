//! Hand landmarks as delivered by the tracking service.
//!
//! Coordinates are normalised to `0.0..=1.0` of the frame, with `y` growing
//! downwards, so a fingertip "above" the wrist has the smaller `y`.

use crate::error::GameError;

/// Points in one tracked hand
pub const LANDMARK_COUNT: usize = 21;
pub const WRIST: usize = 0;
/// Thumb, index, middle, ring and pinky tips
pub const FINGERTIPS: [usize; 5] = [4, 8, 12, 16, 20];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One hand's 21 landmarks
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.points.get(index).copied()
    }

    pub fn wrist(&self) -> Landmark {
        self.points[WRIST]
    }

    /// Fingertips strictly above the wrist
    pub fn raised_fingertips(&self) -> usize {
        let wrist_y = self.wrist().y;
        FINGERTIPS
            .iter()
            .filter(|&&tip| self.points[tip].y < wrist_y)
            .count()
    }

    /// Open-palm heuristic: at least `min_fingers` tips above the wrist
    pub fn is_open_palm(&self, min_fingers: usize) -> bool {
        self.raised_fingertips() >= min_fingers
    }

    /// A flat hand with every point at `wrist`, fingertips offset by `tip_dy`
    ///
    /// Negative `tip_dy` raises the fingertips, positive curls them below the wrist.
    pub fn synthetic(wrist: Landmark, tip_dy: f32) -> Self {
        let mut points = [wrist; LANDMARK_COUNT];
        for tip in FINGERTIPS {
            points[tip] = Landmark::new(wrist.x, wrist.y + tip_dy);
        }
        Self { points }
    }
}

impl TryFrom<&[Landmark]> for HandLandmarks {
    type Error = GameError;

    fn try_from(points: &[Landmark]) -> Result<Self, Self::Error> {
        let points: [Landmark; LANDMARK_COUNT] =
            points.try_into().map_err(|_| GameError::InvalidLandmarks {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            })?;
        Ok(Self { points })
    }
}

impl TryFrom<Vec<(f32, f32)>> for HandLandmarks {
    type Error = GameError;

    fn try_from(points: Vec<(f32, f32)>) -> Result<Self, Self::Error> {
        let points: Vec<Landmark> = points.into_iter().map(|(x, y)| Landmark::new(x, y)).collect();
        Self::try_from(points.as_slice())
    }
}
