use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the play area in pixels
    pub width: i32,
    /// Height of the play area in pixels
    pub height: i32,

    /// Food never spawns closer than this to any edge
    pub food_margin: i32,
    /// Radius of the food circle
    pub food_radius: i32,
    /// Radius of the snake head, added to the food radius for eating
    pub head_radius: i32,

    /// Number of body points kept at the start of a round
    pub initial_max_length: usize,
    /// Extra body points granted per food eaten
    pub growth_per_food: usize,

    /// Distance under which the head hits an older body point
    pub collision_threshold: f64,
    /// Most recent body points skipped by the self-collision check
    pub exclusion_window: usize,

    /// Seconds between movement steps at score 0
    pub base_update_interval: f64,
    /// Fastest allowed step interval in seconds
    pub min_update_interval: f64,
    /// Seconds shaved off the step interval per point scored
    pub speedup_per_point: f64,

    /// Seconds an open palm must be held to restart after game over
    pub palm_hold: f64,
    /// Fingertips that must be above the wrist to count as an open palm
    pub palm_min_fingers: usize,

    /// Points per snake colour tier
    pub score_per_tier: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            food_margin: 50,
            food_radius: 15,
            head_radius: 10,
            initial_max_length: 10,
            growth_per_food: 5,
            collision_threshold: 10.0,
            exclusion_window: 4,
            base_update_interval: 0.05,
            min_update_interval: 0.03,
            speedup_per_point: 0.001,
            palm_hold: 2.0,
            palm_min_fingers: 4,
            score_per_tier: 5,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom play area
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse game config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "play area must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.food_margin < 0 || self.food_radius <= 0 || self.head_radius < 0 {
            return Err(GameError::InvalidConfig(
                "food margin and radii must not be negative".to_string(),
            ));
        }
        if self.initial_max_length == 0 || self.score_per_tier == 0 {
            return Err(GameError::InvalidConfig(
                "initial length and score per tier must be at least 1".to_string(),
            ));
        }
        let floats = [
            ("base_update_interval", self.base_update_interval),
            ("min_update_interval", self.min_update_interval),
            ("speedup_per_point", self.speedup_per_point),
            ("collision_threshold", self.collision_threshold),
            ("palm_hold", self.palm_hold),
        ];
        if let Some((name, value)) = floats.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(GameError::InvalidConfig(format!(
                "{name} must be a finite number, got {value}"
            )));
        }
        if !(self.min_update_interval > 0.0
            && self.min_update_interval <= self.base_update_interval)
        {
            return Err(GameError::InvalidConfig(format!(
                "update interval floor {} must be positive and at most the base {}",
                self.min_update_interval, self.base_update_interval
            )));
        }
        if self.speedup_per_point < 0.0 || self.palm_hold <= 0.0 || self.collision_threshold < 0.0 {
            return Err(GameError::InvalidConfig(
                "speed-up, palm hold and collision threshold must be positive".to_string(),
            ));
        }
        if self.palm_min_fingers == 0 || self.palm_min_fingers > 5 {
            return Err(GameError::InvalidConfig(format!(
                "palm finger count must be within 1..=5, got {}",
                self.palm_min_fingers
            )));
        }
        Ok(())
    }

    /// Step interval for a given score, floored at `min_update_interval`
    pub fn update_interval_for(&self, score: u32) -> Duration {
        let secs = (self.base_update_interval - f64::from(score) * self.speedup_per_point)
            .max(self.min_update_interval);
        Duration::from_secs_f64(secs)
    }

    pub fn palm_hold_duration(&self) -> Duration {
        Duration::from_secs_f64(self.palm_hold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.initial_max_length, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(320, 240);
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 240);
        assert_eq!(config.food_margin, 50);
    }

    #[test]
    fn test_update_interval_floor() {
        let config = GameConfig::default();
        assert_eq!(config.update_interval_for(0), Duration::from_secs_f64(0.05));
        assert!(config.update_interval_for(5) < config.update_interval_for(4));
        assert_eq!(config.update_interval_for(100), Duration::from_secs_f64(0.03));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("width = 800\npalm_hold = 1.5\n").unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 480);
        assert_eq!(config.palm_hold, 1.5);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(GameConfig::from_toml_str("width = 0").is_err());
        assert!(GameConfig::from_toml_str("min_update_interval = 0.5").is_err());
        assert!(GameConfig::from_toml_str("palm_min_fingers = 6").is_err());
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        for source in [
            "palm_hold = inf",
            "palm_hold = nan",
            "base_update_interval = inf",
            "min_update_interval = nan",
            "speedup_per_point = inf",
            "collision_threshold = inf",
        ] {
            let err = GameConfig::from_toml_str(source).unwrap_err();
            assert!(
                err.to_string().contains("finite"),
                "{source} gave: {err}"
            );
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "height = 360\nexclusion_window = 5").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.height, 360);
        assert_eq!(config.exclusion_window, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/vision_snake.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
