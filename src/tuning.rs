//! Data-driven game balance
//!
//! Balance values live in a JSON document so they can be adjusted without a
//! rebuild. A missing or invalid file falls back to the built-in defaults.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::STARTING_BALLS;

/// Inclusive scalar bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// True when `min <= max` and both ends are finite.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Draw a uniform value from the bounds, inclusive on both ends.
    ///
    /// Degenerate bounds (`min == max`) always yield that value.
    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        if self.min == self.max {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    // === Serve ===
    /// Horizontal serve impulse range
    pub serve_force_x: Bounds,
    /// Vertical serve impulse magnitude range (applied toward negative y)
    pub serve_force_y: Bounds,

    // === Ball ===
    /// Vertical speed band the ball is held to while in play
    pub y_speed: Bounds,
    /// Horizontal offset between ball and paddle center converts to impulse
    /// at this rate
    pub paddle_spin: f32,
    /// Balls below this line are dead
    pub dead_ball_y: f32,

    // === Match ===
    /// Balls per match
    pub starting_balls: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            serve_force_x: Bounds::new(-200.0, 200.0),
            serve_force_y: Bounds::new(750.0, 750.0),
            y_speed: Bounds::new(15.0, 40.0),
            paddle_spin: 750.0,
            dead_ball_y: -15.0,
            starting_balls: STARTING_BALLS,
        }
    }
}

impl Tuning {
    /// True when every range is well-formed and the match has at least one
    /// ball. The speed band must not dip below zero since it bounds a
    /// magnitude.
    pub fn is_valid(&self) -> bool {
        self.serve_force_x.is_valid()
            && self.serve_force_y.is_valid()
            && self.y_speed.is_valid()
            && self.y_speed.min >= 0.0
            && self.paddle_spin.is_finite()
            && self.dead_ball_y.is_finite()
            && self.starting_balls > 0
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Tuning>(&json) {
                Ok(tuning) if tuning.is_valid() => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Ok(_) => {
                    log::warn!("Tuning in {path} has invalid ranges, using defaults");
                    Self::default()
                }
                Err(e) => {
                    log::warn!("Failed to parse tuning from {path}: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {path}, using defaults");
                Self::default()
            }
        }
    }

    /// Save tuning as pretty JSON. Failures are logged, not propagated.
    pub fn save(&self, path: &str) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to write tuning to {path}: {e}");
                } else {
                    log::info!("Tuning saved to {path}");
                }
            }
            Err(e) => log::warn!("Failed to serialize tuning: {e}"),
        }
    }
}
