//! Shared game state and simulation bodies
//!
//! One `GameState` exists per session. `BallController` is its only writer;
//! the HUD and the host read it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to serve
    Serve,
    /// Ball in play
    Play,
    /// Ball left the court, waiting for the next serve
    Dead,
    /// No balls left
    GameOver,
}

/// Match progress: the phase machine plus the remaining-tries counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Balls the player has left
    pub balls_left: u32,
    /// Ball count a fresh match starts with
    starting_balls: u32,
}

impl GameState {
    pub fn new(starting_balls: u32) -> Self {
        Self {
            phase: GamePhase::Serve,
            balls_left: starting_balls,
            starting_balls,
        }
    }

    /// Move to the next phase in the fixed cycle.
    ///
    /// Serve -> Play. Play -> Dead, spending one ball; the last ball goes to
    /// GameOver instead. Dead -> Play. GameOver -> Serve with the ball count
    /// restored (match restart).
    pub fn advance(&mut self) {
        self.phase = match self.phase {
            GamePhase::Serve => GamePhase::Play,
            GamePhase::Play => {
                self.balls_left = self.balls_left.saturating_sub(1);
                if self.balls_left == 0 {
                    GamePhase::GameOver
                } else {
                    GamePhase::Dead
                }
            }
            GamePhase::Dead => GamePhase::Play,
            GamePhase::GameOver => {
                self.balls_left = self.starting_balls;
                GamePhase::Serve
            }
        };
    }
}

/// The ball's physical body
///
/// The host physics integrates it; the core reads it every tick and
/// overwrites velocity/position at clamp, reset, and serve time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
        }
    }

    /// Instantaneous impulse, unit mass: the velocity changes by `impulse`.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.vel += impulse;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Externally-owned tunneling-prevention helper, observed through the two
/// fields the core coordinates: whether it is running, and the last position
/// it should treat as known-good.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CollisionGuard {
    pub paused: bool,
    pub previous_position: Vec3,
}
