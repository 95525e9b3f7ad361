//! Deterministic game core
//!
//! This module must stay pure and host-agnostic:
//! - Driven from outside, once per tick / once per collision event
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod state;

pub use ball::{BallController, Contact, TickInput};
pub use state::{Ball, CollisionGuard, GamePhase, GameState};
