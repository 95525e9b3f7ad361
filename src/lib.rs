//! Courtball - a paddle-and-ball arcade core (Pong/Breakout hybrid)
//!
//! Core modules:
//! - `sim`: Deterministic game logic (phase machine, ball control, collisions)
//! - `audio`: Sound effect routing to a host playback seam
//! - `platform`: Host collaborator contracts (input, object removal)
//! - `tuning`: Data-driven game balance
//! - `ui`: HUD text surfaces
//!
//! The crate owns no loop of its own: a host (engine or the headless demo
//! binary) drives `BallController::on_tick` once per simulation step and
//! `BallController::on_collision` once per collision event.

pub mod audio;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::{Bounds, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Name of the serve button polled from the host input source
    pub const SERVE_BUTTON: &str = "Serve";

    /// Balls the player starts a match with
    pub const STARTING_BALLS: u32 = 3;
}
