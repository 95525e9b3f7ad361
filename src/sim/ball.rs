//! Ball control: speed clamping, dead-ball detection, serve, and collision
//! response
//!
//! All of it is reactive. The host calls [`BallController::on_tick`] once per
//! simulation step and [`BallController::on_collision`] once per collision
//! event; the controller never schedules anything itself.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{Ball, CollisionGuard, GamePhase, GameState};
use crate::audio::{SoundBank, SoundEffect};
use crate::consts::SERVE_BUTTON;
use crate::platform::{InputSource, ObjectHandle, ObjectRemover};
use crate::tuning::{Bounds, Tuning};

/// Input sampled from the host once per tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Serve button held this tick
    pub serve: bool,
}

impl TickInput {
    /// Poll the host input source for the buttons the core cares about.
    pub fn poll(source: &impl InputSource) -> Self {
        Self {
            serve: source.is_button_pressed(SERVE_BUTTON),
        }
    }
}

/// What the ball ran into, classified by the host's collision dispatch.
///
/// Exactly one variant applies per collision event; anything that is neither
/// paddle nor block counts as a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// The player paddle; carries the paddle center's x position
    Paddle { x: f32 },
    /// A destructible block, by host handle
    Block { handle: ObjectHandle },
    /// Court wall or anything else
    Wall,
}

/// Per-ball reactive controller
pub struct BallController {
    x_force: Bounds,
    y_force: Bounds,
    y_speed: Bounds,
    paddle_spin: f32,
    dead_ball_y: f32,
    rng: Pcg32,
}

impl BallController {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            x_force: tuning.serve_force_x,
            y_force: tuning.serve_force_y,
            y_speed: tuning.y_speed,
            paddle_spin: tuning.paddle_spin,
            dead_ball_y: tuning.dead_ball_y,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Run the per-tick checks, in program order: speed clamp, dead-ball
    /// detection, serve handling.
    pub fn on_tick(
        &mut self,
        ball: &mut Ball,
        state: &mut GameState,
        guard: &mut CollisionGuard,
        input: TickInput,
    ) {
        self.check_speed(ball);
        self.check_dead_ball(ball, state);
        self.check_serve(ball, state, guard, input);
    }

    /// Hold the ball's vertical speed inside the tuned band.
    ///
    /// Exactly zero vertical velocity carries no direction to clamp along and
    /// is left untouched. Horizontal and depth components are never clamped.
    fn check_speed(&self, ball: &mut Ball) {
        let speed = ball.vel.y.abs();
        if speed == 0.0 {
            return;
        }
        let sign = ball.vel.y.signum();

        if speed < self.y_speed.min {
            ball.vel.y = self.y_speed.min * sign;
        } else if speed > self.y_speed.max {
            ball.vel.y = self.y_speed.max * sign;
        }
    }

    /// Spend a ball once it drops below the dead-ball line.
    ///
    /// Edge-triggered: the transition leaves Play, so a ball that keeps
    /// falling advances the state only once.
    fn check_dead_ball(&self, ball: &Ball, state: &mut GameState) {
        if ball.pos.y < self.dead_ball_y && state.phase == GamePhase::Play {
            state.advance();
            log::info!("Dead ball, {} left", state.balls_left);
        }
    }

    /// While out of play: keep the guard paused and the ball still, and serve
    /// as soon as the serve button is held.
    fn check_serve(
        &mut self,
        ball: &mut Ball,
        state: &mut GameState,
        guard: &mut CollisionGuard,
        input: TickInput,
    ) {
        if state.phase != GamePhase::Play {
            guard.paused = true;
            ball.vel = Vec3::ZERO;

            if input.serve {
                self.serve(ball, state, guard);
            }
        }
    }

    /// Launch the ball from center court with a randomized impulse.
    ///
    /// The vertical component always points toward negative y, into the
    /// court interior.
    pub fn serve(&mut self, ball: &mut Ball, state: &mut GameState, guard: &mut CollisionGuard) {
        state.advance();

        ball.pos = Vec3::ZERO;
        guard.previous_position = Vec3::ZERO;
        guard.paused = false;

        let impulse = Vec3::new(
            self.x_force.sample(&mut self.rng),
            -self.y_force.sample(&mut self.rng),
            0.0,
        );
        ball.apply_impulse(impulse);
        log::debug!("Serve: impulse {impulse}");
    }

    /// Respond to a collision event dispatched by the host.
    ///
    /// Paddle hits convert the horizontal ball/paddle offset into spin,
    /// block hits destroy the block, anything else is a wall bounce. Each
    /// event plays exactly one sound.
    pub fn on_collision(
        &mut self,
        ball: &mut Ball,
        contact: Contact,
        sounds: &mut impl SoundBank,
        remover: &mut impl ObjectRemover,
    ) {
        match contact {
            Contact::Paddle { x } => {
                let force = (ball.pos.x - x) * self.paddle_spin;
                ball.apply_impulse(Vec3::new(force, 0.0, 0.0));
                sounds.play(SoundEffect::PaddleHit);
            }
            Contact::Block { handle } => {
                remover.destroy(handle);
                sounds.play(SoundEffect::BlockDestroyed);
            }
            Contact::Wall => {
                sounds.play(SoundEffect::WallBounce);
            }
        }
    }
}
