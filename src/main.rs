//! Courtball headless demo host
//!
//! Drives the core without an engine: a fixed-timestep loop with naive
//! integration, a rectangular court, a block field, and a scripted player.
//! The host owns everything the core treats as external - physics stepping,
//! collision detection, input, and the sound/removal seams.
//!
//! Run with `RUST_LOG=info` (or `debug` to see every bounce). Optional args:
//! a tuning JSON path and a RNG seed.

use glam::Vec3;

use courtball::audio::{LogSoundBank, SoundRouter};
use courtball::consts::{SERVE_BUTTON, SIM_DT};
use courtball::platform::{InputSource, ObjectHandle, ObjectRemover};
use courtball::sim::{Ball, BallController, CollisionGuard, Contact, GamePhase, GameState, TickInput};
use courtball::tuning::Tuning;
use courtball::ui::ScoreboardDisplay;

/// Court geometry (demo-only; a real engine would bring its own scene)
const COURT_HALF_WIDTH: f32 = 10.0;
const COURT_TOP: f32 = 14.0;
const BALL_RADIUS: f32 = 0.3;

/// Paddle segment near the bottom of the court
const PADDLE_Y: f32 = -12.0;
const PADDLE_HALF_WIDTH: f32 = 2.0;
/// Horizontal paddle speed limit; slow enough to miss fast balls
const PADDLE_SPEED: f32 = 30.0;

/// Safety cap on demo length
const MAX_TICKS: u64 = 200_000;

/// Button state for the scripted player
#[derive(Debug, Default)]
struct DemoInput {
    serve_held: bool,
}

impl InputSource for DemoInput {
    fn is_button_pressed(&self, button: &str) -> bool {
        button == SERVE_BUTTON && self.serve_held
    }
}

/// An axis-aligned destructible block
#[derive(Debug, Clone, Copy)]
struct DemoBlock {
    handle: ObjectHandle,
    center: Vec3,
    half_width: f32,
    half_height: f32,
}

impl DemoBlock {
    fn contains(&self, point: Vec3) -> bool {
        (point.x - self.center.x).abs() <= self.half_width + BALL_RADIUS
            && (point.y - self.center.y).abs() <= self.half_height + BALL_RADIUS
    }
}

/// The block field; implements the core's removal seam.
struct BlockField {
    blocks: Vec<DemoBlock>,
    next_handle: ObjectHandle,
}

impl BlockField {
    /// Three rows of blocks across the top of the court
    fn new() -> Self {
        let mut field = Self {
            blocks: Vec::new(),
            next_handle: 1,
        };
        for row in 0..3 {
            let y = 8.0 + row as f32 * 2.0;
            let mut x = -COURT_HALF_WIDTH + 1.5;
            while x <= COURT_HALF_WIDTH - 1.5 {
                field.spawn(Vec3::new(x, y, 0.0));
                x += 3.0;
            }
        }
        field
    }

    fn spawn(&mut self, center: Vec3) {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.blocks.push(DemoBlock {
            handle,
            center,
            half_width: 1.2,
            half_height: 0.6,
        });
    }

    fn block_at(&self, point: Vec3) -> Option<DemoBlock> {
        self.blocks.iter().copied().find(|b| b.contains(point))
    }
}

impl ObjectRemover for BlockField {
    fn destroy(&mut self, handle: ObjectHandle) {
        self.blocks.retain(|b| b.handle != handle);
    }
}

/// Host-side physics: integrate, then resolve court geometry and dispatch
/// the resulting collision events into the core.
fn step_physics(
    ball: &mut Ball,
    state: &GameState,
    paddle_x: f32,
    blocks: &mut BlockField,
    controller: &mut BallController,
    sounds: &mut SoundRouter<LogSoundBank>,
) {
    ball.pos += ball.vel * SIM_DT;

    if state.phase != GamePhase::Play {
        return;
    }

    // Side walls
    if ball.pos.x > COURT_HALF_WIDTH - BALL_RADIUS {
        ball.pos.x = COURT_HALF_WIDTH - BALL_RADIUS;
        ball.vel.x = -ball.vel.x.abs();
        controller.on_collision(ball, Contact::Wall, sounds, blocks);
    } else if ball.pos.x < -COURT_HALF_WIDTH + BALL_RADIUS {
        ball.pos.x = -COURT_HALF_WIDTH + BALL_RADIUS;
        ball.vel.x = ball.vel.x.abs();
        controller.on_collision(ball, Contact::Wall, sounds, blocks);
    }

    // Top wall
    if ball.pos.y > COURT_TOP - BALL_RADIUS {
        ball.pos.y = COURT_TOP - BALL_RADIUS;
        ball.vel.y = -ball.vel.y.abs();
        controller.on_collision(ball, Contact::Wall, sounds, blocks);
    }

    // Paddle: only stops balls heading down through its line
    if ball.vel.y < 0.0
        && ball.pos.y <= PADDLE_Y + BALL_RADIUS
        && ball.pos.y > PADDLE_Y - 1.0
        && (ball.pos.x - paddle_x).abs() <= PADDLE_HALF_WIDTH + BALL_RADIUS
    {
        ball.pos.y = PADDLE_Y + BALL_RADIUS;
        ball.vel.y = ball.vel.y.abs();
        controller.on_collision(ball, Contact::Paddle { x: paddle_x }, sounds, blocks);
    }

    // Blocks: destroy on contact and send the ball back down
    if let Some(block) = blocks.block_at(ball.pos) {
        ball.vel.y = -ball.vel.y.abs();
        controller.on_collision(ball, Contact::Block { handle: block.handle }, sounds, blocks);
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(&path),
        None => Tuning::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FF_EE00);

    log::info!("Courtball demo host starting (seed {seed})");

    let mut controller = BallController::new(&tuning, seed);
    let mut state = GameState::new(tuning.starting_balls);
    let mut ball = Ball::new();
    let mut guard = CollisionGuard::default();
    let mut blocks = BlockField::new();
    let mut sounds = SoundRouter::new(LogSoundBank);
    let mut scoreboard = ScoreboardDisplay::new();
    let mut input = DemoInput::default();

    let mut paddle_x = 0.0f32;
    let mut shown = String::new();
    let starting_blocks = blocks.blocks.len();

    let mut ticks = 0u64;
    while ticks < MAX_TICKS {
        ticks += 1;

        if state.phase == GamePhase::GameOver {
            log::info!("Game over after {ticks} ticks");
            break;
        }
        if blocks.blocks.is_empty() {
            log::info!("Court cleared after {ticks} ticks");
            break;
        }

        // Scripted player: serve whenever the ball is out of play, chase the
        // ball at limited speed while it isn't.
        input.serve_held = state.phase != GamePhase::Play;
        if state.phase == GamePhase::Play {
            let step = (ball.pos.x - paddle_x).clamp(-PADDLE_SPEED * SIM_DT, PADDLE_SPEED * SIM_DT);
            paddle_x = (paddle_x + step).clamp(-COURT_HALF_WIDTH, COURT_HALF_WIDTH);
        }

        let tick_input = TickInput::poll(&input);
        controller.on_tick(&mut ball, &mut state, &mut guard, tick_input);
        step_physics(
            &mut ball,
            &state,
            paddle_x,
            &mut blocks,
            &mut controller,
            &mut sounds,
        );

        scoreboard.on_redraw(&state);
        if scoreboard.text() != shown {
            shown = scoreboard.text().to_string();
            log::info!("Balls left: {shown}");
        }
    }

    log::info!(
        "Demo finished: {} of {} blocks destroyed, {} ball(s) left",
        starting_blocks - blocks.blocks.len(),
        starting_blocks,
        state.balls_left
    );
}
