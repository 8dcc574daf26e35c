//! Flap Ball - a browser reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, pipes, collisions, game state)
//! - `engine`: Fixed-timestep driver around the simulation
//! - `platform`: Presentation and input collaborators (DOM on the web)
//! - `tuning`: Data-driven game balance
//! - `autopilot`: Demo controller that plays on its own

pub mod autopilot;
pub mod engine;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use engine::GameEngine;
pub use tuning::{Tuning, TuningError};

/// Design values. `Tuning::default()` is built from these.
pub mod consts {
    /// Fixed simulation step in milliseconds (50 Hz)
    pub const TICK_MS: u32 = 20;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play area dimensions (pixels). Pipes enter at the right edge.
    pub const PLAY_AREA_WIDTH: f32 = 400.0;
    pub const PLAY_AREA_HEIGHT: f32 = 500.0;

    /// Ball defaults
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_START_Y: f32 = 250.0;

    /// Downward displacement per tick
    pub const GRAVITY: f32 = 2.8;
    /// Upward displacement per flap
    pub const FLAP_IMPULSE: f32 = 40.0;
    /// Downward displacement per down-arrow press
    pub const DOWN_NUDGE: f32 = 10.0;

    /// Pipe geometry
    pub const PIPE_WIDTH: f32 = 50.0;
    pub const PIPE_GAP: f32 = 200.0;
    pub const PIPE_EXIT_X: f32 = -50.0;
    /// Upper pipe height is drawn from [MIN, height - MARGIN)
    pub const UPPER_HEIGHT_MIN: f32 = 30.0;
    pub const UPPER_HEIGHT_MARGIN: f32 = 150.0;

    /// Pipe speed is BASE + score / DIVISOR pixels per tick
    pub const PIPE_BASE_SPEED: u32 = 5;
    pub const PIPE_SPEED_DIVISOR: u32 = 10;

    /// Spawn cadence (ms)
    pub const SPAWN_CADENCE_MS: u32 = 2000;
    pub const SPAWN_CADENCE_MIN_MS: u32 = 1000;
    pub const SPAWN_CADENCE_STEP_MS: u32 = 200;
    /// Cadence shrinks every this many points
    pub const DIFFICULTY_INTERVAL: u32 = 5;

    /// Reaching this score ends the run
    pub const SCORE_CAP: u32 = 100;
}
