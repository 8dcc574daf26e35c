//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod input;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{first_obstacle_hit, hits_ground, past_down_limit};
pub use difficulty::Difficulty;
pub use input::InputEvent;
pub use rect::Rect;
pub use spawn::{build_obstacle, spawn_obstacle, upper_height_range};
pub use state::{GameEvent, GameOverCause, GamePhase, GameState, Obstacle, PipeColor, PlayerBody};
pub use tick::tick;
