//! Idle/demo mode - the game plays itself
//!
//! Aims the ball just above the lower edge of the next gap and flaps whenever
//! it sinks below that line.

use crate::sim::{GamePhase, GameState, Obstacle};

/// Distance kept between the ball's bottom and the lower pipe
const AIM_MARGIN: f32 = 15.0;
/// Height to hold (fraction of the play area) while no pipe is ahead
const IDLE_HOLD: f32 = 0.6;

/// Closest pipe the ball has not cleared yet
pub fn next_obstacle(state: &GameState) -> Option<&Obstacle> {
    let player_left = state.player.x;
    state
        .obstacles
        .iter()
        .filter(|o| o.x + o.width > player_left)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
}

/// Whether to flap before the next tick
pub fn should_flap(state: &GameState) -> bool {
    if state.phase != GamePhase::Running {
        return false;
    }

    let aim = match next_obstacle(state) {
        Some(obstacle) => {
            let (_, gap_bottom) = obstacle.gap();
            gap_bottom - AIM_MARGIN
        }
        None => state.tuning.play_area_height * IDLE_HOLD,
    };

    state.player.rect().bottom() + state.tuning.gravity >= aim
}
