//! Collision checks between the ball, the floor and the pipes
//!
//! All checks are exact: no grace margin, no partial-overlap tolerance.

use super::state::{Obstacle, PlayerBody};
use crate::tuning::Tuning;

/// Floor check run every tick after gravity
#[inline]
pub fn hits_ground(player: &PlayerBody, tuning: &Tuning) -> bool {
    player.y + player.height >= tuning.play_area_height
}

/// Limit check for the down control. Strict, unlike the tick check.
#[inline]
pub fn past_down_limit(player: &PlayerBody, tuning: &Tuning) -> bool {
    player.y > tuning.play_area_height - player.height
}

/// ID of the first pipe (in spawn order) whose upper or lower rectangle
/// overlaps the ball
pub fn first_obstacle_hit(player: &PlayerBody, obstacles: &[Obstacle]) -> Option<u32> {
    let ball = player.rect();
    obstacles
        .iter()
        .find(|o| ball.overlaps(&o.upper_rect()) || ball.overlaps(&o.lower_rect()))
        .map(|o| o.id)
}
