//! Score-driven difficulty ramp
//!
//! Two independent knobs:
//! - spawn cadence shrinks in fixed steps every `difficulty_interval` points, down to a floor
//! - pipe speed is `base + score / divisor`, recomputed every step for every pipe

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Current interval between pipe spawns (ms)
    pub spawn_cadence_ms: u32,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            spawn_cadence_ms: tuning.spawn_cadence_ms,
        }
    }

    /// Horizontal pipe displacement per tick at the given score
    #[inline]
    pub fn pipe_speed(score: u32, tuning: &Tuning) -> u32 {
        tuning.pipe_base_speed + score / tuning.pipe_speed_divisor
    }

    /// React to the score changing to `score`.
    ///
    /// Returns true when the cadence was shortened, in which case the spawn
    /// timer must restart.
    pub fn on_score(&mut self, score: u32, tuning: &Tuning) -> bool {
        if score == 0 || score % tuning.difficulty_interval != 0 || score >= tuning.score_cap {
            return false;
        }
        if self.spawn_cadence_ms <= tuning.spawn_cadence_min_ms {
            return false;
        }
        self.spawn_cadence_ms = self
            .spawn_cadence_ms
            .saturating_sub(tuning.spawn_cadence_step_ms)
            .max(tuning.spawn_cadence_min_ms);
        true
    }
}
