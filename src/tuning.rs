//! Data-driven game balance
//!
//! Every constant the simulation reads comes from a `Tuning`. The defaults are
//! the design values in `crate::consts`; a page can override any subset of them
//! with a JSON object.

use std::{error::Error, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fixed simulation step (ms)
    pub tick_ms: u32,

    // === Play area ===
    /// Also the x new pipes spawn at
    pub play_area_width: f32,
    pub play_area_height: f32,

    // === Ball ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_start_y: f32,
    pub gravity: f32,
    pub flap_impulse: f32,
    pub down_nudge: f32,

    // === Pipes ===
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_exit_x: f32,
    pub upper_height_min: f32,
    pub upper_height_margin: f32,
    pub pipe_base_speed: u32,
    pub pipe_speed_divisor: u32,

    // === Difficulty ===
    pub spawn_cadence_ms: u32,
    pub spawn_cadence_min_ms: u32,
    pub spawn_cadence_step_ms: u32,
    pub difficulty_interval: u32,
    pub score_cap: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,

            play_area_width: PLAY_AREA_WIDTH,
            play_area_height: PLAY_AREA_HEIGHT,

            player_x: PLAYER_X,
            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,
            player_start_y: PLAYER_START_Y,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            down_nudge: DOWN_NUDGE,

            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_exit_x: PIPE_EXIT_X,
            upper_height_min: UPPER_HEIGHT_MIN,
            upper_height_margin: UPPER_HEIGHT_MARGIN,
            pipe_base_speed: PIPE_BASE_SPEED,
            pipe_speed_divisor: PIPE_SPEED_DIVISOR,

            spawn_cadence_ms: SPAWN_CADENCE_MS,
            spawn_cadence_min_ms: SPAWN_CADENCE_MIN_MS,
            spawn_cadence_step_ms: SPAWN_CADENCE_STEP_MS,
            difficulty_interval: DIFFICULTY_INTERVAL,
            score_cap: SCORE_CAP,
        }
    }
}

#[derive(Debug)]
pub enum TuningError {
    Json(serde_json::Error),
    /// A duration, size or divisor that must be positive is zero or negative
    NonPositive(&'static str),
    /// The minimum spawn cadence is above the starting cadence
    CadenceFloorAboveBase,
    /// The play area is too short for the upper pipe height range
    PlayAreaTooShort { height: f32, required: f32 },
}

impl Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::Json(err) => Display::fmt(err, f),
            TuningError::NonPositive(field) => write!(f, "{field} must be positive"),
            TuningError::CadenceFloorAboveBase => {
                Display::fmt("minimum spawn cadence is above the starting cadence", f)
            }
            TuningError::PlayAreaTooShort { height, required } => write!(
                f,
                "play area height {height} is too short, needs more than {required}"
            ),
        }
    }
}

impl Error for TuningError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TuningError::Json(source) => Some(source),
            TuningError::NonPositive(_)
            | TuningError::CadenceFloorAboveBase
            | TuningError::PlayAreaTooShort { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        TuningError::Json(err)
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the values the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive_f32 = [
            ("play_area_width", self.play_area_width),
            ("play_area_height", self.play_area_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("pipe_width", self.pipe_width),
        ];
        for (name, value) in positive_f32 {
            if value <= 0.0 || !value.is_finite() {
                return Err(TuningError::NonPositive(name));
            }
        }

        let positive_u32 = [
            ("tick_ms", self.tick_ms),
            ("pipe_speed_divisor", self.pipe_speed_divisor),
            ("spawn_cadence_ms", self.spawn_cadence_ms),
            ("difficulty_interval", self.difficulty_interval),
            ("score_cap", self.score_cap),
        ];
        for (name, value) in positive_u32 {
            if value == 0 {
                return Err(TuningError::NonPositive(name));
            }
        }

        if self.spawn_cadence_min_ms > self.spawn_cadence_ms {
            return Err(TuningError::CadenceFloorAboveBase);
        }

        let required = self.upper_height_min + self.upper_height_margin;
        if self.play_area_height <= required {
            return Err(TuningError::PlayAreaTooShort {
                height: self.play_area_height,
                required,
            });
        }

        Ok(())
    }
}
