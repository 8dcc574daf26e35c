//! Fixed-timestep driver
//!
//! Turns variable frame deltas into whole simulation ticks, forwards input and
//! hands each frame's events to a presenter.

use crate::autopilot;
use crate::consts::MAX_SUBSTEPS;
use crate::platform::{Presenter, present};
use crate::sim::{GameEvent, GamePhase, GameState, InputEvent, tick};
use crate::tuning::{Tuning, TuningError};

/// Longest frame delta honored (ms); anything longer is a stall, not play time
const MAX_FRAME_MS: f64 = 100.0;

pub struct GameEngine {
    pub state: GameState,
    /// Unsimulated time carried between frames (ms)
    accumulator_ms: f64,
    /// Idle/demo mode - the autopilot flaps
    pub autopilot: bool,
}

impl GameEngine {
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        log::info!("New game with seed {}", seed);
        let mut state = GameState::new(seed, tuning)?;
        state.events.push(GameEvent::ScoreChanged { score: 0 });
        Ok(Self {
            state,
            accumulator_ms: 0.0,
            autopilot: false,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Apply an input immediately
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let applied = self.state.apply_input(event);
        if !applied {
            log::trace!("Ignored {:?} in {:?}", event, self.state.phase);
        }
        applied
    }

    pub fn toggle_autopilot(&mut self) {
        self.autopilot = !self.autopilot;
        log::info!("Autopilot: {}", self.autopilot);
    }

    /// Run as many ticks as `frame_ms` covers. Returns the number of ticks run.
    pub fn update(&mut self, frame_ms: f64) -> u32 {
        if self.state.phase != GamePhase::Running {
            // No catch-up burst after resume
            self.accumulator_ms = 0.0;
            return 0;
        }

        let tick_ms = f64::from(self.state.tuning.tick_ms);
        self.accumulator_ms += frame_ms.clamp(0.0, MAX_FRAME_MS);

        let mut substeps = 0;
        while self.accumulator_ms >= tick_ms && substeps < MAX_SUBSTEPS {
            if self.autopilot && autopilot::should_flap(&self.state) {
                self.state.apply_input(InputEvent::Flap);
            }
            tick(&mut self.state);
            self.accumulator_ms -= tick_ms;
            substeps += 1;

            if self.state.phase != GamePhase::Running {
                self.accumulator_ms = 0.0;
                break;
            }
        }
        substeps
    }

    /// Take pending events without presenting them
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    /// Advance by one frame and sync the presenter
    pub fn frame<P: Presenter + ?Sized>(&mut self, frame_ms: f64, presenter: &mut P) -> u32 {
        let ticks = self.update(frame_ms);
        let events = self.state.drain_events();
        present(&self.state, &events, presenter);
        ticks
    }
}
