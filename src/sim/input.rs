//! Discrete input events
//!
//! Inputs take effect the moment they arrive, between simulation steps.

use super::collision::past_down_limit;
use super::state::{GameEvent, GameOverCause, GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Upward impulse
    Flap,
    /// Screen touch, same as flap
    Touch,
    /// Small downward nudge
    Down,
    /// Running <-> Paused
    PauseToggle,
    /// Start over after game over
    Reset,
}

impl GameState {
    /// Apply one input event. Returns true if it changed anything.
    pub fn apply_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Flap | InputEvent::Touch => {
                if self.phase != GamePhase::Running {
                    return false;
                }
                self.player.flap(self.tuning.flap_impulse);
                true
            }
            InputEvent::Down => {
                if self.phase != GamePhase::Running {
                    return false;
                }
                self.player.fall(self.tuning.down_nudge);
                if past_down_limit(&self.player, &self.tuning) {
                    self.end_game(GameOverCause::DownInput);
                }
                true
            }
            InputEvent::PauseToggle => match self.phase {
                GamePhase::Running => {
                    self.phase = GamePhase::Paused;
                    self.events.push(GameEvent::Paused);
                    true
                }
                GamePhase::Paused => {
                    self.phase = GamePhase::Running;
                    self.events.push(GameEvent::Resumed);
                    true
                }
                GamePhase::GameOver => false,
            },
            InputEvent::Reset => {
                if self.phase != GamePhase::GameOver {
                    return false;
                }
                self.reset();
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(12345, Tuning::default()).unwrap()
    }

    #[test]
    fn test_flap_and_touch() {
        let mut state = state();
        assert!(state.apply_input(InputEvent::Flap));
        assert_eq!(state.player.y, 210.0);
        assert!(state.apply_input(InputEvent::Touch));
        assert_eq!(state.player.y, 170.0);
    }

    #[test]
    fn test_flap_has_no_ceiling() {
        let mut state = state();
        for _ in 0..10 {
            state.apply_input(InputEvent::Flap);
        }
        assert_eq!(state.player.y, -150.0);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_inputs_ignored_while_paused() {
        let mut state = state();
        assert!(state.apply_input(InputEvent::PauseToggle));
        assert_eq!(state.phase, GamePhase::Paused);

        assert!(!state.apply_input(InputEvent::Flap));
        assert!(!state.apply_input(InputEvent::Down));
        assert!(!state.apply_input(InputEvent::Reset));
        assert_eq!(state.player.y, 250.0);

        assert!(state.apply_input(InputEvent::PauseToggle));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.drain_events(), vec![GameEvent::Paused, GameEvent::Resumed]);
    }

    #[test]
    fn test_down_nudge_and_limit() {
        let mut state = state();
        assert!(state.apply_input(InputEvent::Down));
        assert_eq!(state.player.y, 260.0);

        // 480 is exactly at the limit: not over it
        state.player.y = 470.0;
        state.apply_input(InputEvent::Down);
        assert_eq!(state.phase, GamePhase::Running);

        state.apply_input(InputEvent::Down);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver {
                score: 0,
                cause: GameOverCause::DownInput
            }]
        );
    }

    #[test]
    fn test_game_over_ignores_pause_and_controls() {
        let mut state = state();
        state.end_game(GameOverCause::Ground);
        assert!(!state.apply_input(InputEvent::PauseToggle));
        assert!(!state.apply_input(InputEvent::Flap));
        assert!(!state.apply_input(InputEvent::Down));
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_reset_only_after_game_over() {
        let mut state = state();
        state.player.y = 100.0;
        assert!(!state.apply_input(InputEvent::Reset));
        assert_eq!(state.player.y, 100.0);

        state.score = 42;
        state.difficulty.spawn_cadence_ms = 1200;
        state.spawn_elapsed_ms = 600;
        crate::sim::spawn_obstacle(&mut state);
        state.end_game(GameOverCause::Obstacle { id: 1 });

        assert!(state.apply_input(InputEvent::Reset));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.y, 250.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.difficulty.spawn_cadence_ms, 2000);
        assert_eq!(state.spawn_elapsed_ms, 0);
        assert!(state.obstacles.is_empty());
    }
}
