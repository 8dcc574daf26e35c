//! Keyboard and touch bindings

use crate::sim::{GamePhase, InputEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(InputEvent),
    /// Debug: toggle the autopilot
    ToggleAutopilot,
}

/// Map a `KeyboardEvent.code` to an action.
///
/// Enter doubles as pause toggle and, once the run is over, reset.
pub fn key_action(code: &str, phase: GamePhase) -> Option<KeyAction> {
    match code {
        "Enter" | "NumpadEnter" => Some(KeyAction::Game(if phase == GamePhase::GameOver {
            InputEvent::Reset
        } else {
            InputEvent::PauseToggle
        })),
        "ArrowUp" => Some(KeyAction::Game(InputEvent::Flap)),
        "ArrowDown" => Some(KeyAction::Game(InputEvent::Down)),
        "KeyI" => Some(KeyAction::ToggleAutopilot),
        _ => None,
    }
}
