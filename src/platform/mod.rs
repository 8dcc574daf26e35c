//! Platform abstraction layer
//!
//! The simulation never touches the screen or the keyboard. This layer holds:
//! - `presenter`: the drawing surface contract and the per-frame sync
//! - `keymap`: key/touch names to input events
//! - `headless`: an in-memory surface for native runs and tests
//! - `dom` (wasm32): browser DOM surface and event wiring

pub mod headless;
pub mod keymap;
pub mod presenter;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use headless::HeadlessPresenter;
pub use keymap::{KeyAction, key_action};
pub use presenter::{Presenter, present};
