//! Flap Ball entry point
//!
//! Web: wires the DOM, keyboard and touch to a `GameEngine` and runs it from
//! `requestAnimationFrame`. Native: runs a headless autopilot game and logs
//! the outcome.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, TouchEvent};

    use flap_ball::platform::dom::DomPresenter;
    use flap_ball::platform::{KeyAction, key_action};
    use flap_ball::sim::{GamePhase, InputEvent};
    use flap_ball::{GameEngine, Tuning};

    /// Game instance holding all state
    struct Game {
        engine: GameEngine,
        presenter: DomPresenter,
        last_time: f64,
    }

    /// Defaults, overridden by the page's `data-tuning` JSON and the measured layout
    fn load_tuning(presenter: &DomPresenter) -> Tuning {
        let mut tuning = match presenter.game_area().get_attribute("data-tuning") {
            Some(json) => match Tuning::from_json(&json) {
                Ok(tuning) => tuning,
                Err(e) => {
                    log::warn!("Ignoring data-tuning: {}", e);
                    Tuning::default()
                }
            },
            None => Tuning::default(),
        };

        let (width, height) = presenter.play_area_size();
        let (ball_w, ball_h) = presenter.ball_size();
        let mut measured = tuning.clone();
        if width > 0.0 && height > 0.0 {
            measured.play_area_width = width;
            measured.play_area_height = height;
        }
        if ball_w > 0.0 && ball_h > 0.0 {
            measured.player_width = ball_w;
            measured.player_height = ball_h;
            measured.player_x = presenter.ball_left();
        }
        match measured.validate() {
            Ok(()) => tuning = measured,
            Err(e) => log::warn!("Measured layout rejected ({}), using configured sizes", e),
        }
        tuning
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Flap Ball starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let presenter = DomPresenter::new(&document)?;
        let tuning = load_tuning(&presenter);
        let seed = js_sys::Date::now() as u64;
        let engine =
            GameEngine::new(seed, tuning).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Rc::new(RefCell::new(Game {
            engine,
            presenter,
            last_time: 0.0,
        }));

        setup_input_handlers(game.clone())?;
        setup_auto_pause(game.clone())?;

        request_animation_frame(game);

        log::info!("Flap Ball running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match key_action(&event.code(), g.engine.phase()) {
                    Some(KeyAction::Game(input)) => {
                        event.prevent_default();
                        g.engine.handle_input(input);
                    }
                    Some(KeyAction::ToggleAutopilot) => g.engine.toggle_autopilot(),
                    None => {}
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch (flap)
        {
            let game_area = game.borrow().presenter.game_area().clone();
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().engine.handle_input(InputEvent::Touch);
            });
            game_area
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;

        // Visibility change (tab switch, minimize)
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.engine.phase() == GamePhase::Running {
                    g.engine.handle_input(InputEvent::PauseToggle);
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                0.0
            };
            g.last_time = time;

            let Game {
                engine, presenter, ..
            } = &mut *g;
            engine.frame(dt, presenter);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flap_ball::platform::HeadlessPresenter;
    use flap_ball::sim::GamePhase;
    use flap_ball::{GameEngine, Tuning};

    env_logger::init();

    // Usage: flap-ball [seed] [tuning.json]
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let tuning = match args.next() {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Could not load tuning from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    log::info!("Flap Ball (native) starting headless autopilot run...");

    let frame_ms = f64::from(tuning.tick_ms);
    let mut engine = match GameEngine::new(seed, tuning) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Invalid tuning: {}", e);
            std::process::exit(1);
        }
    };
    let mut presenter = HeadlessPresenter::new();
    engine.toggle_autopilot();

    // Ten simulated minutes at most
    let max_ticks = 10 * 60 * 1000 / u64::from(engine.state.tuning.tick_ms);
    while engine.phase() == GamePhase::Running && engine.state.time_ticks < max_ticks {
        engine.frame(frame_ms, &mut presenter);
    }

    println!(
        "seed {}: {} after {} ticks",
        seed, presenter.score_text, engine.state.time_ticks
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
