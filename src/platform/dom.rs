//! Browser DOM surface
//!
//! Expects a page with `#gameArea` (positioned container), `#ball` inside it
//! and an optional `#score` text element. Pipes are absolutely positioned
//! `div.pipe` children of the game area.

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use super::headless::{game_over_text, score_text};
use super::presenter::Presenter;
use crate::sim::{Obstacle, PipeColor, Rect};

pub struct DomPresenter {
    document: Document,
    game_area: HtmlElement,
    ball: HtmlElement,
    score: Option<HtmlElement>,
    pipes: HashMap<u32, (HtmlElement, HtmlElement)>,
}

fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an HTML element")))
}

fn set_px(el: &HtmlElement, property: &str, value: f32) {
    let _ = el.style().set_property(property, &format!("{value}px"));
}

impl DomPresenter {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            game_area: html_element_by_id(document, "gameArea")?,
            ball: html_element_by_id(document, "ball")?,
            score: html_element_by_id(document, "score").ok(),
            pipes: HashMap::new(),
        })
    }

    pub fn game_area(&self) -> &HtmlElement {
        &self.game_area
    }

    /// Client size of the play area (width, height)
    pub fn play_area_size(&self) -> (f32, f32) {
        (
            self.game_area.client_width() as f32,
            self.game_area.client_height() as f32,
        )
    }

    /// Ball element size (width, height)
    pub fn ball_size(&self) -> (f32, f32) {
        (
            self.ball.client_width() as f32,
            self.ball.client_height() as f32,
        )
    }

    /// Ball element's left offset inside the play area
    pub fn ball_left(&self) -> f32 {
        self.ball.offset_left() as f32
    }

    fn make_pipe(&self, rect: Rect, color: PipeColor) -> Result<HtmlElement, JsValue> {
        let el: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        el.class_list().add_1("pipe")?;
        let style = el.style();
        style.set_property("position", "absolute")?;
        style.set_property("background-color", color.as_css())?;
        set_px(&el, "width", rect.size.x);
        set_px(&el, "height", rect.size.y);
        set_px(&el, "left", rect.left());
        set_px(&el, "top", rect.top());
        self.game_area.append_child(&el)?;
        Ok(el)
    }
}

impl Presenter for DomPresenter {
    fn create_obstacle(&mut self, obstacle: &Obstacle) {
        let upper = self.make_pipe(obstacle.upper_rect(), obstacle.color);
        let lower = self.make_pipe(obstacle.lower_rect(), obstacle.color);
        match (upper, lower) {
            (Ok(upper), Ok(lower)) => {
                self.pipes.insert(obstacle.id, (upper, lower));
            }
            (upper, lower) => {
                log::error!("Failed to create pipe {} elements", obstacle.id);
                for el in [upper, lower].into_iter().flatten() {
                    el.remove();
                }
            }
        }
    }

    fn remove_obstacle(&mut self, id: u32) {
        if let Some((upper, lower)) = self.pipes.remove(&id) {
            upper.remove();
            lower.remove();
        }
    }

    fn clear_obstacles(&mut self) {
        for (_, (upper, lower)) in self.pipes.drain() {
            upper.remove();
            lower.remove();
        }
    }

    fn place_obstacle(&mut self, id: u32, x: f32) {
        if let Some((upper, lower)) = self.pipes.get(&id) {
            set_px(upper, "left", x);
            set_px(lower, "left", x);
        }
    }

    fn place_player(&mut self, rect: Rect) {
        set_px(&self.ball, "top", rect.top());
    }

    fn show_score(&mut self, score: u32) {
        if let Some(el) = &self.score {
            el.set_inner_text(&score_text(score));
        }
    }

    fn show_game_over(&mut self, score: u32) {
        let message = game_over_text(score);
        log::info!("{}", message);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&message);
        }
    }

    fn show_paused(&mut self, paused: bool) {
        let _ = if paused {
            self.game_area.class_list().add_1("paused")
        } else {
            self.game_area.class_list().remove_1("paused")
        };
    }
}
