//! In-memory drawing surface
//!
//! Mirrors what the DOM would show. Used by the native runner and in tests.

use std::collections::BTreeMap;

use crate::sim::{Obstacle, PipeColor, Rect};

use super::presenter::Presenter;

#[derive(Debug, Clone, PartialEq)]
pub struct PipeElements {
    pub upper: Rect,
    pub lower: Rect,
    pub color: PipeColor,
}

#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    pub player: Option<Rect>,
    pub pipes: BTreeMap<u32, PipeElements>,
    pub score_text: String,
    pub paused: bool,
    /// Every terminal notification shown, oldest first
    pub notifications: Vec<String>,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self {
            score_text: score_text(0),
            ..Default::default()
        }
    }
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn game_over_text(score: u32) -> String {
    format!("Game Over! Your score was {}", score)
}

impl Presenter for HeadlessPresenter {
    fn create_obstacle(&mut self, obstacle: &Obstacle) {
        self.pipes.insert(
            obstacle.id,
            PipeElements {
                upper: obstacle.upper_rect(),
                lower: obstacle.lower_rect(),
                color: obstacle.color,
            },
        );
    }

    fn remove_obstacle(&mut self, id: u32) {
        self.pipes.remove(&id);
    }

    fn clear_obstacles(&mut self) {
        self.pipes.clear();
    }

    fn place_obstacle(&mut self, id: u32, x: f32) {
        if let Some(pipe) = self.pipes.get_mut(&id) {
            pipe.upper.pos.x = x;
            pipe.lower.pos.x = x;
        }
    }

    fn place_player(&mut self, rect: Rect) {
        self.player = Some(rect);
    }

    fn show_score(&mut self, score: u32) {
        self.score_text = score_text(score);
    }

    fn show_game_over(&mut self, score: u32) {
        let message = game_over_text(score);
        log::info!("{}", message);
        self.notifications.push(message);
    }

    fn show_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}
