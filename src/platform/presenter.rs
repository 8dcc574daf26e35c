//! Presentation contract
//!
//! A `Presenter` owns the visual elements: one for the ball, two per pipe pair
//! and a score text. `present` replays the frame's events onto it and then
//! writes the current positions.

use crate::sim::{GameEvent, GameState, Obstacle, Rect};

pub trait Presenter {
    /// Create the two rectangles of a new pipe pair
    fn create_obstacle(&mut self, obstacle: &Obstacle);
    /// Remove both rectangles of a pipe pair
    fn remove_obstacle(&mut self, id: u32);
    /// Remove every pipe element
    fn clear_obstacles(&mut self);
    /// Move a pipe pair to a new left edge
    fn place_obstacle(&mut self, id: u32, x: f32);
    fn place_player(&mut self, rect: Rect);
    fn show_score(&mut self, score: u32);
    /// Terminal notification with the final score
    fn show_game_over(&mut self, score: u32);

    fn show_paused(&mut self, _paused: bool) {}
}

/// Apply drained events, then sync positions
pub fn present<P: Presenter + ?Sized>(state: &GameState, events: &[GameEvent], presenter: &mut P) {
    for event in events {
        match event {
            GameEvent::ObstacleSpawned { id } => {
                // Already gone if a reset happened in the same frame
                if let Some(obstacle) = state.obstacle(*id) {
                    presenter.create_obstacle(obstacle);
                }
            }
            GameEvent::ObstacleExited { id } => presenter.remove_obstacle(*id),
            GameEvent::ScoreChanged { score } => presenter.show_score(*score),
            GameEvent::DifficultyIncreased { .. } => {}
            GameEvent::Paused => presenter.show_paused(true),
            GameEvent::Resumed => presenter.show_paused(false),
            GameEvent::GameOver { score, .. } => presenter.show_game_over(*score),
            GameEvent::Reset => {
                presenter.clear_obstacles();
                presenter.show_paused(false);
            }
        }
    }

    presenter.place_player(state.player.rect());
    for obstacle in &state.obstacles {
        presenter.place_obstacle(obstacle.id, obstacle.x);
    }
}
