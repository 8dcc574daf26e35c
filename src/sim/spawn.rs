//! Pipe generation
//!
//! Each pipe pair gets a random upper height and a random color; the lower
//! rectangle fills the rest of the play area below a fixed gap.

use std::ops::Range;

use rand::Rng;

use super::state::{GameEvent, GameState, Obstacle, PipeColor};
use crate::tuning::Tuning;

/// Range the upper pipe height is drawn from: `[min, height - margin)`
pub fn upper_height_range(tuning: &Tuning) -> Range<f32> {
    tuning.upper_height_min..(tuning.play_area_height - tuning.upper_height_margin)
}

/// Build a pipe pair at the right edge of the play area from explicit geometry.
///
/// The lower height is clamped at zero when the play area is too short for
/// the gap below this upper height.
pub fn build_obstacle(id: u32, upper_height: f32, color: PipeColor, tuning: &Tuning) -> Obstacle {
    let raw_lower = tuning.play_area_height - upper_height - tuning.pipe_gap;
    if raw_lower < 0.0 {
        log::warn!(
            "Pipe {} lower height {:.1} clamped to 0 (play area {} too short for gap {})",
            id,
            raw_lower,
            tuning.play_area_height,
            tuning.pipe_gap
        );
    }
    let lower_height = raw_lower.max(0.0);

    Obstacle {
        id,
        x: tuning.play_area_width,
        width: tuning.pipe_width,
        upper_height,
        lower_top: tuning.play_area_height - lower_height,
        lower_height,
        color,
    }
}

/// Spawn a random pipe pair and append it to the live set
pub fn spawn_obstacle(state: &mut GameState) -> u32 {
    let upper_height = state.rng.random_range(upper_height_range(&state.tuning));
    let color = PipeColor::ALL[state.rng.random_range(0..PipeColor::ALL.len())];

    let id = state.next_entity_id();
    let obstacle = build_obstacle(id, upper_height, color, &state.tuning);
    log::debug!(
        "Spawned pipe {} (upper {:.1}, lower {:.1}, {})",
        id,
        obstacle.upper_height,
        obstacle.lower_height,
        color.as_css()
    );
    state.obstacles.push(obstacle);
    state.events.push(GameEvent::ObstacleSpawned { id });
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_height_fills_below_gap() {
        let tuning = Tuning::default();
        let obstacle = build_obstacle(1, 100.0, PipeColor::Green, &tuning);
        assert_eq!(obstacle.lower_height, 200.0);
        assert_eq!(obstacle.lower_top, 300.0);
        assert_eq!(obstacle.x, 400.0);
        assert_eq!(obstacle.width, 50.0);
    }

    #[test]
    fn test_spawns_at_right_edge() {
        let tuning = Tuning {
            play_area_width: 640.0,
            ..Default::default()
        };
        let obstacle = build_obstacle(1, 100.0, PipeColor::Green, &tuning);
        assert_eq!(obstacle.x, 640.0);
    }

    #[test]
    fn test_negative_lower_height_clamped() {
        let tuning = Tuning::default();
        // 500 - 340 - 200 = -40
        let obstacle = build_obstacle(1, 340.0, PipeColor::Red, &tuning);
        assert_eq!(obstacle.lower_height, 0.0);
        assert_eq!(obstacle.lower_top, 500.0);
    }

    #[test]
    fn test_spawned_geometry_in_range() {
        let mut state = GameState::new(2024, Tuning::default()).unwrap();
        for _ in 0..200 {
            spawn_obstacle(&mut state);
        }
        assert_eq!(state.obstacles.len(), 200);
        for obstacle in &state.obstacles {
            assert!(obstacle.upper_height >= 30.0);
            assert!(obstacle.upper_height < 350.0);
            assert!(obstacle.lower_height >= 0.0);
            assert!(obstacle.lower_height <= 270.0);
        }
        // Both colors show up
        assert!(state.obstacles.iter().any(|o| o.color == PipeColor::Green));
        assert!(state.obstacles.iter().any(|o| o.color == PipeColor::Red));
    }

    #[test]
    fn test_spawn_emits_event_and_unique_ids() {
        let mut state = GameState::new(1, Tuning::default()).unwrap();
        let a = spawn_obstacle(&mut state);
        let b = spawn_obstacle(&mut state);
        assert_ne!(a, b);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::ObstacleSpawned { id: a },
                GameEvent::ObstacleSpawned { id: b }
            ]
        );
    }
}
