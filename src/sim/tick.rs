//! Fixed timestep simulation tick
//!
//! One step stands in for all three timers of the game: the ball tick, every
//! pipe's motion and the spawn timer. Order within a step:
//! 1. gravity, then floor and pipe collisions
//! 2. spawn timer advance
//! 3. pipe motion, exits and scoring (spawn order); a difficulty step restarts
//!    the spawn timer at zero
//! 4. spawn when the timer reaches the cadence

use super::collision::{first_obstacle_hit, hits_ground};
use super::difficulty::Difficulty;
use super::spawn::spawn_obstacle;
use super::state::{GameEvent, GameOverCause, GamePhase, GameState};

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState) {
    // Paused and game over freeze everything, pipes included
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    state.player.fall(state.tuning.gravity);
    if hits_ground(&state.player, &state.tuning) {
        state.end_game(GameOverCause::Ground);
        return;
    }
    if let Some(id) = first_obstacle_hit(&state.player, &state.obstacles) {
        state.end_game(GameOverCause::Obstacle { id });
        return;
    }

    // Advance before scoring so a difficulty restart leaves a full cadence
    state.spawn_elapsed_ms += state.tuning.tick_ms;
    move_obstacles(state);
    if state.phase != GamePhase::Running {
        return;
    }

    if state.spawn_elapsed_ms >= state.difficulty.spawn_cadence_ms {
        state.spawn_elapsed_ms = 0;
        spawn_obstacle(state);
    }
}

/// Move every pipe left; pipes already past the exit line are scored and swept
fn move_obstacles(state: &mut GameState) {
    let exit_x = state.tuning.pipe_exit_x;
    let mut exited: Vec<u32> = Vec::new();

    for idx in 0..state.obstacles.len() {
        // A score-cap game over mid-pass freezes the rest
        if state.phase != GamePhase::Running {
            break;
        }

        let (id, x) = {
            let obstacle = &state.obstacles[idx];
            (obstacle.id, obstacle.x)
        };

        if x <= exit_x {
            exited.push(id);
            state.events.push(GameEvent::ObstacleExited { id });
            log::debug!("Pipe {} exited", id);
            score_point(state);
        } else {
            // Speed follows the score of this very moment
            let speed = Difficulty::pipe_speed(state.score, &state.tuning) as f32;
            state.obstacles[idx].x = x - speed;
        }
    }

    if !exited.is_empty() {
        state.obstacles.retain(|o| !exited.contains(&o.id));
    }
}

fn score_point(state: &mut GameState) {
    state.score += 1;
    state.events.push(GameEvent::ScoreChanged { score: state.score });

    if state.difficulty.on_score(state.score, &state.tuning) {
        // Restart the spawn timer at the new cadence
        state.spawn_elapsed_ms = 0;
        log::info!(
            "Score {}: spawn cadence now {} ms",
            state.score,
            state.difficulty.spawn_cadence_ms
        );
        state.events.push(GameEvent::DifficultyIncreased {
            spawn_cadence_ms: state.difficulty.spawn_cadence_ms,
        });
    }

    if state.score >= state.tuning.score_cap {
        state.end_game(GameOverCause::ScoreCap);
    }
}
