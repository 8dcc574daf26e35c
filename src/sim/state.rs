//! Game state and core simulation types
//!
//! One `GameState` owns everything that changes during a run: the ball, the
//! live pipes, score, difficulty, the spawn timer and the RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::rect::Rect;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Frozen until the pause toggle is pressed again
    Paused,
    /// Run ended, waiting for reset
    GameOver,
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// Gravity pulled the ball onto the floor
    Ground,
    /// The down control pushed the ball past the floor limit
    DownInput,
    /// The ball touched a pipe
    Obstacle { id: u32 },
    /// Score reached the cap
    ScoreCap,
}

/// Pipe palette. Both rectangles of a pair share one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeColor {
    Green,
    Red,
}

impl PipeColor {
    pub const ALL: [PipeColor; 2] = [PipeColor::Green, PipeColor::Red];

    /// CSS color name
    pub fn as_css(&self) -> &'static str {
        match self {
            PipeColor::Green => "green",
            PipeColor::Red => "red",
        }
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Left edge (fixed)
    pub x: f32,
    /// Top edge. No ceiling clamp: may go negative.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlayerBody {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.player_x,
            y: tuning.player_start_y,
            width: tuning.player_width,
            height: tuning.player_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Instant upward impulse, independent of accumulated gravity
    pub fn flap(&mut self, impulse: f32) {
        self.y -= impulse;
    }

    pub fn fall(&mut self, distance: f32) {
        self.y += distance;
    }
}

/// A pipe pair: upper rect anchored to the top, lower rect anchored to the
/// bottom, sharing one horizontal position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge of both rectangles
    pub x: f32,
    pub width: f32,
    pub upper_height: f32,
    /// Top edge of the lower rectangle
    pub lower_top: f32,
    pub lower_height: f32,
    pub color: PipeColor,
}

impl Obstacle {
    pub fn upper_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.upper_height)
    }

    pub fn lower_rect(&self) -> Rect {
        Rect::new(self.x, self.lower_top, self.width, self.lower_height)
    }

    /// Top and bottom of the opening between the two rectangles
    pub fn gap(&self) -> (f32, f32) {
        (self.upper_height, self.lower_top)
    }
}

/// Notifications for the presentation layer, drained once per frame
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ObstacleSpawned { id: u32 },
    ObstacleExited { id: u32 },
    ScoreChanged { score: u32 },
    DifficultyIncreased { spawn_cadence_ms: u32 },
    Paused,
    Resumed,
    GameOver { score: u32, cause: GameOverCause },
    Reset,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: PlayerBody,
    /// Live pipes in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub difficulty: Difficulty,
    /// Time since the spawn timer last fired or restarted (ms)
    pub spawn_elapsed_ms: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending presentation events
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new running game with the given seed. Rejects tunings the
    /// spawner or the difficulty math cannot run with.
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: PlayerBody::new(&tuning),
            difficulty: Difficulty::new(&tuning),
            tuning,
            phase: GamePhase::Running,
            obstacles: Vec::new(),
            score: 0,
            spawn_elapsed_ms: 0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Enter GAME_OVER. Returns false (and does nothing) if the run already ended.
    pub fn end_game(&mut self, cause: GameOverCause) -> bool {
        if self.phase == GamePhase::GameOver {
            return false;
        }
        self.phase = GamePhase::GameOver;
        log::info!("Game over ({:?}), final score {}", cause, self.score);
        self.events.push(GameEvent::GameOver {
            score: self.score,
            cause,
        });
        true
    }

    /// Back to a fresh run. The RNG keeps advancing so the next run differs.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.player = PlayerBody::new(&self.tuning);
        self.obstacles.clear();
        self.score = 0;
        self.difficulty = Difficulty::new(&self.tuning);
        self.spawn_elapsed_ms = 0;
        self.events.push(GameEvent::Reset);
        self.events.push(GameEvent::ScoreChanged { score: 0 });
        log::info!("Game reset");
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn obstacle(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(7, Tuning::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.y, 250.0);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.difficulty.spawn_cadence_ms, 2000);
    }

    #[test]
    fn test_new_rejects_short_play_area() {
        // No room left for an upper pipe height draw
        let tuning = Tuning {
            play_area_height: 150.0,
            player_start_y: 50.0,
            gravity: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(7, tuning),
            Err(TuningError::PlayAreaTooShort { .. })
        ));

        let tuning = Tuning {
            pipe_speed_divisor: 0,
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(7, tuning),
            Err(TuningError::NonPositive("pipe_speed_divisor"))
        ));
    }

    #[test]
    fn test_end_game_once() {
        let mut state = GameState::new(7, Tuning::default()).unwrap();
        assert!(state.end_game(GameOverCause::Ground));
        assert!(!state.end_game(GameOverCause::Obstacle { id: 3 }));
        let events = state.drain_events();
        assert_eq!(
            events,
            vec![GameEvent::GameOver {
                score: 0,
                cause: GameOverCause::Ground
            }]
        );
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_flap_is_exact() {
        let mut player = PlayerBody::new(&Tuning::default());
        player.fall(123.4);
        let before = player.y;
        player.flap(40.0);
        assert_eq!(player.y, before - 40.0);
    }

    #[test]
    fn test_obstacle_rects() {
        let obstacle = Obstacle {
            id: 1,
            x: 400.0,
            width: 50.0,
            upper_height: 100.0,
            lower_top: 300.0,
            lower_height: 200.0,
            color: PipeColor::Red,
        };
        assert_eq!(obstacle.upper_rect(), Rect::new(400.0, 0.0, 50.0, 100.0));
        assert_eq!(obstacle.lower_rect(), Rect::new(400.0, 300.0, 50.0, 200.0));
        assert_eq!(obstacle.gap(), (100.0, 300.0));
    }

    #[test]
    fn test_snapshot_roundtrip_keeps_rng() {
        use rand::Rng;

        let mut state = GameState::new(42, Tuning::default()).unwrap();
        let mut restored: GameState =
            serde_json::from_str(&serde_json::to_string(&state).unwrap()).unwrap();
        let a: u32 = state.rng.random();
        let b: u32 = restored.rng.random();
        assert_eq!(a, b);
    }
}
