//! Obstacle runner game logic.
//!
//! Everything time-driven is a named task on the session scheduler; `tick`
//! feeds it real elapsed time and handles tasks in due order until the run
//! ends.

use super::types::*;
use crate::core::constants::{
    CHARACTER_DUCKING_HEIGHT, CHARACTER_STANDING_HEIGHT, CHARACTER_WIDTH, CHARACTER_X,
    DISTANCE_PER_SAMPLE,
};
use crate::core::scheduler::Scheduler;
use rand::Rng;

/// Live statistics for the current run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunnerStats {
    pub distance: u32,
    pub jumps: u32,
    pub max_height: f64,
    /// `None` until the first sample.
    pub min_height: Option<f64>,
}

impl RunnerStats {
    fn sample_height(&mut self, height: f64) {
        self.max_height = self.max_height.max(height);
        self.min_height = Some(self.min_height.map_or(height, |m| m.min(height)));
    }

    fn to_record(self, timestamp: i64) -> ScoreRecord {
        ScoreRecord {
            distance: self.distance,
            jumps: self.jumps,
            max_height: round2(self.max_height),
            min_height: round2(self.min_height.unwrap_or(0.0)),
            timestamp,
        }
    }
}

/// A runner session.
#[derive(Debug, Clone)]
pub struct RunnerGame {
    pub skin: RunnerSkin,
    pub config: RunnerConfig,
    pub state: CharacterState,
    /// Running animation frame (0 or 1).
    pub animation_frame: u8,
    pub obstacle: Obstacle,
    pub stats: RunnerStats,
    pub scores: ScoreBook,
    pub game_over: bool,
    /// Record of the most recent finished run.
    pub last_record: Option<ScoreRecord>,
    duck_held: bool,
    jump_started_ms: Option<u64>,
    scheduler: Scheduler<RunnerTask>,
}

impl RunnerGame {
    pub fn new(skin: RunnerSkin, scores: ScoreBook) -> Self {
        Self::with_config(skin, RunnerConfig::default(), scores)
    }

    pub fn with_config(skin: RunnerSkin, config: RunnerConfig, scores: ScoreBook) -> Self {
        let mut game = Self {
            skin,
            config,
            state: CharacterState::Running,
            animation_frame: 0,
            obstacle: Obstacle::new(config.obstacle_start_x, ObstacleVariant::LargeCactus1),
            stats: RunnerStats::default(),
            scores,
            game_over: false,
            last_record: None,
            duck_held: false,
            jump_started_ms: None,
            scheduler: Scheduler::new(),
        };
        game.reset();
        game
    }

    /// Start a fresh run. History and high score are kept.
    pub fn reset(&mut self) {
        self.scheduler.cancel_all();
        self.stats = RunnerStats::default();
        self.obstacle = Obstacle::new(self.config.obstacle_start_x, ObstacleVariant::LargeCactus1);
        self.state = CharacterState::Running;
        self.animation_frame = 0;
        self.game_over = false;
        self.last_record = None;
        self.duck_held = false;
        self.jump_started_ms = None;

        let c = self.config;
        self.scheduler.every(RunnerTask::AdvanceObstacle, c.obstacle_advance_ms);
        self.scheduler.every(RunnerTask::CycleFrame, c.run_frame_ms);
        self.scheduler.every(RunnerTask::FlapFrame, c.flap_frame_ms);
        self.scheduler.every(RunnerTask::SampleDistance, c.distance_sample_ms);
        self.scheduler.every(RunnerTask::CheckCollision, c.collision_check_ms);

        tracing::info!(game = self.skin.title(), "run started");
    }

    pub fn is_duck_held(&self) -> bool {
        self.duck_held
    }

    /// Number of tasks currently scheduled.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Height of the character's feet above the ground. Follows a fixed
    /// parabola over the jump duration.
    pub fn jump_offset(&self) -> f64 {
        let (CharacterState::Jumping, Some(start)) = (self.state, self.jump_started_ms) else {
            return 0.0;
        };
        let duration = self.config.jump_duration_ms.max(1) as f64;
        let elapsed = self.scheduler.now_ms().saturating_sub(start) as f64;
        let p = (elapsed / duration).clamp(0.0, 1.0);
        self.config.jump_peak_height * 4.0 * p * (1.0 - p)
    }

    pub fn character_bounds(&self) -> Rect {
        let height = if self.state == CharacterState::Ducking {
            CHARACTER_DUCKING_HEIGHT
        } else {
            CHARACTER_STANDING_HEIGHT
        };
        let bottom = self.jump_offset();
        Rect {
            left: CHARACTER_X,
            right: CHARACTER_X + CHARACTER_WIDTH,
            bottom,
            top: bottom + height,
        }
    }

    /// Start a jump. Returns false if one is already in progress or the run
    /// is over.
    pub fn handle_jump_input(&mut self) -> bool {
        if self.game_over || self.state == CharacterState::Jumping {
            return false;
        }
        self.stats.jumps += 1;
        self.state = CharacterState::Jumping;
        self.jump_started_ms = Some(self.scheduler.now_ms());
        self.scheduler.cancel_task(RunnerTask::EndJump);
        self.scheduler
            .after(RunnerTask::EndJump, self.config.jump_duration_ms);
        tracing::trace!(jumps = self.stats.jumps, "jump");
        true
    }

    /// Record the duck key state. Takes effect immediately unless jumping,
    /// otherwise when the jump lands.
    pub fn handle_duck_input(&mut self, pressed: bool) {
        if self.game_over {
            return;
        }
        self.duck_held = pressed;
        if self.state != CharacterState::Jumping {
            self.state = if pressed {
                CharacterState::Ducking
            } else {
                CharacterState::Running
            };
        }
    }

    /// Test the character against the obstacle. On a hit the run ends and the
    /// record is stored; later calls return `None`.
    pub fn check_collision(&mut self) -> Option<ScoreRecord> {
        if self.game_over {
            return None;
        }
        if !self.character_bounds().overlaps(&self.obstacle.bounds()) {
            return None;
        }
        Some(self.finish_run())
    }

    fn finish_run(&mut self) -> ScoreRecord {
        self.game_over = true;
        self.state = CharacterState::Dead;
        self.jump_started_ms = None;
        self.scheduler.cancel_all();

        let record = self.stats.to_record(chrono::Utc::now().timestamp());
        self.scores.record(record, self.config.history_cap);
        self.last_record = Some(record);
        tracing::info!(
            game = self.skin.title(),
            distance = record.distance,
            jumps = record.jumps,
            max_height = record.max_height,
            "run over"
        );
        record
    }

    /// Advance the session by `dt_ms` of real time (clamped).
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> Vec<RunnerEvent> {
        let mut events = Vec::new();
        if self.game_over {
            return events;
        }
        let dt_ms = dt_ms.min(self.config.max_frame_ms);
        let deadline = self.scheduler.deadline(dt_ms);
        while let Some(task) = self.scheduler.pop_due(deadline) {
            if let Some(event) = self.run_task(task, rng) {
                events.push(event);
            }
            if self.game_over {
                break;
            }
        }
        events
    }

    fn run_task<R: Rng>(&mut self, task: RunnerTask, rng: &mut R) -> Option<RunnerEvent> {
        match task {
            RunnerTask::AdvanceObstacle => {
                self.obstacle.x -= self.config.obstacle_step;
                if self.obstacle.x < self.config.obstacle_respawn_x {
                    let variant = ObstacleVariant::random(rng, self.config.flying_spawn_chance);
                    self.obstacle = Obstacle::new(self.config.obstacle_start_x, variant);
                    tracing::debug!(?variant, "obstacle respawned");
                    return Some(RunnerEvent::ObstacleRespawned(variant));
                }
                None
            }
            RunnerTask::CycleFrame => {
                if matches!(self.state, CharacterState::Running | CharacterState::Ducking) {
                    self.animation_frame ^= 1;
                }
                None
            }
            RunnerTask::FlapFrame => {
                if self.obstacle.kind() == ObstacleKind::Flying {
                    self.obstacle.flap_frame ^= 1;
                }
                None
            }
            RunnerTask::SampleDistance => {
                self.stats.distance += DISTANCE_PER_SAMPLE;
                self.stats.sample_height(self.jump_offset());
                let milestone = self.config.distance_milestone;
                if milestone > 0 && self.stats.distance % milestone == 0 {
                    tracing::info!(distance = self.stats.distance, "distance milestone");
                    return Some(RunnerEvent::DistanceMilestone(self.stats.distance));
                }
                None
            }
            RunnerTask::CheckCollision => self.check_collision().map(RunnerEvent::GameOver),
            RunnerTask::EndJump => {
                // A reset or game over may have already ended the jump.
                if self.state == CharacterState::Jumping {
                    self.state = if self.duck_held {
                        CharacterState::Ducking
                    } else {
                        CharacterState::Running
                    };
                    self.jump_started_ms = None;
                }
                None
            }
        }
    }
}

/// Process an input on an active runner game.
pub fn process_input(game: &mut RunnerGame, input: RunnerInput) {
    match input {
        RunnerInput::Jump => {
            game.handle_jump_input();
        }
        RunnerInput::Duck(pressed) => game.handle_duck_input(pressed),
        RunnerInput::ToggleDuck => {
            let pressed = !game.is_duck_held();
            game.handle_duck_input(pressed);
        }
        RunnerInput::Restart => {
            if game.game_over {
                game.reset();
            }
        }
        RunnerInput::Other => {}
    }
}
