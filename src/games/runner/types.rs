//! Obstacle runner data structures.
//!
//! One character and one obstacle slot in a side-scrolling world. World units
//! have y growing upward from the ground baseline.

use crate::core::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Visual theme of a runner game. Each skin keeps its own scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunnerSkin {
    Dino,
    Bike,
}

impl RunnerSkin {
    pub const ALL: [RunnerSkin; 2] = [RunnerSkin::Dino, RunnerSkin::Bike];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dino => "Dino Run",
            Self::Bike => "Bike Run",
        }
    }

    /// Lowercase key used in save file names.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Dino => "dino",
            Self::Bike => "bike",
        }
    }

    /// Capitalized label used in export file names.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dino => "Dino",
            Self::Bike => "Bike",
        }
    }
}

/// Whether an obstacle sits on the ground (jump it) or flies (duck under it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Ground,
    Flying,
}

/// Concrete obstacle sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleVariant {
    LargeCactus1,
    LargeCactus2,
    LargeCactus3,
    SmallCactus1,
    SmallCactus2,
    SmallCactus3,
    Bird,
}

impl ObstacleVariant {
    pub const GROUND: [ObstacleVariant; 6] = [
        Self::LargeCactus1,
        Self::LargeCactus2,
        Self::LargeCactus3,
        Self::SmallCactus1,
        Self::SmallCactus2,
        Self::SmallCactus3,
    ];

    pub fn kind(&self) -> ObstacleKind {
        match self {
            Self::Bird => ObstacleKind::Flying,
            _ => ObstacleKind::Ground,
        }
    }

    pub fn is_large(&self) -> bool {
        matches!(
            self,
            Self::LargeCactus1 | Self::LargeCactus2 | Self::LargeCactus3
        )
    }

    pub fn width(&self) -> f64 {
        match self {
            Self::Bird => BIRD_WIDTH,
            v if v.is_large() => LARGE_CACTUS_SIZE,
            _ => SMALL_CACTUS_SIZE,
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            Self::Bird => BIRD_HEIGHT,
            v if v.is_large() => LARGE_CACTUS_SIZE,
            _ => SMALL_CACTUS_SIZE,
        }
    }

    /// Height of the obstacle's bottom edge above the ground.
    pub fn elevation(&self) -> f64 {
        match self {
            Self::Bird => BIRD_ELEVATION,
            _ => 0.0,
        }
    }

    /// Pick a respawn variant: flying with `flying_chance`, else a uniformly
    /// random ground variant.
    pub fn random<R: Rng>(rng: &mut R, flying_chance: f64) -> Self {
        if rng.gen_bool(flying_chance.clamp(0.0, 1.0)) {
            Self::Bird
        } else {
            Self::GROUND[rng.gen_range(0..Self::GROUND.len())]
        }
    }
}

/// Axis-aligned box in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Rect {
    /// Strict overlap: boxes that only touch along an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.bottom < other.top
            && self.top > other.bottom
    }
}

/// The single long-lived obstacle slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge in world units.
    pub x: f64,
    pub variant: ObstacleVariant,
    /// Wing frame for flying obstacles (0 or 1).
    pub flap_frame: u8,
}

impl Obstacle {
    pub fn new(x: f64, variant: ObstacleVariant) -> Self {
        Self {
            x,
            variant,
            flap_frame: 0,
        }
    }

    pub fn kind(&self) -> ObstacleKind {
        self.variant.kind()
    }

    pub fn bounds(&self) -> Rect {
        let bottom = self.variant.elevation();
        Rect {
            left: self.x,
            right: self.x + self.variant.width(),
            bottom,
            top: bottom + self.variant.height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterState {
    Running,
    Jumping,
    Ducking,
    Dead,
}

/// Result of one finished run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    /// Meters travelled.
    pub distance: u32,
    pub jumps: u32,
    pub max_height: f64,
    pub min_height: f64,
    /// Unix seconds.
    pub timestamp: i64,
}

/// All-time best per field. Fields may come from different runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighScore {
    pub distance: u32,
    pub jumps: u32,
    pub max_height: f64,
}

impl HighScore {
    /// Componentwise max with a finished run.
    pub fn fold(&mut self, record: &ScoreRecord) {
        self.distance = self.distance.max(record.distance);
        self.jumps = self.jumps.max(record.jumps);
        self.max_height = self.max_height.max(record.max_height);
    }
}

/// Persistent scores for one skin: recent history plus the high score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBook {
    /// Most recent first.
    pub history: Vec<ScoreRecord>,
    pub high_score: HighScore,
}

impl ScoreBook {
    /// Prepend a record, trim the history to `cap`, fold into the high score.
    pub fn record(&mut self, record: ScoreRecord, cap: usize) {
        self.history.insert(0, record);
        self.history.truncate(cap);
        self.high_score.fold(&record);
    }
}

/// Tunable runner parameters. Defaults match the shipped games.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunnerConfig {
    pub obstacle_advance_ms: u64,
    pub run_frame_ms: u64,
    pub flap_frame_ms: u64,
    pub distance_sample_ms: u64,
    pub collision_check_ms: u64,
    pub jump_duration_ms: u64,
    pub max_frame_ms: u64,
    pub obstacle_start_x: f64,
    pub obstacle_step: f64,
    pub obstacle_respawn_x: f64,
    pub flying_spawn_chance: f64,
    pub jump_peak_height: f64,
    pub distance_milestone: u32,
    pub history_cap: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            obstacle_advance_ms: OBSTACLE_ADVANCE_MS,
            run_frame_ms: RUN_FRAME_MS,
            flap_frame_ms: FLAP_FRAME_MS,
            distance_sample_ms: DISTANCE_SAMPLE_MS,
            collision_check_ms: COLLISION_CHECK_MS,
            jump_duration_ms: JUMP_DURATION_MS,
            max_frame_ms: MAX_FRAME_MS,
            obstacle_start_x: OBSTACLE_START_X,
            obstacle_step: OBSTACLE_STEP,
            obstacle_respawn_x: OBSTACLE_RESPAWN_X,
            flying_spawn_chance: FLYING_SPAWN_CHANCE,
            jump_peak_height: JUMP_PEAK_HEIGHT,
            distance_milestone: DISTANCE_MILESTONE,
            history_cap: SCORE_HISTORY_CAP,
        }
    }
}

/// Notable things that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunnerEvent {
    ObstacleRespawned(ObstacleVariant),
    DistanceMilestone(u32),
    GameOver(ScoreRecord),
}

/// Named tasks on the runner's scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerTask {
    AdvanceObstacle,
    CycleFrame,
    FlapFrame,
    SampleDistance,
    CheckCollision,
    EndJump,
}

/// UI-agnostic input actions for runner games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    Jump,
    /// Duck key pressed (`true`) or released (`false`).
    Duck(bool),
    /// Flip the held duck state (terminals rarely report key releases).
    ToggleDuck,
    Restart,
    Other,
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn record(distance: u32, jumps: u32, max_height: f64) -> ScoreRecord {
        ScoreRecord {
            distance,
            jumps,
            max_height,
            min_height: 0.0,
            timestamp: 0,
        }
    }

    #[test]
    fn test_rect_edge_touch_is_not_overlap() {
        let a = Rect {
            left: 0.0,
            right: 10.0,
            bottom: 0.0,
            top: 10.0,
        };
        let touching = Rect {
            left: 10.0,
            right: 20.0,
            bottom: 0.0,
            top: 10.0,
        };
        let above = Rect {
            left: 0.0,
            right: 10.0,
            bottom: 10.0,
            top: 20.0,
        };
        let inside = Rect {
            left: 9.0,
            right: 20.0,
            bottom: 9.0,
            top: 20.0,
        };
        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&above));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_obstacle_geometry() {
        let cactus = Obstacle::new(100.0, ObstacleVariant::LargeCactus2);
        assert_eq!(cactus.kind(), ObstacleKind::Ground);
        assert_eq!(
            cactus.bounds(),
            Rect {
                left: 100.0,
                right: 150.0,
                bottom: 0.0,
                top: 50.0
            }
        );

        let bird = Obstacle::new(0.0, ObstacleVariant::Bird);
        assert_eq!(bird.kind(), ObstacleKind::Flying);
        let b = bird.bounds();
        assert!(b.bottom > CHARACTER_DUCKING_HEIGHT);
        assert!(b.bottom < CHARACTER_STANDING_HEIGHT);
    }

    #[test]
    fn test_random_variant_respects_chance() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(ObstacleVariant::random(&mut rng, 1.0), ObstacleVariant::Bird);
            assert_eq!(
                ObstacleVariant::random(&mut rng, 0.0).kind(),
                ObstacleKind::Ground
            );
        }
    }

    #[test]
    fn test_random_variant_mix() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let birds = (0..2_000)
            .filter(|_| ObstacleVariant::random(&mut rng, FLYING_SPAWN_CHANCE).kind() == ObstacleKind::Flying)
            .count();
        // 30% of 2000 = 600; allow a generous band.
        assert!((450..750).contains(&birds), "birds = {}", birds);
    }

    #[test]
    fn test_score_book_caps_history_most_recent_first() {
        let mut book = ScoreBook::default();
        for d in 1..=11 {
            book.record(record(d, 0, 0.0), SCORE_HISTORY_CAP);
        }
        assert_eq!(book.history.len(), 10);
        assert_eq!(book.history[0].distance, 11);
        assert_eq!(book.history[9].distance, 2);
    }

    #[test]
    fn test_high_score_is_componentwise_max() {
        let mut book = ScoreBook::default();
        book.record(record(50, 1, 10.0), 10);
        book.record(record(20, 9, 5.0), 10);
        book.record(record(30, 2, 120.0), 10);
        assert_eq!(
            book.high_score,
            HighScore {
                distance: 50,
                jumps: 9,
                max_height: 120.0
            }
        );
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(117.5999), 117.6);
        assert_eq!(round2(0.004), 0.0);
        assert_eq!(round2(42.0), 42.0);
    }
}
