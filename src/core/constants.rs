// Frame loop
pub const FRAME_POLL_MS: u64 = 16; // ~60 FPS redraw/poll cadence
pub const MAX_FRAME_MS: u64 = 250; // dt clamp after a stall or suspend

// Board games: computer "thinking" delays
pub const TIC_TAC_TOE_THINK_MS: u64 = 500;
pub const CONNECT_FOUR_THINK_MS: u64 = 1000;

// Runner: task periods
pub const OBSTACLE_ADVANCE_MS: u64 = 30;
pub const RUN_FRAME_MS: u64 = 200;
pub const FLAP_FRAME_MS: u64 = 300;
pub const DISTANCE_SAMPLE_MS: u64 = 100;
pub const COLLISION_CHECK_MS: u64 = 100;
pub const JUMP_DURATION_MS: u64 = 700;

// Runner: obstacle slot
pub const OBSTACLE_START_X: f64 = 1000.0;
pub const OBSTACLE_STEP: f64 = 10.0;
pub const OBSTACLE_RESPAWN_X: f64 = -50.0;
pub const FLYING_SPAWN_CHANCE: f64 = 0.3;

// Runner: character geometry (world units, y up from the ground baseline)
pub const CHARACTER_X: f64 = 50.0;
pub const CHARACTER_WIDTH: f64 = 50.0;
pub const CHARACTER_STANDING_HEIGHT: f64 = 50.0;
pub const CHARACTER_DUCKING_HEIGHT: f64 = 35.0;
pub const JUMP_PEAK_HEIGHT: f64 = 120.0;

// Runner: obstacle geometry
pub const LARGE_CACTUS_SIZE: f64 = 50.0;
pub const SMALL_CACTUS_SIZE: f64 = 35.0;
pub const BIRD_WIDTH: f64 = 46.0;
pub const BIRD_HEIGHT: f64 = 40.0;
pub const BIRD_ELEVATION: f64 = 40.0; // above a ducking character, below a standing one

// Runner: scoring
pub const DISTANCE_PER_SAMPLE: u32 = 1;
pub const DISTANCE_MILESTONE: u32 = 100;
pub const SCORE_HISTORY_CAP: usize = 10;

// Visible world width used by the runner scene
pub const WORLD_WIDTH: f64 = 1000.0;
