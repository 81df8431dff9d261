//! Side-scrolling obstacle runner shared by the Dino and Bike skins.

pub mod logic;
pub mod scores;
pub mod types;

pub use logic::{process_input, RunnerGame, RunnerStats};
pub use scores::ScoreStore;
pub use types::*;
