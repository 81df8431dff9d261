//! Core timing and tuning shared by every game.

pub mod constants;
pub mod scheduler;

pub use scheduler::{Scheduler, TaskId};
