//! Arcade - terminal mini-game collection.
//!
//! Board games (Tic-Tac-Toe, Connect Four) with a heuristic computer
//! opponent, and an obstacle runner with Dino and Bike skins.

pub mod core;
pub mod games;
pub mod input;
pub mod ui;
pub mod utils;
