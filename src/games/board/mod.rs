//! Turn-based grid games: Tic-Tac-Toe and Connect Four.

pub mod heuristic;
pub mod logic;
pub mod rules;
pub mod types;

pub use heuristic::{heuristic_candidates, select_heuristic_move, Candidates, MoveReason};
pub use logic::{process_input, BoardEngine, BoardInput, PlayMode, Scoreboard};
pub use types::{Board, BoardKind, BoardShape, MoveRejected, Player, Status};
