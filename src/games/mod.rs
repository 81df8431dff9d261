//! Arcade games: board games against a human or the computer, and runners.

pub mod board;
pub mod menu;
pub mod runner;

pub use board::{BoardEngine, BoardKind, PlayMode};
pub use menu::*;
pub use runner::{RunnerGame, RunnerSkin, ScoreStore};

/// A game listed in the arcade menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameType {
    TicTacToe,
    ConnectFour,
    DinoRun,
    BikeRun,
}

impl GameType {
    pub const ALL: [GameType; 4] = [
        GameType::TicTacToe,
        GameType::ConnectFour,
        GameType::DinoRun,
        GameType::BikeRun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TicTacToe => BoardKind::TicTacToe.name(),
            Self::ConnectFour => BoardKind::ConnectFour.name(),
            Self::DinoRun => RunnerSkin::Dino.title(),
            Self::BikeRun => RunnerSkin::Bike.title(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::TicTacToe => "Three in a row on a 3x3 grid.",
            Self::ConnectFour => "Drop discs, connect four on a 6x7 grid.",
            Self::DinoRun => "Jump the cacti, duck the birds.",
            Self::BikeRun => "Same track, on two wheels.",
        }
    }

    /// Board games take a play mode; runners ignore it.
    pub fn uses_play_mode(&self) -> bool {
        matches!(self, Self::TicTacToe | Self::ConnectFour)
    }
}

/// The game currently on screen. Only one runs at a time.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Board(BoardEngine),
    Runner(RunnerGame),
}

/// Start a game, loading runner scores from `store`.
pub fn start_game(game_type: GameType, mode: PlayMode, store: &ScoreStore) -> ActiveGame {
    match game_type {
        GameType::TicTacToe => ActiveGame::Board(BoardEngine::new(BoardKind::TicTacToe, mode)),
        GameType::ConnectFour => ActiveGame::Board(BoardEngine::new(BoardKind::ConnectFour, mode)),
        GameType::DinoRun => start_runner(RunnerSkin::Dino, store),
        GameType::BikeRun => start_runner(RunnerSkin::Bike, store),
    }
}

fn start_runner(skin: RunnerSkin, store: &ScoreStore) -> ActiveGame {
    ActiveGame::Runner(RunnerGame::new(skin, store.load(skin)))
}
