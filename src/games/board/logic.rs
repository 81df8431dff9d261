//! Board engine: turn management, scoreboard, and the scheduled computer reply.

use super::heuristic::select_heuristic_move;
use super::types::{Board, BoardKind, MoveRejected, Player, Status};
use crate::core::scheduler::Scheduler;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Who controls player two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayMode {
    HumanVsHuman,
    HumanVsComputer,
}

impl PlayMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HumanVsHuman => "Human vs Human",
            Self::HumanVsComputer => "Human vs Computer",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::HumanVsHuman => Self::HumanVsComputer,
            Self::HumanVsComputer => Self::HumanVsHuman,
        }
    }
}

/// Session tallies. Survive `reset()`, cleared by `reset_scores()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub one_wins: u32,
    pub two_wins: u32,
    pub ties: u32,
}

impl Scoreboard {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Won(Player::One) => self.one_wins += 1,
            Status::Won(Player::Two) => self.two_wins += 1,
            Status::Tied => self.ties += 1,
            Status::InProgress => {}
        }
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::One => self.one_wins,
            Player::Two => self.two_wins,
        }
    }
}

/// Deferred work owned by a board session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardTask {
    ComputerMove,
}

/// UI-agnostic input actions for board games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardInput {
    Up,
    Down,
    Left,
    Right,
    /// Play at the cursor.
    Place,
    /// Play directly at a move-space position (cell, or column under gravity).
    PlaceAt(usize),
    NewGame,
    ResetScores,
    ToggleMode,
    Other,
}

/// A board game session.
#[derive(Debug, Clone)]
pub struct BoardEngine {
    pub board: Board,
    pub scoreboard: Scoreboard,
    pub mode: PlayMode,
    /// Side the computer plays in `HumanVsComputer` mode.
    pub computer: Player,
    /// Cursor in the move space.
    pub cursor: usize,
    scheduler: Scheduler<BoardTask>,
}

impl BoardEngine {
    pub fn new(kind: BoardKind, mode: PlayMode) -> Self {
        tracing::info!(game = kind.name(), mode = mode.name(), "board game started");
        Self {
            board: Board::new(kind),
            scoreboard: Scoreboard::default(),
            mode,
            computer: Player::Two,
            cursor: initial_cursor(kind),
            scheduler: Scheduler::new(),
        }
    }

    pub fn kind(&self) -> BoardKind {
        self.board.kind
    }

    /// True while a computer reply is scheduled but not yet played.
    pub fn is_computer_thinking(&self) -> bool {
        self.scheduler.is_pending(BoardTask::ComputerMove)
    }

    fn is_computer_turn(&self) -> bool {
        self.mode == PlayMode::HumanVsComputer
            && self.board.turn == self.computer
            && self.board.status == Status::InProgress
    }

    /// Apply a move for whoever's turn it is.
    pub fn apply_move(&mut self, position: usize) -> Result<&Board, MoveRejected> {
        let mover = self.board.turn;
        let cell = self.board.apply_move(position)?;
        tracing::debug!(position, cell, player = ?mover, "move applied");

        if self.board.status.is_terminal() {
            self.scoreboard.record(self.board.status);
            self.scheduler.cancel_all();
            tracing::info!(
                game = self.kind().name(),
                status = ?self.board.status,
                "board game finished"
            );
        } else {
            self.schedule_computer_if_due();
        }
        Ok(&self.board)
    }

    /// Move on behalf of the human at the keyboard.
    pub fn human_move(&mut self, position: usize) -> Result<&Board, MoveRejected> {
        if self.is_computer_turn() {
            return Err(MoveRejected::AwaitingComputer);
        }
        self.apply_move(position)
    }

    /// Fresh board; scoreboard kept, pending computer reply dropped.
    pub fn reset(&mut self) -> &Board {
        self.scheduler.cancel_all();
        self.board = Board::new(self.kind());
        self.cursor = initial_cursor(self.kind());
        self.schedule_computer_if_due();
        &self.board
    }

    pub fn reset_scores(&mut self) {
        self.scoreboard = Scoreboard::default();
    }

    pub fn set_mode(&mut self, mode: PlayMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.scheduler.cancel_task(BoardTask::ComputerMove);
        self.schedule_computer_if_due();
    }

    fn schedule_computer_if_due(&mut self) {
        if self.is_computer_turn() && !self.is_computer_thinking() {
            self.scheduler
                .after(BoardTask::ComputerMove, self.kind().think_delay_ms());
        }
    }

    /// Advance session time. Returns the position the computer played, if it
    /// moved during this interval.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> Option<usize> {
        let deadline = self.scheduler.deadline(dt_ms);
        let mut played = None;
        while let Some(task) = self.scheduler.pop_due(deadline) {
            match task {
                BoardTask::ComputerMove => {
                    if let Some(position) = self.play_computer_move(rng) {
                        played = Some(position);
                    }
                }
            }
        }
        played
    }

    fn play_computer_move<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        // The board may have changed since the reply was scheduled.
        if !self.is_computer_turn() {
            tracing::debug!("discarding stale computer move");
            return None;
        }
        let position = select_heuristic_move(&self.board, self.computer, rng)?;
        match self.apply_move(position) {
            Ok(_) => Some(position),
            Err(e) => {
                tracing::warn!(position, error = %e, "heuristic picked an illegal move");
                None
            }
        }
    }

    /// Move the cursor within the move space.
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let shape = self.board.shape();
        if shape.gravity {
            let col = (self.cursor as i32 + d_col).clamp(0, shape.cols as i32 - 1);
            self.cursor = col as usize;
        } else {
            let row = (self.cursor / shape.cols) as i32;
            let col = (self.cursor % shape.cols) as i32;
            let row = (row + d_row).clamp(0, shape.rows as i32 - 1) as usize;
            let col = (col + d_col).clamp(0, shape.cols as i32 - 1) as usize;
            self.cursor = row * shape.cols + col;
        }
    }
}

fn initial_cursor(kind: BoardKind) -> usize {
    kind.move_space() / 2
}

/// Process an input on an active board game.
/// Returns the rejection when a placement was refused.
pub fn process_input(engine: &mut BoardEngine, input: BoardInput) -> Result<(), MoveRejected> {
    match input {
        BoardInput::Up => engine.move_cursor(-1, 0),
        BoardInput::Down => engine.move_cursor(1, 0),
        BoardInput::Left => engine.move_cursor(0, -1),
        BoardInput::Right => engine.move_cursor(0, 1),
        BoardInput::Place => {
            let cursor = engine.cursor;
            engine.human_move(cursor)?;
        }
        BoardInput::PlaceAt(position) => {
            engine.human_move(position)?;
            if position < engine.kind().move_space() {
                engine.cursor = position;
            }
        }
        BoardInput::NewGame => {
            engine.reset();
        }
        BoardInput::ResetScores => engine.reset_scores(),
        BoardInput::ToggleMode => {
            let mode = engine.mode.toggled();
            engine.set_mode(mode);
        }
        BoardInput::Other => {}
    }
    Ok(())
}
