//! Board game data structures shared by Tic-Tac-Toe and Connect Four.
//!
//! Both games are one engine parameterized by board shape, the run length
//! needed to win, and whether pieces fall under gravity.

use crate::core::constants::{CONNECT_FOUR_THINK_MS, TIC_TAC_TOE_THINK_MS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which side owns a cell. `One` always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// The two implemented board games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardKind {
    TicTacToe,
    ConnectFour,
}

/// Fixed geometry of a board game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardShape {
    pub rows: usize,
    pub cols: usize,
    /// Consecutive cells needed to win.
    pub win_length: usize,
    /// Moves name a column and drop to its lowest empty row.
    pub gravity: bool,
}

const TIC_TAC_TOE_PREFERENCES: &[&[usize]] = &[&[4], &[0, 2, 6, 8]];
const CONNECT_FOUR_PREFERENCES: &[&[usize]] = &[&[3], &[2], &[4], &[1], &[5], &[0], &[6]];

impl BoardKind {
    pub const ALL: [BoardKind; 2] = [BoardKind::TicTacToe, BoardKind::ConnectFour];

    pub fn shape(&self) -> BoardShape {
        match self {
            Self::TicTacToe => BoardShape {
                rows: 3,
                cols: 3,
                win_length: 3,
                gravity: false,
            },
            Self::ConnectFour => BoardShape {
                rows: 6,
                cols: 7,
                win_length: 4,
                gravity: true,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::TicTacToe => "Tic-Tac-Toe",
            Self::ConnectFour => "Connect Four",
        }
    }

    /// Display label for a player's pieces.
    pub fn mark(&self, player: Player) -> &'static str {
        match (self, player) {
            (Self::TicTacToe, Player::One) => "X",
            (Self::TicTacToe, Player::Two) => "O",
            (Self::ConnectFour, Player::One) => "Player 1",
            (Self::ConnectFour, Player::Two) => "Player 2",
        }
    }

    /// How long the computer "thinks" before answering.
    pub fn think_delay_ms(&self) -> u64 {
        match self {
            Self::TicTacToe => TIC_TAC_TOE_THINK_MS,
            Self::ConnectFour => CONNECT_FOUR_THINK_MS,
        }
    }

    /// Positional preference tiers for the heuristic, best tier first.
    /// Within a tier the legal members are equally good.
    pub fn preference_tiers(&self) -> &'static [&'static [usize]] {
        match self {
            Self::TicTacToe => TIC_TAC_TOE_PREFERENCES,
            Self::ConnectFour => CONNECT_FOUR_PREFERENCES,
        }
    }

    /// Number of positions in the move space (cells, or columns under gravity).
    pub fn move_space(&self) -> usize {
        let shape = self.shape();
        if shape.gravity {
            shape.cols
        } else {
            shape.rows * shape.cols
        }
    }
}

/// Terminal or in-progress state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won(Player),
    Tied,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("game already over")]
    GameOver,

    #[error("position {position} is off the board")]
    OutOfRange { position: usize },

    #[error("position {position} is already occupied")]
    Occupied { position: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("waiting for the computer to move")]
    AwaitingComputer,
}

/// A grid of cells plus whose turn it is and the derived status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub kind: BoardKind,
    /// Row-major, row 0 at the top.
    pub cells: Vec<Option<Player>>,
    pub turn: Player,
    pub status: Status,
    /// Cell filled by the most recent move.
    pub last_move: Option<usize>,
}

impl Board {
    pub fn new(kind: BoardKind) -> Self {
        let shape = kind.shape();
        Self {
            kind,
            cells: vec![None; shape.rows * shape.cols],
            turn: Player::One,
            status: Status::InProgress,
            last_move: None,
        }
    }

    pub fn shape(&self) -> BoardShape {
        self.kind.shape()
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.shape().cols + col
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[self.index(row, col)]
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Resolve a position in the move space to the cell it would fill.
    pub fn target_cell(&self, position: usize) -> Result<usize, MoveRejected> {
        let shape = self.shape();
        if shape.gravity {
            if position >= shape.cols {
                return Err(MoveRejected::OutOfRange { position });
            }
            (0..shape.rows)
                .rev()
                .map(|row| self.index(row, position))
                .find(|&idx| self.cells[idx].is_none())
                .ok_or(MoveRejected::ColumnFull { column: position })
        } else {
            match self.cells.get(position) {
                None => Err(MoveRejected::OutOfRange { position }),
                Some(Some(_)) => Err(MoveRejected::Occupied { position }),
                Some(None) => Ok(position),
            }
        }
    }

    /// Positions `apply_move` would accept, in increasing order.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        (0..self.kind.move_space())
            .filter(|&p| self.target_cell(p).is_ok())
            .collect()
    }

    /// Place the current player's piece at `position`, flip the turn and
    /// recompute the status. Returns the cell that was filled.
    pub fn apply_move(&mut self, position: usize) -> Result<usize, MoveRejected> {
        if self.status.is_terminal() {
            return Err(MoveRejected::GameOver);
        }
        let idx = self.target_cell(position)?;
        self.cells[idx] = Some(self.turn);
        self.last_move = Some(idx);
        self.turn = self.turn.opponent();
        self.status = super::rules::compute_status(self);
        Ok(idx)
    }

    /// Copy of the board with `player` placed at `position`, ignoring whose
    /// turn it is. Used for one-ply lookahead.
    pub fn with_move_for(&self, position: usize, player: Player) -> Option<Board> {
        if self.status.is_terminal() {
            return None;
        }
        let idx = self.target_cell(position).ok()?;
        let mut next = self.clone();
        next.cells[idx] = Some(player);
        next.last_move = Some(idx);
        next.turn = player.opponent();
        next.status = super::rules::compute_status(&next);
        Some(next)
    }

    /// Cells of the first winning run, if any.
    pub fn winning_line(&self) -> Option<Vec<usize>> {
        super::rules::find_winner(self).map(|(_, line)| line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new(BoardKind::TicTacToe);
        assert_eq!(board.cells.len(), 9);
        assert_eq!(board.turn, Player::One);
        assert_eq!(board.status, Status::InProgress);

        let board = Board::new(BoardKind::ConnectFour);
        assert_eq!(board.cells.len(), 42);
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn test_tic_tac_toe_rejects_occupied_cell() {
        let mut board = Board::new(BoardKind::TicTacToe);
        assert_eq!(board.apply_move(4), Ok(4));
        assert_eq!(
            board.apply_move(4),
            Err(MoveRejected::Occupied { position: 4 })
        );
        // Rejected move leaves the turn alone.
        assert_eq!(board.turn, Player::Two);
        assert_eq!(
            board.apply_move(9),
            Err(MoveRejected::OutOfRange { position: 9 })
        );
    }

    #[test]
    fn test_connect_four_gravity() {
        let mut board = Board::new(BoardKind::ConnectFour);
        let bottom = board.index(5, 3);
        assert_eq!(board.apply_move(3), Ok(bottom));
        assert_eq!(board.apply_move(3), Ok(board.index(4, 3)));
        assert_eq!(board.cell(5, 3), Some(Player::One));
        assert_eq!(board.cell(4, 3), Some(Player::Two));
    }

    #[test]
    fn test_connect_four_full_column_rejected() {
        let mut board = Board::new(BoardKind::ConnectFour);
        for _ in 0..6 {
            board.apply_move(0).unwrap();
        }
        let turn = board.turn;
        assert_eq!(
            board.apply_move(0),
            Err(MoveRejected::ColumnFull { column: 0 })
        );
        assert_eq!(board.turn, turn);
        assert!(!board.legal_moves().contains(&0));
    }

    #[test]
    fn test_with_move_for_leaves_original_untouched() {
        let board = Board::new(BoardKind::TicTacToe);
        let next = board.with_move_for(0, Player::Two).unwrap();
        assert_eq!(next.cells[0], Some(Player::Two));
        assert!(board.cells[0].is_none());
    }

    #[test]
    fn test_move_space() {
        assert_eq!(BoardKind::TicTacToe.move_space(), 9);
        assert_eq!(BoardKind::ConnectFour.move_space(), 7);
    }

    #[test]
    fn test_think_delays() {
        assert_eq!(BoardKind::TicTacToe.think_delay_ms(), 500);
        assert_eq!(BoardKind::ConnectFour.think_delay_ms(), 1000);
    }
}
