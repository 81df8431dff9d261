//! One-ply heuristic for the computer player.
//!
//! Priority: win now > block the opponent's win > positional preference >
//! anything legal. No deeper lookahead, so multi-move traps go unseen.

use super::types::{Board, Player, Status};
use rand::seq::SliceRandom;
use rand::Rng;

/// Which priority step produced the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    Win,
    Block,
    Preferred,
    Random,
}

/// Moves the heuristic considers equally good, before the random pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    pub reason: MoveReason,
    pub positions: Vec<usize>,
}

/// First legal position (increasing order) that wins on the spot for `player`.
fn first_winning_move(board: &Board, legal: &[usize], player: Player) -> Option<usize> {
    legal.iter().copied().find(|&position| {
        board
            .with_move_for(position, player)
            .is_some_and(|next| next.status == Status::Won(player))
    })
}

/// The candidate set for `player`, or `None` when no move is legal.
pub fn heuristic_candidates(board: &Board, player: Player) -> Option<Candidates> {
    let legal = board.legal_moves();
    if legal.is_empty() {
        return None;
    }

    if let Some(position) = first_winning_move(board, &legal, player) {
        return Some(Candidates {
            reason: MoveReason::Win,
            positions: vec![position],
        });
    }

    if let Some(position) = first_winning_move(board, &legal, player.opponent()) {
        return Some(Candidates {
            reason: MoveReason::Block,
            positions: vec![position],
        });
    }

    for tier in board.kind.preference_tiers() {
        let open: Vec<usize> = tier
            .iter()
            .copied()
            .filter(|p| legal.contains(p))
            .collect();
        if !open.is_empty() {
            return Some(Candidates {
                reason: MoveReason::Preferred,
                positions: open,
            });
        }
    }

    Some(Candidates {
        reason: MoveReason::Random,
        positions: legal,
    })
}

/// Pick the computer's move. `None` means the board has no legal move.
pub fn select_heuristic_move<R: Rng>(board: &Board, player: Player, rng: &mut R) -> Option<usize> {
    let candidates = heuristic_candidates(board, player)?;
    candidates.positions.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::board::types::BoardKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Build a tic-tac-toe board from a 9-char pattern of `X`, `O`, `_`.
    fn ttt(pattern: &str) -> Board {
        let mut board = Board::new(BoardKind::TicTacToe);
        for (i, ch) in pattern.chars().enumerate() {
            board.cells[i] = match ch {
                'X' => Some(Player::One),
                'O' => Some(Player::Two),
                _ => None,
            };
        }
        board
    }

    /// Drop pieces into connect-four columns in order, alternating players.
    fn c4(columns: &[usize]) -> Board {
        let mut board = Board::new(BoardKind::ConnectFour);
        for &col in columns {
            board.apply_move(col).unwrap();
        }
        board
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        let board = ttt("XX_O_____");
        let candidates = heuristic_candidates(&board, Player::Two).unwrap();
        assert_eq!(candidates.reason, MoveReason::Block);
        assert_eq!(candidates.positions, vec![2]);
    }

    #[test]
    fn test_win_outranks_block() {
        // X threatens 2, but O completes the middle row at 5.
        let board = ttt("XX_OO____");
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(select_heuristic_move(&board, Player::Two, &mut rng), Some(5));
    }

    #[test]
    fn test_first_winning_move_in_index_order() {
        // O can win at 2 (top row) or 6 (left column); 2 comes first.
        let board = ttt("OO_O_X_XX");
        let candidates = heuristic_candidates(&board, Player::Two).unwrap();
        assert_eq!(candidates.reason, MoveReason::Win);
        assert_eq!(candidates.positions, vec![2]);
    }

    #[test]
    fn test_takes_center_when_open() {
        let board = ttt("X________");
        let candidates = heuristic_candidates(&board, Player::Two).unwrap();
        assert_eq!(candidates.reason, MoveReason::Preferred);
        assert_eq!(candidates.positions, vec![4]);
    }

    #[test]
    fn test_random_corner_after_center() {
        let board = ttt("____X____");
        let candidates = heuristic_candidates(&board, Player::Two).unwrap();
        assert_eq!(candidates.reason, MoveReason::Preferred);
        assert_eq!(candidates.positions, vec![0, 2, 6, 8]);

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let pick = select_heuristic_move(&board, Player::Two, &mut rng).unwrap();
            assert!([0, 2, 6, 8].contains(&pick));
        }
    }

    #[test]
    fn test_first_block_in_index_order() {
        // X threatens only the 0-4-8 diagonal.
        let board = ttt("XOX_X_O__");
        let candidates = heuristic_candidates(&board, Player::Two).unwrap();
        assert_eq!(candidates.reason, MoveReason::Block);
        assert_eq!(candidates.positions, vec![8]);

        // X threatens 3 (left column) and 7 (bottom row); 3 comes first.
        let board = ttt("X_O_O_X_X");
        let candidates = heuristic_candidates(&board, Player::Two).unwrap();
        assert_eq!(candidates.reason, MoveReason::Block);
        assert_eq!(candidates.positions, vec![3]);
    }

    #[test]
    fn test_block_beats_corner_preference() {
        // X threatens the 2-4-6 diagonal; free corners exist but 6 is forced.
        let board = ttt("O_X_X____");
        let candidates = heuristic_candidates(&board, Player::Two).unwrap();
        assert_eq!(candidates.reason, MoveReason::Block);
        assert_eq!(candidates.positions, vec![6]);
    }

    #[test]
    fn test_only_free_corners_offered() {
        // X _ _ / _ O _ / _ _ _ with O to move: no threats, center taken.
        let board = ttt("X___O____");
        let candidates = heuristic_candidates(&board, Player::Two).unwrap();
        assert_eq!(candidates.reason, MoveReason::Preferred);
        assert_eq!(candidates.positions, vec![2, 6, 8]);
    }

    #[test]
    fn test_random_fallback_when_no_preference_left() {
        // O X O / _ X _ / X O X: center and corners gone, no threats.
        let board = ttt("OXO_X_XOX");
        let candidates = heuristic_candidates(&board, Player::Two).unwrap();
        assert_eq!(candidates.reason, MoveReason::Random);
        assert_eq!(candidates.positions, vec![3, 5]);
    }

    #[test]
    fn test_no_move_on_full_or_finished_board() {
        let full = ttt("XOXXOOOXX");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(heuristic_candidates(&full, Player::Two).is_none());
        assert_eq!(select_heuristic_move(&full, Player::Two, &mut rng), None);

        let mut won = Board::new(BoardKind::TicTacToe);
        for p in [0, 3, 1, 4, 2] {
            won.apply_move(p).unwrap();
        }
        assert_eq!(won.status, Status::Won(Player::One));
        assert_eq!(select_heuristic_move(&won, Player::Two, &mut rng), None);
    }

    #[test]
    fn test_connect_four_prefers_center_column() {
        let board = Board::new(BoardKind::ConnectFour);
        let candidates = heuristic_candidates(&board, Player::Two).unwrap();
        assert_eq!(candidates.reason, MoveReason::Preferred);
        assert_eq!(candidates.positions, vec![3]);
    }

    #[test]
    fn test_connect_four_falls_back_to_next_preference() {
        // Fill column 3 without creating threats: alternating pieces.
        let board = c4(&[3, 3, 3, 3, 3, 3]);
        let candidates = heuristic_candidates(&board, Player::One).unwrap();
        assert_eq!(candidates.positions, vec![2]);
    }

    #[test]
    fn test_connect_four_takes_vertical_win() {
        // Player 1 stacks column 0; player 2 stacks column 6.
        let board = c4(&[0, 6, 0, 6, 0, 6]);
        // Player One to move and can win at column 0.
        let candidates = heuristic_candidates(&board, Player::One).unwrap();
        assert_eq!(candidates.reason, MoveReason::Win);
        assert_eq!(candidates.positions, vec![0]);
        // Player Two could block column 0, but its own win at 6 comes first.
        let candidates = heuristic_candidates(&board, Player::Two).unwrap();
        assert_eq!(candidates.reason, MoveReason::Win);
        assert_eq!(candidates.positions, vec![6]);
    }

    #[test]
    fn test_connect_four_blocks_horizontal_threat() {
        // Player 1 on bottom row columns 1,2,3; player 2 stacked on 1 and 2.
        let board = c4(&[1, 1, 2, 2, 3]);
        let candidates = heuristic_candidates(&board, Player::Two).unwrap();
        assert_eq!(candidates.reason, MoveReason::Block);
        // Both 0 and 4 complete the row; the lowest column is blocked first.
        assert_eq!(candidates.positions, vec![0]);
    }
}
