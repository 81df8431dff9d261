//! Win detection for any board shape.

use super::types::{Board, BoardShape, Player, Status};

/// Directions to scan for runs: (row_delta, col_delta)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// Every run of `win_length` cells that fits on the board, as cell indices.
pub fn winning_lines(shape: &BoardShape) -> Vec<Vec<usize>> {
    let mut lines = Vec::new();
    let len = shape.win_length as i32;
    let rows = shape.rows as i32;
    let cols = shape.cols as i32;

    for (dr, dc) in DIRECTIONS {
        for row in 0..rows {
            for col in 0..cols {
                let end_r = row + dr * (len - 1);
                let end_c = col + dc * (len - 1);
                if end_r < 0 || end_r >= rows || end_c < 0 || end_c >= cols {
                    continue;
                }
                let line = (0..len)
                    .map(|k| ((row + dr * k) * cols + (col + dc * k)) as usize)
                    .collect();
                lines.push(line);
            }
        }
    }

    lines
}

/// First player owning a complete run, with the run's cells.
pub fn find_winner(board: &Board) -> Option<(Player, Vec<usize>)> {
    winning_lines(&board.shape()).into_iter().find_map(|line| {
        let first = board.cells[line[0]]?;
        line.iter()
            .all(|&idx| board.cells[idx] == Some(first))
            .then_some((first, line))
    })
}

/// Status derived purely from the cells.
pub fn compute_status(board: &Board) -> Status {
    if let Some((player, _)) = find_winner(board) {
        Status::Won(player)
    } else if board.is_full() {
        Status::Tied
    } else {
        Status::InProgress
    }
}
