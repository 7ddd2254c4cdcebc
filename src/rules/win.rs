//! Win detection for N×N tic-tac-toe
//!
//! A player wins by filling a whole row, column or one of the two full
//! diagonals. Lines are checked in a fixed order: rows top to bottom,
//! columns left to right, main diagonal, anti-diagonal. The first complete
//! line decides the result.

use crate::board::{Board, Cell};

/// Winning player and the indices of the completed line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Win {
    pub player: Cell,
    pub line: Vec<usize>,
}

/// All winning lines for a board side, in checking order.
///
/// There are `2 * side + 2` lines of `side` indices each.
pub fn winning_lines(side: usize) -> Vec<Vec<usize>> {
    let mut lines = Vec::with_capacity(2 * side + 2);

    // Rows
    for row in 0..side {
        lines.push((0..side).map(|col| row * side + col).collect());
    }
    // Columns
    for col in 0..side {
        lines.push((0..side).map(|row| row * side + col).collect());
    }
    // Main diagonal
    lines.push((0..side).map(|i| i * side + i).collect());
    // Anti-diagonal
    lines.push((0..side).map(|i| i * side + (side - 1 - i)).collect());

    lines
}

/// Check for a winner
///
/// Returns the occupying player and the line's indices for the first
/// uniformly occupied line, `None` otherwise (including a full board).
pub fn check_winner(board: &Board) -> Option<Win> {
    let cells = board.cells();

    winning_lines(board.side()).into_iter().find_map(|line| {
        let first = cells[line[0]];
        if first.is_empty() || !line.iter().all(|&idx| cells[idx] == first) {
            return None;
        }
        Some(Win {
            player: first,
            line,
        })
    })
}

/// Winning player only
pub fn winner(board: &Board) -> Option<Cell> {
    check_winner(board).map(|win| win.player)
}

pub fn has_winner(board: &Board) -> bool {
    check_winner(board).is_some()
}
