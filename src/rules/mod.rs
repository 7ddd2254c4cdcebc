//! Game rules for N×N tic-tac-toe
//!
//! A move is playable when its cell is empty and nobody has won yet.

pub mod win;

use crate::board::Board;

// Re-exports for convenient access
pub use win::{check_winner, has_winner, winner, winning_lines, Win};

/// Check if a mark may be placed at `idx`
pub fn is_valid_move(board: &Board, idx: usize) -> bool {
    board.is_empty(idx) && !has_winner(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_valid_move_on_empty_cell() {
        assert!(is_valid_move(&Board::new(), 12));
    }

    #[test]
    fn test_occupied_or_off_board_invalid() {
        let board = Board::new().with_mark(12, Cell::X).unwrap();
        assert!(!is_valid_move(&board, 12));
        assert!(!is_valid_move(&board, 25));
    }

    #[test]
    fn test_no_moves_after_win() {
        let board = (0..3).fold(Board::with_side(3), |b, i| b.with_mark(i, Cell::O).unwrap());
        assert!(!is_valid_move(&board, 4));
    }
}
