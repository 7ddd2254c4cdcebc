//! Board representation for N×N tic-tac-toe

pub mod board;


// Re-exports
pub use board::Board;

/// Default board side (5x5)
pub const BOARD_SIDE: usize = 5;
pub const TOTAL_CELLS: usize = BOARD_SIDE * BOARD_SIDE; // 25

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }

    /// Mark as displayed on the board ("" for empty cells)
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::X => "X",
            Cell::O => "O",
            Cell::Empty => "",
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Flat index on a board with the given side
    #[inline]
    pub fn to_index(self, side: usize) -> usize {
        self.row * side + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, side: usize) -> Self {
        Self {
            row: idx / side,
            col: idx % side,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, side: usize) -> bool {
        row >= 0 && (row as usize) < side && col >= 0 && (col as usize) < side
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
