//! Square board value

use super::{Cell, Pos, BOARD_SIDE};
use crate::error::GameError;

/// Game board: `side * side` cells in row-major order.
///
/// Boards are values. Placing a mark produces a new board so that
/// snapshots kept in the history never change under the reader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    side: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Empty board of the default side
    pub fn new() -> Self {
        Self::with_side(BOARD_SIDE)
    }

    /// Empty board with `side * side` cells.
    ///
    /// A side of zero is bumped to one so the board is never degenerate.
    pub fn with_side(side: usize) -> Self {
        let side = side.max(1);
        Self {
            side,
            cells: vec![Cell::Empty; side * side],
        }
    }

    /// Build a board from row-major cells. The length must be a non-zero
    /// perfect square.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, GameError> {
        let len = cells.len();
        let side = integer_sqrt(len);
        if len == 0 || side * side != len {
            return Err(GameError::NotSquare { len });
        }
        Ok(Self { side, cells })
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells (side²)
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at a flat index, `None` when off the board
    #[inline]
    pub fn cell(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    /// Cell at a position (off-board positions read as empty)
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if pos.row >= self.side || pos.col >= self.side {
            return Cell::Empty;
        }
        self.cells[pos.to_index(self.side)]
    }

    /// Check if a cell is empty. Off-board indices are never empty.
    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        matches!(self.cell(idx), Some(Cell::Empty))
    }

    /// Copy of this board with `mark` written at `idx`.
    pub fn with_mark(&self, idx: usize, mark: Cell) -> Result<Self, GameError> {
        if idx >= self.len() {
            return Err(GameError::CellOutOfRange {
                index: idx,
                cells: self.len(),
            });
        }
        let mut next = self.clone();
        next.cells[idx] = mark;
        Ok(next)
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Check if no cell is occupied
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Multi-line text rendering, `.` for empty cells
    pub fn display(&self) -> String {
        self.cells
            .chunks(self.side)
            .map(|row| {
                row.iter()
                    .map(|c| if c.is_empty() { "." } else { c.symbol() })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
