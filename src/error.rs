//! Error types for caller precondition violations.
//!
//! Moves on occupied cells or after a win are not errors: the controller
//! ignores them. These variants cover calls that name something that does
//! not exist.

use derive_more::{Display, Error};

/// Rejected game or board operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Cell index past the end of the board.
    #[display("cell {index} is outside a board of {cells} cells")]
    CellOutOfRange { index: usize, cells: usize },
    /// History step past the end of the recorded history.
    #[display("step {step} is outside a history of {len} snapshots")]
    StepOutOfRange { step: usize, len: usize },
    /// Cell count that cannot form a square grid.
    #[display("{len} cells do not form a square board")]
    NotSquare { len: usize },
    /// Board side outside the supported range.
    #[display("board side {side} is not supported (expected {min}..={max})")]
    UnsupportedSide { side: usize, min: usize, max: usize },
}
