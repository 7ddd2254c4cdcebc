//! Linear move history
//!
//! History is a flat list of board snapshots. Playing a move from an
//! earlier step drops every later snapshot first, so there is never more
//! than one line of play to return to.

use std::fmt;

use crate::board::{Board, Pos};

/// What produced a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveLabel {
    /// The initial empty board
    Start,
    /// A mark placed at a 1-indexed row and column
    Placed { row: usize, col: usize },
}

impl MoveLabel {
    /// Label for a mark placed at `idx` on a board with the given side
    pub fn for_index(idx: usize, side: usize) -> Self {
        let pos = Pos::from_index(idx, side);
        MoveLabel::Placed {
            row: pos.row + 1,
            col: pos.col + 1,
        }
    }
}

impl fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveLabel::Start => f.write_str("Start game"),
            MoveLabel::Placed { row, col } => write!(f, "{}, {}", row, col),
        }
    }
}

/// One immutable board state plus the move that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    board: Board,
    label: MoveLabel,
}

impl Snapshot {
    pub fn new(board: Board, label: MoveLabel) -> Self {
        Self { board, label }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn label(&self) -> MoveLabel {
        self.label
    }
}

/// Ordered snapshots; index 0 is always the empty starting board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// History holding only the empty board of the given side
    pub fn new(side: usize) -> Self {
        let mut snapshots = Vec::with_capacity(side * side + 1);
        snapshots.push(Snapshot::new(Board::with_side(side), MoveLabel::Start));
        Self { snapshots }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the starting snapshot is never removed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[inline]
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    pub fn last(&self) -> &Snapshot {
        // index 0 is never truncated away
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    /// Drop every snapshot after `step`, then append `snapshot`.
    ///
    /// Returns the index of the appended snapshot.
    pub fn branch_from(&mut self, step: usize, snapshot: Snapshot) -> usize {
        self.snapshots.truncate(step + 1);
        self.snapshots.push(snapshot);
        self.snapshots.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn placed(history: &History, idx: usize, cell: Cell) -> Snapshot {
        let board = history.last().board().with_mark(idx, cell).unwrap();
        Snapshot::new(board, MoveLabel::for_index(idx, 5))
    }

    #[test]
    fn test_new_history() {
        let history = History::new(5);
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());

        let start = history.get(0).unwrap();
        assert_eq!(start.label(), MoveLabel::Start);
        assert!(start.board().is_board_empty());
        assert_eq!(start.board().len(), 25);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MoveLabel::Start.to_string(), "Start game");
        assert_eq!(MoveLabel::for_index(0, 5).to_string(), "1, 1");
        assert_eq!(MoveLabel::for_index(7, 5).to_string(), "2, 3");
        assert_eq!(MoveLabel::for_index(24, 5).to_string(), "5, 5");
        assert_eq!(MoveLabel::for_index(5, 3).to_string(), "2, 3");
    }

    #[test]
    fn test_branch_from_end_appends() {
        let mut history = History::new(5);
        let s1 = placed(&history, 0, Cell::X);
        assert_eq!(history.branch_from(0, s1), 1);
        let s2 = placed(&history, 1, Cell::O);
        assert_eq!(history.branch_from(1, s2), 2);
        assert_eq!(history.len(), 3);
        assert_eq!(history.last().board().mark_count(), 2);
    }

    #[test]
    fn test_branch_from_middle_truncates() {
        let mut history = History::new(5);
        for (step, idx) in [0usize, 1, 2].into_iter().enumerate() {
            let cell = if step % 2 == 0 { Cell::X } else { Cell::O };
            let snap = placed(&history, idx, cell);
            history.branch_from(step, snap);
        }
        assert_eq!(history.len(), 4);

        // Replay from step 1 with a different second move
        let board = history.get(1).unwrap().board().with_mark(9, Cell::O).unwrap();
        let step = history.branch_from(1, Snapshot::new(board, MoveLabel::for_index(9, 5)));

        assert_eq!(step, 2);
        assert_eq!(history.len(), 3);
        assert_eq!(history.last().label().to_string(), "2, 5");
        assert!(history.last().board().is_empty(1));
    }

    #[test]
    fn test_iter_reversible() {
        let mut history = History::new(3);
        let s1 = placed(&history, 0, Cell::X);
        history.branch_from(0, s1);
        let labels: Vec<_> = history.iter().rev().map(|s| s.label()).collect();
        assert_eq!(labels[1], MoveLabel::Start);
    }
}
