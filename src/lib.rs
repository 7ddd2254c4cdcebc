//! Tic-tac-toe on an N×N board with time travel
//!
//! Generalized tic-tac-toe: a player wins by filling a whole row, column or
//! one of the two main diagonals. The default board is 5x5, so five in a
//! line wins.
//!
//! # Architecture
//!
//! - [`board`]: cells, positions and the board value
//! - [`rules`]: win detection over a fixed, ordered set of lines
//! - [`history`]: linear, truncatable list of board snapshots
//! - [`game`]: controller owning history, cursor and turn, with observers
//! - [`config`]: board and window settings
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Cell, GameController, Status};
//!
//! let mut game = GameController::default();
//! for idx in [0, 5, 1, 6, 2, 7, 3, 8, 4] {
//!     game.apply_move(idx).unwrap();
//! }
//! assert_eq!(game.status(), Status::Winner(Cell::X));
//!
//! // Travel back and play a different line
//! game.jump_to(4).unwrap();
//! game.apply_move(24).unwrap();
//! assert_eq!(game.history().len(), 6);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, BOARD_SIDE};
pub use config::{GameConfig, WindowConfig};
pub use error::GameError;
pub use game::{GameController, GameEvent, MoveEntry, Status};
pub use history::{History, MoveLabel, Snapshot};
pub use rules::{check_winner, Win};
