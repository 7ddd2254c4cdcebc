//! Game controller: history, cursor and turn tracking
//!
//! The controller is the only writer of game state. Every transition runs to
//! completion, then subscribed observers are told what changed so the
//! presentation layer can redraw. Reads (`status`, `move_list`, ...) are
//! recomputed from the snapshot at the cursor on every call.

use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, Cell};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::history::{History, MoveLabel, Snapshot};
use crate::rules::{self, Win};

/// State change reported to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    MoveApplied { step: usize, index: usize, player: Cell },
    Jumped { step: usize },
    OrderToggled { reversed: bool },
    Reset { side: usize },
}

/// Game status at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Cell),
    Draw,
    Next(Cell),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {}", player),
            Status::Draw => f.write_str("Draw"),
            Status::Next(player) => write!(f, "Next player: {}", player),
        }
    }
}

/// One line of the move list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    pub index: usize,
    pub label: MoveLabel,
}

impl MoveEntry {
    /// "Start game" or "Move #n (row, col)"
    pub fn description(&self) -> String {
        match self.label {
            MoveLabel::Start => self.label.to_string(),
            MoveLabel::Placed { .. } => format!("Move #{} ({})", self.index, self.label),
        }
    }
}

type Listener = Box<dyn FnMut(&GameEvent)>;

/// Owner of the game history and cursor
pub struct GameController {
    config: GameConfig,
    history: History,
    step: usize,
    x_is_next: bool,
    is_reverse: bool,
    listeners: Vec<Listener>,
}

impl GameController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            config: *config,
            history: History::new(config.side()),
            step: 0,
            x_is_next: true,
            is_reverse: false,
            listeners: Vec::new(),
        }
    }

    /// Register an observer called after every state change
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, event: GameEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Place the active player's mark at `index`.
    ///
    /// Occupied cells and moves after a win are ignored without changing
    /// anything. Only an index off the board is an error.
    pub fn apply_move(&mut self, index: usize) -> Result<(), GameError> {
        let current = self.current_board();
        if index >= current.len() {
            return Err(GameError::CellOutOfRange {
                index,
                cells: current.len(),
            });
        }
        if !rules::is_valid_move(current, index) {
            return Ok(());
        }

        let player = self.current_player();
        let board = current.with_mark(index, player)?;
        let label = MoveLabel::for_index(index, board.side());
        let full = board.is_full();
        let win = rules::check_winner(&board);

        self.step = self.history.branch_from(self.step, Snapshot::new(board, label));
        self.x_is_next = !self.x_is_next;
        debug!(step = self.step, index, %player, %label, "move applied");

        match win {
            Some(win) => info!(winner = %win.player, line = ?win.line, "line completed"),
            None if full => info!(step = self.step, "board full, draw"),
            None => {}
        }

        self.notify(GameEvent::MoveApplied {
            step: self.step,
            index,
            player,
        });
        Ok(())
    }

    /// Move the cursor to an existing history step
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.step = step;
        self.x_is_next = step % 2 == 0;
        debug!(step, "jumped");

        self.notify(GameEvent::Jumped { step });
        Ok(())
    }

    /// Jump one step back. Returns whether the cursor moved.
    pub fn step_back(&mut self) -> bool {
        self.step > 0 && self.jump_to(self.step - 1).is_ok()
    }

    /// Jump one step forward. Returns whether the cursor moved.
    pub fn step_forward(&mut self) -> bool {
        self.jump_to(self.step + 1).is_ok()
    }

    /// Flip the move list order
    pub fn toggle_reverse(&mut self) {
        self.is_reverse = !self.is_reverse;
        debug!(reversed = self.is_reverse, "move list order toggled");

        self.notify(GameEvent::OrderToggled {
            reversed: self.is_reverse,
        });
    }

    /// Start over on the same board size
    pub fn reset(&mut self) {
        self.restart(self.config);
    }

    /// Start over with a new configuration. The list order is kept.
    pub fn restart(&mut self, config: GameConfig) {
        self.config = config;
        self.history = History::new(config.side());
        self.step = 0;
        self.x_is_next = true;
        debug!(side = config.side(), "new game");

        self.notify(GameEvent::Reset {
            side: config.side(),
        });
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn side(&self) -> usize {
        self.config.side()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Cursor into the history
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    pub fn is_reverse(&self) -> bool {
        self.is_reverse
    }

    pub fn current_player(&self) -> Cell {
        if self.x_is_next {
            Cell::X
        } else {
            Cell::O
        }
    }

    pub fn current_snapshot(&self) -> &Snapshot {
        // step is kept below history.len() by every transition
        self.history.get(self.step).unwrap_or_else(|| self.history.last())
    }

    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    pub fn winner(&self) -> Option<Win> {
        rules::check_winner(self.current_board())
    }

    /// Cells to highlight, if the displayed board has a winner
    pub fn winning_line(&self) -> Option<Vec<usize>> {
        self.winner().map(|win| win.line)
    }

    pub fn status(&self) -> Status {
        if let Some(win) = self.winner() {
            Status::Winner(win.player)
        } else if self.step == self.current_board().len() {
            Status::Draw
        } else {
            Status::Next(self.current_player())
        }
    }

    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Every history step, reversed when the list order is flipped
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<_> = self
            .history
            .iter()
            .enumerate()
            .map(|(index, snapshot)| MoveEntry {
                index,
                label: snapshot.label(),
            })
            .collect();
        if self.is_reverse {
            entries.reverse();
        }
        entries
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl fmt::Debug for GameController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameController")
            .field("config", &self.config)
            .field("history", &self.history)
            .field("step", &self.step)
            .field("x_is_next", &self.x_is_next)
            .field("is_reverse", &self.is_reverse)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn play(game: &mut GameController, moves: &[usize]) {
        for &idx in moves {
            game.apply_move(idx).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let game = GameController::default();
        assert_eq!(game.step(), 0);
        assert!(game.x_is_next());
        assert!(!game.is_reverse());
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.status_text(), "Next player: X");
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_moves_alternate() {
        let mut game = GameController::default();
        play(&mut game, &[12, 0]);

        assert_eq!(game.step(), 2);
        assert_eq!(game.current_board().cell(12), Some(Cell::X));
        assert_eq!(game.current_board().cell(0), Some(Cell::O));
        assert_eq!(game.status(), Status::Next(Cell::X));
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut game = GameController::default();
        play(&mut game, &[3]);
        let before = game.current_board().clone();

        assert_eq!(game.apply_move(3), Ok(()));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.step(), 1);
        assert!(!game.x_is_next());
        assert_eq!(game.current_board(), &before);
    }

    #[test]
    fn test_move_after_win_ignored() {
        let mut game = GameController::default();
        play(&mut game, &[0, 5, 1, 6, 2, 7, 3, 8, 4]);
        assert_eq!(game.status(), Status::Winner(Cell::X));

        assert_eq!(game.apply_move(24), Ok(()));
        assert_eq!(game.history().len(), 10);
        assert_eq!(game.step(), 9);
        assert!(game.current_board().is_empty(24));
    }

    #[test]
    fn test_out_of_range_cell_rejected() {
        let mut game = GameController::default();
        assert_eq!(
            game.apply_move(25),
            Err(GameError::CellOutOfRange { index: 25, cells: 25 })
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_jump_sets_turn_from_parity() {
        let mut game = GameController::default();
        play(&mut game, &[0, 1, 2, 3]);

        for step in 0..=4 {
            game.jump_to(step).unwrap();
            assert_eq!(game.step(), step);
            assert_eq!(game.x_is_next(), step % 2 == 0);
        }
        // History is untouched by jumping
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = GameController::default();
        play(&mut game, &[0]);
        assert_eq!(
            game.jump_to(2),
            Err(GameError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(game.step(), 1);
    }

    #[test]
    fn test_move_after_jump_truncates() {
        let mut game = GameController::default();
        play(&mut game, &[0, 1, 2, 3, 4]);
        game.jump_to(2).unwrap();

        game.apply_move(20).unwrap();
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.step(), 3);
        assert_eq!(game.current_board().cell(20), Some(Cell::X));
        assert!(game.current_board().is_empty(2));
        assert!(game.current_board().is_empty(3));
    }

    #[test]
    fn test_move_from_past_with_winner_later() {
        let mut game = GameController::default();
        play(&mut game, &[0, 5, 1, 6, 2, 7, 3, 8, 4]);
        game.jump_to(8).unwrap();

        // Step 8 has no winner yet, so X can play elsewhere
        game.apply_move(24).unwrap();
        assert_eq!(game.history().len(), 10);
        assert_eq!(game.status(), Status::Next(Cell::O));
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut game = GameController::default();
        assert!(!game.step_back());
        play(&mut game, &[0, 1]);

        assert!(game.step_back());
        assert_eq!(game.step(), 1);
        assert!(game.step_forward());
        assert_eq!(game.step(), 2);
        assert!(!game.step_forward());
    }

    #[test]
    fn test_toggle_reverse_only_changes_order() {
        let mut game = GameController::default();
        play(&mut game, &[0, 6]);

        let forward: Vec<_> = game.move_list().iter().map(|e| e.index).collect();
        assert_eq!(forward, vec![0, 1, 2]);

        game.toggle_reverse();
        assert!(game.is_reverse());
        let reversed: Vec<_> = game.move_list().iter().map(|e| e.index).collect();
        assert_eq!(reversed, vec![2, 1, 0]);
        assert_eq!(game.step(), 2);
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_move_descriptions() {
        let mut game = GameController::default();
        play(&mut game, &[0, 7]);

        let descriptions: Vec<_> = game.move_list().iter().map(|e| e.description()).collect();
        assert_eq!(
            descriptions,
            vec!["Start game", "Move #1 (1, 1)", "Move #2 (2, 3)"]
        );
    }

    #[test]
    fn test_three_by_three_draw() {
        let mut game = GameController::new(&GameConfig::new(3).unwrap());
        // X O X
        // X O O
        // O X X
        play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), Status::Draw);
    }

    #[test]
    fn test_restart_keeps_order_and_listeners() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut game = GameController::default();
        game.subscribe(move |event| sink.borrow_mut().push(*event));
        play(&mut game, &[0]);
        game.toggle_reverse();
        game.restart(GameConfig::new(3).unwrap());

        assert_eq!(game.side(), 3);
        assert_eq!(game.current_board().len(), 9);
        assert_eq!(game.history().len(), 1);
        assert!(game.x_is_next());
        assert!(game.is_reverse());
        assert_eq!(events.borrow().last(), Some(&GameEvent::Reset { side: 3 }));
    }

    #[test]
    fn test_observers_see_transitions_only() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut game = GameController::default();
        game.subscribe(move |event| sink.borrow_mut().push(*event));

        play(&mut game, &[4]);
        game.apply_move(4).unwrap(); // ignored
        let _ = game.jump_to(9); // rejected
        game.jump_to(0).unwrap();
        game.toggle_reverse();

        assert_eq!(
            *events.borrow(),
            vec![
                GameEvent::MoveApplied {
                    step: 1,
                    index: 4,
                    player: Cell::X
                },
                GameEvent::Jumped { step: 0 },
                GameEvent::OrderToggled { reversed: true },
            ]
        );
    }
}
