//! Game and window configuration

use tracing::debug;

use crate::board::BOARD_SIDE;
use crate::error::GameError;

/// Smallest supported board side
pub const MIN_SIDE: usize = 3;
/// Largest supported board side
pub const MAX_SIDE: usize = 9;

/// Board configuration for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    side: usize,
}

impl GameConfig {
    /// Config for a `side x side` board; a line of `side` marks wins.
    pub fn new(side: usize) -> Result<Self, GameError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(GameError::UnsupportedSide {
                side,
                min: MIN_SIDE,
                max: MAX_SIDE,
            });
        }
        debug!(side, "game config");
        Ok(Self { side })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cells(&self) -> usize {
        self.side * self.side
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { side: BOARD_SIDE }
    }
}

/// Native window settings
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tic-Tac-Toe".to_string(),
            inner_size: [900.0, 640.0],
            min_inner_size: [640.0, 480.0],
        }
    }
}

impl WindowConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.inner_size)
                .with_min_inner_size(self.min_inner_size)
                .with_title(self.title.clone()),
            ..Default::default()
        }
    }
}
