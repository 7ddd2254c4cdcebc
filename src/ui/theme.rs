//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(46, 49, 56);
pub const CELL_BG: Color32 = Color32::from_rgb(236, 232, 222);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 64, 56);
pub const COORD_LABEL: Color32 = Color32::from_rgb(150, 155, 165);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(205, 70, 60);
pub const O_MARK: Color32 = Color32::from_rgb(50, 110, 190);

// Winning line
pub const WIN_CELL_BG: Color32 = Color32::from_rgb(170, 225, 160);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_PLAYING: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_DRAW: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const MARK_RATIO: f32 = 0.32;
pub const MARK_WIDTH_RATIO: f32 = 0.08;
pub const GRID_LINE_WIDTH: f32 = 2.0;

/// Mark color for a player
pub fn mark_color(cell: crate::Cell) -> Color32 {
    match cell {
        crate::Cell::X => X_MARK,
        crate::Cell::O => O_MARK,
        crate::Cell::Empty => Color32::TRANSPARENT,
    }
}
