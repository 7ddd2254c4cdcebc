//! Board rendering for the tic-tac-toe GUI

use crate::{Board, Cell, Pos};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Side of the board last drawn
    side: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            side: crate::BOARD_SIDE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index if any.
    ///
    /// Clicks on any cell are reported; deciding whether the move counts is
    /// left to the game controller.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Cell,
        winning_line: Option<&[usize]>,
    ) -> Option<usize> {
        let available_size = ui.available_size();
        self.side = board.side();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(2.0 * BOARD_MARGIN + 40.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / self.side as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        // Cells, winning cells highlighted
        for idx in 0..board.len() {
            let fill = match winning_line {
                Some(line) if line.contains(&idx) => WIN_CELL_BG,
                _ => CELL_BG,
            };
            painter.rect_filled(self.cell_rect(idx), CornerRadius::ZERO, fill);
        }

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_marks(&painter, board);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Handle hover preview and click
        let mut clicked = None;

        if let Some(pointer_pos) = response.hover_pos() {
            if let Some(idx) = self.screen_to_board(pointer_pos) {
                let is_valid = crate::rules::is_valid_move(board, idx);
                self.draw_hover_preview(&painter, idx, current_turn, is_valid, board.cell(idx));

                if response.clicked() {
                    clicked = Some(idx);
                }
            }
        }

        clicked
    }

    /// Draw the lines between cells
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = self.side as f32 * self.cell_size;
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);

        for i in 0..=self.side {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment([origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, span)], stroke);

            // Horizontal line
            painter.line_segment([origin + Vec2::new(0.0, offset), origin + Vec2::new(span, offset)], stroke);
        }
    }

    /// Draw 1-based row and column numbers, matching the move list labels
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..self.side {
            let center = i as f32 * self.cell_size + self.cell_size * 0.5 + BOARD_MARGIN;

            // Column numbers above the board
            let pos = Pos2::new(self.board_rect.min.x + center, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, i + 1, font.clone(), COORD_LABEL);

            // Row numbers left of the board
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, self.board_rect.min.y + center);
            painter.text(pos, egui::Align2::CENTER_CENTER, i + 1, font.clone(), COORD_LABEL);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (idx, &cell) in board.cells().iter().enumerate() {
            if cell != Cell::Empty {
                self.draw_mark(painter, idx, cell, mark_color(cell));
            }
        }
    }

    /// Draw a single X or O
    fn draw_mark(&self, painter: &Painter, idx: usize, cell: Cell, color: Color32) {
        let center = self.cell_rect(idx).center();
        let radius = self.cell_size * MARK_RATIO;
        let stroke = Stroke::new(self.cell_size * MARK_WIDTH_RATIO, color);

        match cell {
            Cell::X => {
                let d = Vec2::splat(radius * 0.85);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment([center + Vec2::new(-d.x, d.y), center + Vec2::new(d.x, -d.y)], stroke);
            }
            Cell::O => {
                painter.circle_stroke(center, radius, stroke);
            }
            Cell::Empty => {}
        }
    }

    /// Draw a line through the winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[usize]) {
        if let (Some(&first), Some(&last)) = (line.first(), line.last()) {
            let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
            painter.line_segment([self.cell_rect(first).center(), self.cell_rect(last).center()], stroke);
        }
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, idx: usize, turn: Cell, is_valid: bool, occupant: Option<Cell>) {
        let rect = self.cell_rect(idx).shrink(GRID_LINE_WIDTH);

        if is_valid {
            painter.rect_filled(rect, CornerRadius::ZERO, hover_valid());
            let color = mark_color(turn).gamma_multiply(0.35);
            self.draw_mark(painter, idx, turn, color);
        } else if occupant != Some(Cell::Empty) {
            painter.rect_filled(rect, CornerRadius::ZERO, hover_invalid());
        }
    }

    /// Screen rectangle of a cell
    pub fn cell_rect(&self, idx: usize) -> Rect {
        let pos = Pos::from_index(idx, self.side);
        let min = self.board_rect.min
            + Vec2::splat(BOARD_MARGIN)
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a cell index
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<usize> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if Pos::is_valid(row, col, self.side) {
            Some(Pos::new(row as usize, col as usize).to_index(self.side))
        } else {
            None
        }
    }
}
