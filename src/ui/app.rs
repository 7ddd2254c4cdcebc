//! Main application for the tic-tac-toe GUI
//!
//! Each frame renders from a shared borrow of the controller and collects
//! the user's actions; the actions are applied once rendering is done.

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel};
use tracing::warn;

use super::board_view::BoardView;
use super::theme::*;
use crate::{GameConfig, GameController, Status};

/// Board sides offered in the Game menu
const MENU_SIDES: [usize; 4] = [3, 4, 5, 7];

/// User intent recorded while rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiAction {
    PlayCell(usize),
    Jump(usize),
    StepBack,
    StepForward,
    ToggleOrder,
    NewGame(usize),
    Reset,
}

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    game: GameController,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            game: GameController::new(&GameConfig::default()),
            board_view: BoardView::default(),
        }
    }
}

impl TicTacToeApp {
    /// Create the app and hook repaints to game changes
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        let ctx = cc.egui_ctx.clone();
        app.game.subscribe(move |_| ctx.request_repaint());
        app
    }

    /// Render the top menu bar
    fn render_menu_bar(&self, ctx: &Context, actions: &mut Vec<UiAction>) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for side in MENU_SIDES {
                        if ui.button(format!("New Game ({side}x{side})")).clicked() {
                            actions.push(UiAction::NewGame(side));
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Restart (N)").clicked() {
                        actions.push(UiAction::Reset);
                        ui.close_menu();
                    }
                });

                ui.menu_button("History", |ui| {
                    if ui.button("Back (←)").clicked() {
                        actions.push(UiAction::StepBack);
                        ui.close_menu();
                    }
                    if ui.button("Forward (→)").clicked() {
                        actions.push(UiAction::StepForward);
                        ui.close_menu();
                    }
                    if ui.button("Reverse list (R)").clicked() {
                        actions.push(UiAction::ToggleOrder);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let side = self.game.side();
                    ui.label(format!("{side}x{side} - {side} in a row"));
                });
            });
        });
    }

    /// Render the side panel with status and move list
    fn render_side_panel(&self, ctx: &Context, actions: &mut Vec<UiAction>) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui, actions);
                ui.add_space(10.0);

                self.render_move_list(ui, actions);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render status card
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let status = self.game.status();
            let color = match status {
                Status::Winner(_) => WIN_HIGHLIGHT,
                Status::Draw => STATUS_DRAW,
                Status::Next(player) => mark_color(player),
            };
            ui.label(RichText::new(status.to_string()).size(20.0).strong().color(color));

            if let Status::Next(_) = status {
                ui.add_space(4.0);
                ui.label(RichText::new("Click an empty cell to play").size(11.0).color(STATUS_PLAYING));
            }
        });
    }

    /// Render history navigation buttons
    fn render_actions_card(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                for (text, action) in [
                    ("← Back", UiAction::StepBack),
                    ("Forward →", UiAction::StepForward),
                    ("Reverse list", UiAction::ToggleOrder),
                ] {
                    btn_frame.show(ui, |ui| {
                        let label = egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY));
                        if ui.add(label.sense(egui::Sense::click())).clicked() {
                            actions.push(action);
                        }
                    });
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "Step {} of {}",
                    self.game.step(),
                    self.game.history().len() - 1
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the clickable move list
    fn render_move_list(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            let order = if self.game.is_reverse() { "newest first" } else { "oldest first" };
            ui.label(RichText::new(format!("MOVES ({order})")).size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ScrollArea::vertical().show(ui, |ui| {
                for entry in self.game.move_list() {
                    let current = entry.index == self.game.step();
                    let text = RichText::new(entry.description()).size(13.0);
                    let text = if current { text.strong().color(TEXT_PRIMARY) } else { text.color(TEXT_SECONDARY) };

                    if ui.selectable_label(current, text).clicked() {
                        actions.push(UiAction::Jump(entry.index));
                    }
                }
            });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context, actions: &mut Vec<UiAction>) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self.game.winning_line();

            let clicked = self.board_view.show(
                ui,
                self.game.current_board(),
                self.game.current_player(),
                winning_line.as_deref(),
            );

            if let Some(idx) = clicked {
                actions.push(UiAction::PlayCell(idx));
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&self, ctx: &Context, actions: &mut Vec<UiAction>) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::U) {
                actions.push(UiAction::StepBack);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                actions.push(UiAction::StepForward);
            }
            if i.key_pressed(egui::Key::R) {
                actions.push(UiAction::ToggleOrder);
            }
            if i.key_pressed(egui::Key::N) {
                actions.push(UiAction::Reset);
            }
        });
    }

    /// Apply one recorded action to the game
    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::PlayCell(idx) => {
                if let Err(err) = self.game.apply_move(idx) {
                    warn!(%err, "move rejected");
                }
            }
            UiAction::Jump(step) => {
                if let Err(err) = self.game.jump_to(step) {
                    warn!(%err, "jump rejected");
                }
            }
            UiAction::StepBack => {
                self.game.step_back();
            }
            UiAction::StepForward => {
                self.game.step_forward();
            }
            UiAction::ToggleOrder => self.game.toggle_reverse(),
            UiAction::NewGame(side) => match GameConfig::new(side) {
                Ok(config) => self.game.restart(config),
                Err(err) => warn!(%err, "new game rejected"),
            },
            UiAction::Reset => self.game.reset(),
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        // Render UI (read-only with respect to the game)
        self.handle_input(ctx, &mut actions);
        self.render_menu_bar(ctx, &mut actions);
        self.render_side_panel(ctx, &mut actions);
        self.render_board(ctx, &mut actions);

        for action in actions {
            self.apply(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_actions_drive_game() {
        let mut app = TicTacToeApp::default();
        for action in [UiAction::PlayCell(0), UiAction::PlayCell(0), UiAction::PlayCell(1)] {
            app.apply(action);
        }
        assert_eq!(app.game.step(), 2);

        app.apply(UiAction::StepBack);
        assert_eq!(app.game.step(), 1);
        app.apply(UiAction::Jump(99));
        assert_eq!(app.game.step(), 1);

        app.apply(UiAction::ToggleOrder);
        assert!(app.game.is_reverse());
    }

    #[test]
    fn test_new_game_changes_side() {
        let mut app = TicTacToeApp::default();
        app.apply(UiAction::PlayCell(12));
        app.apply(UiAction::NewGame(3));
        assert_eq!(app.game.side(), 3);
        assert!(app.game.current_board().is_board_empty());

        // Unsupported sides leave the game alone
        app.apply(UiAction::PlayCell(4));
        app.apply(UiAction::NewGame(12));
        assert_eq!(app.game.side(), 3);
        assert_eq!(app.game.current_board().cell(4), Some(Cell::X));
    }
}
