//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, Vec2};

use super::board_view::{BoardFrame, BoardView};
use super::game_state::{GameMode, GameOutcome, GameState};
use super::theme::*;
use crate::config::GameConfig;
use crate::Stone;

/// Which top-level screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    MainMenu,
    Game,
}

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    screen: Screen,
    show_settings: bool,
}

impl GomokuApp {
    /// Create the app on the main menu. `config` must already be validated.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(GameMode::default(), config),
            board_view: BoardView::default(),
            screen: Screen::MainMenu,
            show_settings: false,
        }
    }

    /// Switch mode, clear the board, and show the game screen
    fn start(&mut self, mode: GameMode) {
        self.state.set_mode(mode);
        self.screen = Screen::Game;
        self.show_settings = false;
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// One button per mode; returns the chosen one
    fn mode_buttons(ui: &mut egui::Ui, width: f32) -> Option<GameMode> {
        let mut chosen = None;
        for mode in GameMode::menu() {
            let button = egui::Button::new(RichText::new(mode.label()).size(18.0))
                .min_size(Vec2::new(width, 44.0));
            if ui.add(button).clicked() {
                chosen = Some(mode);
            }
            ui.add_space(8.0);
        }
        chosen
    }

    fn render_main_menu(&mut self, ctx: &Context) {
        let mut chosen = None;
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.2);
                ui.label(RichText::new("GOMOKU").size(48.0).strong().color(TEXT_PRIMARY));
                ui.label(
                    RichText::new("Five in a row")
                        .size(14.0)
                        .color(TEXT_MUTED),
                );
                ui.add_space(32.0);
                chosen = Self::mode_buttons(ui, 240.0);
            });
        });
        if let Some(mode) = chosen {
            self.start(mode);
        }
    }

    /// Mode switcher shown over the game screen
    fn render_settings(&mut self, ctx: &Context) {
        let mut chosen = None;
        let mut open = self.show_settings;
        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RichText::new("Switching mode starts a new game").color(TEXT_SECONDARY));
                ui.add_space(8.0);
                chosen = Self::mode_buttons(ui, 200.0);
            });
        self.show_settings = open;
        if let Some(mode) = chosen {
            self.start(mode);
        }
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new(self.state.mode.label()).size(12.0).color(TEXT_MUTED));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                if let GameMode::VsAi { .. } = self.state.mode {
                    self.render_ai_card(ui);
                    ui.add_space(10.0);
                }

                self.render_actions_card(ui);

                if let Some(outcome) = self.state.outcome.clone() {
                    ui.add_space(10.0);
                    self.render_outcome_card(ui, &outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            let (fill, text) = match turn {
                Stone::Black => (BLACK_STONE, TEXT_PRIMARY),
                _ => (WHITE_STONE, BLACK_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    turn.symbol(),
                    egui::FontId::proportional(16.0),
                    text,
                );
                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(turn.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    let (status, color) = if self.state.is_game_over() {
                        ("Game over", TEXT_MUTED)
                    } else if self.state.is_ai_thinking() {
                        ("AI thinking...", STATUS_THINKING)
                    } else {
                        ("To move", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Difficulty, live thinking time, and how the last AI move was found
    fn render_ai_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.label(
                RichText::new(format!("Difficulty: {}", self.state.config().difficulty))
                    .size(12.0)
                    .color(TEXT_PRIMARY),
            );

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("Thinking {:.1}s", elapsed.as_secs_f32()))
                        .size(14.0)
                        .color(STATUS_THINKING),
                );
            }

            if let Some(result) = &self.state.last_ai_result {
                ui.add_space(4.0);
                if let Some(pos) = result.best_move {
                    ui.label(RichText::new(format!("Played {}", pos)).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
                ui.label(
                    RichText::new(format!(
                        "{:?} | score {} | {} nodes | {}ms",
                        result.search_type, result.score, result.nodes, result.time_ms
                    ))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.button("New Game (N)").clicked() {
                    self.state.reset();
                }
                if ui.button("Restart").clicked() {
                    self.state.reset();
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Settings").clicked() {
                    self.show_settings = true;
                }
                if ui.button("Main Menu (Esc)").clicked() {
                    self.screen = Screen::MainMenu;
                }
            });
        });
    }

    /// Winner or draw banner; clicking it starts a new game
    fn render_outcome_card(&mut self, ui: &mut egui::Ui, outcome: &GameOutcome) {
        let (title, detail, color) = match outcome {
            GameOutcome::Win { winner, line } => (
                format!("{} WINS!", winner.name().to_uppercase()),
                format!("{} in a row", line.len()),
                STATUS_WIN,
            ),
            GameOutcome::Draw => ("DRAW".to_string(), "Board is full".to_string(), STATUS_DRAW),
        };

        let response = Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(title).size(20.0).strong().color(color));
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(RichText::new("Click for a new game").size(10.0).color(TEXT_MUTED));
                });
            })
            .response
            .interact(egui::Sense::click());

        if response.clicked() {
            self.state.reset();
        }
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let frame = BoardFrame {
                board: &self.state.board,
                current_turn: self.state.current_turn,
                last_move: self.state.last_move,
                winning_line: self.state.winning_line(),
                interactive: !self.state.is_game_over()
                    && !self.show_settings
                    && self.state.is_human_turn(),
            };
            let clicked = self.board_view.show(ui, &frame);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if escape {
            if self.show_settings {
                self.show_settings = false;
            } else {
                self.screen = Screen::MainMenu;
            }
        }

        if new_game && self.screen == Screen::Game {
            self.state.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        if self.screen == Screen::MainMenu {
            self.render_main_menu(ctx);
            return;
        }

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_game_over() {
            self.state.start_ai_thinking();
        }

        self.render_side_panel(ctx);
        self.render_board(ctx);
        if self.show_settings {
            self.render_settings(ctx);
        }

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
