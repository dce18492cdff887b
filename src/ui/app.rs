//! Main application for the Caro GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardFrame, BoardView};
use super::game_state::GameState;
use super::theme::*;
use crate::{EngineError, GameStatus, Player, RuleConfig, WinType};

/// Board sizes offered in the Game menu
const MENU_SIZES: [usize; 3] = [9, 15, 19];

/// Main Caro application
pub struct CaroApp {
    state: GameState,
    board_view: BoardView,
}

impl CaroApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: RuleConfig) -> Result<Self, EngineError> {
        Ok(Self {
            state: GameState::new(config)?,
            board_view: BoardView::default(),
        })
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for size in MENU_SIZES {
                        if ui.button(format!("New Game ({size}x{size})")).clicked() {
                            self.state.new_game(size);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Restart (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.state.game.config();
                    ui.label(format!(
                        "{0}x{0} - explosion win at {1}",
                        config.board_size, config.explosion_win_threshold
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_scores_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                let status = self.state.game.status();
                if status.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, status);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn player_style(player: Player) -> (&'static str, Color32Pair) {
        match player {
            Player::X => ("X", (egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY)),
            Player::O => ("O", (egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35))),
        }
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("CARO").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("locked five explodes").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (name, (accent, text_color)) = Self::player_style(self.state.game.current_turn());

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    name,
                    egui::FontId::proportional(24.0),
                    text_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("PLAYER {name}")).size(18.0).strong().color(TEXT_PRIMARY));
                    let status = if self.state.game.status().is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            let elapsed = self.state.move_timer.elapsed();
            ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            if let Some(last) = self.state.move_timer.last_move_duration {
                ui.label(RichText::new(format!("Last move: {:.1}s", last.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Explosion scores with progress toward the threshold
    fn render_scores_card(&self, ui: &mut egui::Ui) {
        let threshold = self.state.game.config().explosion_win_threshold;
        let scores = self.state.game.scores();

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("EXPLOSIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            for player in [Player::X, Player::O] {
                Self::render_score_row(ui, player, scores.get(player), threshold);
                ui.add_space(6.0);
            }
            ui.label(RichText::new("1 five = 1 pt, combo of 2+ = 3 pts").size(10.0).color(TEXT_MUTED));
        });
    }

    fn render_score_row(ui: &mut egui::Ui, player: Player, score: u32, threshold: u32) {
        let (name, (accent, _)) = Self::player_style(player);
        let near = one_point_from_win(score, threshold);

        ui.horizontal(|ui| {
            ui.label(RichText::new(name).size(16.0).strong().color(accent));
            let progress = (score as f32 / threshold as f32).min(1.0);
            ui.add(egui::ProgressBar::new(progress).desired_width(120.0));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let text = format!("{score}/{threshold}");
                let text = if score >= threshold {
                    RichText::new("WIN!").size(14.0).strong().color(WIN_HIGHLIGHT)
                } else if near {
                    RichText::new(text).size(14.0).strong().color(TIMER_WARNING)
                } else {
                    RichText::new(text).size(14.0).color(TEXT_SECONDARY)
                };
                ui.label(text);
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button(RichText::new("Undo").size(12.0)).clicked() {
                    self.state.undo();
                }
                if ui.button(RichText::new("New Game").size(12.0)).clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, status: GameStatus) {
        let (headline, detail) = match status {
            GameStatus::Won { result, .. } => {
                let how = match result.win_type {
                    WinType::OpenFive => "by open five",
                    WinType::ExplosionScore => "by explosion score",
                    WinType::ExplosionTiebreaker => "on explosions, board full",
                };
                (format!("{} WINS!", result.winner), how)
            }
            GameStatus::Draw => ("DRAW".to_string(), "board full, scores level"),
            GameStatus::InProgress => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.reset();
                    }
                });
            });
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
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let game = &self.state.game;
            let winning_line = match game.status() {
                GameStatus::Won { winning_line, .. } => winning_line,
                _ => None,
            };
            let frame = BoardFrame {
                board: game.board(),
                current_turn: game.current_turn(),
                last_move: game.last_move(),
                winning_line,
                explosion: self.state.explosion_flash.as_ref(),
                game_over: game.status().is_over(),
            };

            let clicked = self.board_view.show(ui, &frame);

            if let Some(pos) = clicked {
                if let Err(e) = self.state.try_place_stone(pos) {
                    self.state.message = Some(e.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, restart) = ctx.input(|i| (i.key_pressed(egui::Key::U), i.key_pressed(egui::Key::N)));
        if undo {
            self.state.undo();
        }
        if restart {
            self.state.reset();
        }
    }
}

type Color32Pair = (egui::Color32, egui::Color32);

/// A single explosion would reach the threshold
fn one_point_from_win(score: u32, threshold: u32) -> bool {
    score.saturating_add(1) >= threshold
}

impl eframe::App for CaroApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.tick();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the timer and explosion flash moving
        ctx.request_repaint_after(std::time::Duration::from_millis(
            if self.state.explosion_flash.is_some() { 16 } else { 100 },
        ));
    }
}
