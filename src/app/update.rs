use crate::model;
use eframe::egui;

use super::command_palette::{CommandContext, CommandId, CommandPalette};
use super::help::draw_help_window;
use super::interaction::PointerEvent;
use super::render::{paint_frame, sport_button, team_dot};
use super::PlayEditorApp;

const PANEL_STROKE: egui::Color32 = egui::Color32::from_rgb(71, 85, 105);
const SELECTED_ENTRY: egui::Color32 = egui::Color32::from_rgba_premultiplied(49, 32, 2, 51);

impl eframe::App for PlayEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for cmd in self.shortcut_commands(ctx) {
            if CommandPalette::is_enabled(self.command_context(), cmd) {
                CommandPalette::execute(self, ctx, cmd);
            }
        }

        egui::SidePanel::left("tools")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.heading("Select Sport");
                for sport in model::Sport::ALL {
                    if sport_button(ui, sport, self.session.sport) {
                        self.set_sport(sport);
                    }
                }
                ui.separator();

                ui.heading("Tools");
                ui.label("Add Players");
                if ui.button("Offense").clicked() {
                    self.add_player(model::Team::Offense);
                }
                if ui.button("Defense").clicked() {
                    self.add_player(model::Team::Defense);
                }
                ui.separator();

                ui.label("Draw Routes");
                let draw_label = if self.session.draw_mode {
                    "Drawing..."
                } else {
                    "Draw Route"
                };
                if ui
                    .add_enabled(
                        self.session.can_toggle_draw_mode(),
                        egui::Button::new(draw_label).selected(self.session.draw_mode),
                    )
                    .clicked()
                {
                    self.toggle_draw_mode();
                }
                if self.show_hints {
                    ui.small(if self.session.selected.is_some() {
                        "Click the field to add route points"
                    } else {
                        "Select a player first"
                    });
                }
                ui.separator();

                if ui.button("Clear All").clicked() {
                    self.clear_all();
                }
                ui.separator();

                let mut view_changed = false;
                view_changed |= ui.checkbox(&mut self.show_hints, "Show hints").changed();
                view_changed |= ui
                    .checkbox(&mut self.show_player_list, "Show player list")
                    .changed();
                if view_changed {
                    self.persist_settings();
                }
                if ui.button("Help (F1)").clicked() {
                    self.show_help = true;
                }
            });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} players, {} routes",
                    self.session.play.players.len(),
                    self.session.play.routes.len()
                ));
                if self.session.draw_mode && !self.session.in_progress().is_empty() {
                    ui.separator();
                    ui.label(format!(
                        "{} route points pending",
                        self.session.in_progress().len()
                    ));
                }
                if let Some(player) = self.session.hovered().and_then(|id| self.session.play.player(id)) {
                    ui.separator();
                    ui.label(format!("{} {}", player.team.label(), player.label));
                }
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading("Play Field");
                    if self.show_hints {
                        ui.small(if self.session.draw_mode {
                            "Click on the field to draw route points"
                        } else {
                            "Drag players to position them, click to select"
                        });
                    }
                });
                if self.session.can_finish_route() && ui.button("Finish Route").clicked() {
                    self.finish_route();
                }
            });
            ui.add_space(8.0);
            egui::ScrollArea::both().show(ui, |ui| {
                self.canvas_ui(ui);
                if self.show_player_list {
                    self.player_list_ui(ui);
                }
            });
        });

        let cx = self.command_context();
        if let Some(cmd) = self.command_palette.ui(ctx, cx) {
            CommandPalette::execute(self, ctx, cmd);
        }
        draw_help_window(ctx, &mut self.show_help);
    }
}

impl PlayEditorApp {
    fn command_context(&self) -> CommandContext {
        CommandContext {
            has_selection: self.session.selected.is_some(),
            can_finish_route: self.session.can_finish_route(),
        }
    }

    fn shortcut_commands(&mut self, ctx: &egui::Context) -> Vec<CommandId> {
        let mut commands = Vec::new();
        let skip_shortcuts = ctx.wants_keyboard_input() || self.command_palette.open;
        ctx.input_mut(|i| {
            if !self.command_palette.open
                && i.consume_key(egui::Modifiers::COMMAND | egui::Modifiers::SHIFT, egui::Key::P)
            {
                self.command_palette.open("");
            }
            if skip_shortcuts {
                return;
            }
            let bindings = [
                (egui::Key::F1, CommandId::ShowHelp),
                (egui::Key::O, CommandId::AddOffense),
                (egui::Key::X, CommandId::AddDefense),
                (egui::Key::D, CommandId::ToggleDrawMode),
                (egui::Key::Enter, CommandId::FinishRoute),
                (egui::Key::Delete, CommandId::RemoveSelected),
                (egui::Key::Backspace, CommandId::RemoveSelected),
                (egui::Key::Num1, CommandId::SportFootball),
                (egui::Key::Num2, CommandId::SportBasketball),
                (egui::Key::Num3, CommandId::SportSoccer),
            ];
            for (key, cmd) in bindings {
                if i.consume_key(egui::Modifiers::NONE, key) {
                    commands.push(cmd);
                }
            }
        });
        commands
    }

    /// Translates this frame's pointer input on the field into editor
    /// events, in the order a browser would deliver them.
    fn pointer_events(
        &mut self,
        ctx: &egui::Context,
        response: &egui::Response,
        rect: egui::Rect,
    ) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let (hover_pos, pressed, released, moving) = ctx.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.is_moving(),
            )
        });
        let inside = hover_pos.filter(|p| response.contains_pointer() && rect.contains(*p));
        let Some(screen_pos) = inside else {
            if self.pointer_inside {
                self.pointer_inside = false;
                events.push(PointerEvent::Leave);
            }
            return events;
        };

        let pos = (screen_pos - rect.min).to_pos2();
        if pressed {
            events.push(PointerEvent::Down(pos));
        }
        if moving || !self.pointer_inside {
            events.push(PointerEvent::Move(pos));
        }
        if released {
            events.push(PointerEvent::Up);
        }
        if response.clicked() {
            events.push(PointerEvent::Click(pos));
        }
        self.pointer_inside = true;
        events
    }

    fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let size = egui::vec2(model::FIELD_WIDTH, model::FIELD_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        for event in self.pointer_events(ui.ctx(), &response, rect) {
            let changed = self.session.handle_pointer(event);
            self.notify(changed);
        }
        self.recompose_if_needed();

        let painter = ui.painter_at(rect);
        paint_frame(&painter, rect.min, &self.scene);
        painter.rect_stroke(
            rect,
            8.0,
            egui::Stroke::new(2.0, PANEL_STROKE),
            egui::StrokeKind::Outside,
        );
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }

    fn player_list_ui(&mut self, ui: &mut egui::Ui) {
        if self.session.play.players.is_empty() {
            return;
        }
        ui.add_space(12.0);
        ui.label("Players");
        let mut remove = None;
        ui.horizontal_wrapped(|ui| {
            for player in &self.session.play.players {
                let selected = self.session.selected == Some(player.id);
                let (fill, stroke) = if selected {
                    (SELECTED_ENTRY, egui::Color32::from_rgb(245, 158, 11))
                } else {
                    (ui.visuals().faint_bg_color, PANEL_STROKE)
                };
                egui::Frame::group(ui.style())
                    .fill(fill)
                    .stroke(egui::Stroke::new(1.0, stroke))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            team_dot(ui, player.team);
                            ui.small(format!("{} {}", player.team.label(), player.label));
                            if self.session.play.route_for(player.id).is_some() {
                                ui.small("↗").on_hover_text("Has a route");
                            }
                            if ui.small_button("✕").on_hover_text("Remove player").clicked() {
                                remove = Some(player.id);
                            }
                        });
                    });
            }
        });
        if let Some(id) = remove {
            self.remove_player(id);
        }
    }
}
