use crate::model;
use eframe::egui;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::PlayEditorApp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CommandId {
    AddOffense,
    AddDefense,
    ToggleDrawMode,
    FinishRoute,
    RemoveSelected,
    ClearAll,
    SportFootball,
    SportBasketball,
    SportSoccer,
    ToggleHints,
    TogglePlayerList,
    ShowHelp,
}

pub(super) struct CommandSpec {
    pub id: CommandId,
    pub name: &'static str,
    pub search: &'static str,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec { id: CommandId::AddOffense, name: "Players: Add offense", search: "add offense player o" },
    CommandSpec { id: CommandId::AddDefense, name: "Players: Add defense", search: "add defense player x" },
    CommandSpec { id: CommandId::RemoveSelected, name: "Players: Remove selected", search: "remove selected player delete backspace" },
    CommandSpec { id: CommandId::ToggleDrawMode, name: "Routes: Toggle draw mode", search: "draw route mode toggle d" },
    CommandSpec { id: CommandId::FinishRoute, name: "Routes: Finish route", search: "finish route done enter" },
    CommandSpec { id: CommandId::ClearAll, name: "Play: Clear all", search: "clear all reset remove everything" },
    CommandSpec { id: CommandId::SportFootball, name: "Sport: Football", search: "sport football field 1" },
    CommandSpec { id: CommandId::SportBasketball, name: "Sport: Basketball", search: "sport basketball court 2" },
    CommandSpec { id: CommandId::SportSoccer, name: "Sport: Soccer", search: "sport soccer pitch 3" },
    CommandSpec { id: CommandId::ToggleHints, name: "View: Toggle hints", search: "view hints help text toggle" },
    CommandSpec { id: CommandId::TogglePlayerList, name: "View: Toggle player list", search: "view player list toggle" },
    CommandSpec { id: CommandId::ShowHelp, name: "Help: Keyboard shortcuts", search: "help shortcuts keyboard f1" },
];

#[derive(Default)]
pub(super) struct CommandPalette {
    pub open: bool,
    pub query: String,
    pub selected: usize,
    request_focus: bool,
}

#[derive(Clone, Copy)]
pub(super) struct CommandContext {
    pub has_selection: bool,
    pub can_finish_route: bool,
}

impl CommandPalette {
    pub fn open(&mut self, query: impl Into<String>) {
        self.open = true;
        self.query = query.into();
        self.selected = 0;
        self.request_focus = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.selected = 0;
        self.request_focus = false;
    }

    pub(super) fn is_enabled(cx: CommandContext, id: CommandId) -> bool {
        match id {
            CommandId::ToggleDrawMode | CommandId::RemoveSelected => cx.has_selection,
            CommandId::FinishRoute => cx.can_finish_route,
            _ => true,
        }
    }

    pub(super) fn execute(app: &mut PlayEditorApp, ctx: &egui::Context, id: CommandId) {
        tracing::debug!(?id, "command");
        match id {
            CommandId::AddOffense => app.add_player(model::Team::Offense),
            CommandId::AddDefense => app.add_player(model::Team::Defense),
            CommandId::ToggleDrawMode => app.toggle_draw_mode(),
            CommandId::FinishRoute => app.finish_route(),
            CommandId::RemoveSelected => app.remove_selected(),
            CommandId::ClearAll => app.clear_all(),
            CommandId::SportFootball => app.set_sport(model::Sport::Football),
            CommandId::SportBasketball => app.set_sport(model::Sport::Basketball),
            CommandId::SportSoccer => app.set_sport(model::Sport::Soccer),
            CommandId::ToggleHints => {
                app.show_hints = !app.show_hints;
                app.persist_settings();
            }
            CommandId::TogglePlayerList => {
                app.show_player_list = !app.show_player_list;
                app.persist_settings();
            }
            CommandId::ShowHelp => app.show_help = true,
        }
        ctx.request_repaint();
    }

    fn filtered(&self) -> Vec<(&'static CommandSpec, i64)> {
        let matcher = SkimMatcherV2::default();
        let q = self.query.trim();
        if q.is_empty() {
            return COMMANDS.iter().map(|c| (c, 0)).collect();
        }
        let mut out = Vec::new();
        for c in COMMANDS {
            if let Some(score) = matcher.fuzzy_match(c.search, q) {
                out.push((c, score));
            }
        }
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name.cmp(b.0.name)));
        out
    }

    pub fn ui(&mut self, ctx: &egui::Context, cx: CommandContext) -> Option<CommandId> {
        if !self.open {
            return None;
        }
        let matches = self.filtered();
        if self.selected >= matches.len() {
            self.selected = matches.len().saturating_sub(1);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.close();
            return None;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) && !matches.is_empty() {
            self.selected = (self.selected + 1).min(matches.len() - 1);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) && !matches.is_empty() {
            self.selected = self.selected.saturating_sub(1);
        }
        let mut run_selected = ctx.input(|i| i.key_pressed(egui::Key::Enter));

        let screen = ctx.content_rect();
        let width = 420.0;
        let height = 280.0;
        let pos = egui::pos2(screen.center().x - width * 0.5, screen.top() + 48.0);
        egui::Area::new(egui::Id::new("command_palette"))
            .fixed_pos(pos)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let frame = egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(15, 23, 42, 240))
                    .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(71, 85, 105)))
                    .inner_margin(10.0)
                    .corner_radius(egui::CornerRadius::same(8));
                frame.show(ui, |ui| {
                    ui.set_min_size(egui::vec2(width, height));
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.query)
                            .desired_width(f32::INFINITY)
                            .hint_text("Search commands"),
                    );
                    if self.request_focus {
                        resp.request_focus();
                        self.request_focus = false;
                    }
                    ui.separator();
                    egui::ScrollArea::vertical().max_height(height - 64.0).show(ui, |ui| {
                        for (idx, (spec, _score)) in matches.iter().enumerate() {
                            let enabled = CommandPalette::is_enabled(cx, spec.id);
                            let resp = ui.add_enabled(
                                enabled,
                                egui::Button::new(spec.name).selected(idx == self.selected),
                            );
                            if resp.clicked() {
                                self.selected = idx;
                                run_selected = true;
                            }
                        }
                    });
                });
            });

        if run_selected {
            if let Some((spec, _)) = matches.get(self.selected) {
                if CommandPalette::is_enabled(cx, spec.id) {
                    let cmd = spec.id;
                    self.close();
                    return Some(cmd);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(query: &str) -> CommandPalette {
        CommandPalette {
            query: query.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_query_lists_every_command() {
        assert_eq!(palette("  ").filtered().len(), COMMANDS.len());
    }

    #[test]
    fn fuzzy_query_finds_draw_mode() {
        let matches = palette("draw").filtered();
        assert_eq!(matches.first().map(|(c, _)| c.id), Some(CommandId::ToggleDrawMode));
    }

    #[test]
    fn nonsense_query_matches_nothing() {
        assert!(palette("zzqq").filtered().is_empty());
    }

    #[test]
    fn route_commands_follow_editor_preconditions() {
        let idle = CommandContext {
            has_selection: false,
            can_finish_route: false,
        };
        assert!(!CommandPalette::is_enabled(idle, CommandId::ToggleDrawMode));
        assert!(!CommandPalette::is_enabled(idle, CommandId::FinishRoute));
        assert!(!CommandPalette::is_enabled(idle, CommandId::RemoveSelected));
        assert!(CommandPalette::is_enabled(idle, CommandId::ClearAll));

        let drawing = CommandContext {
            has_selection: true,
            can_finish_route: true,
        };
        assert!(CommandPalette::is_enabled(drawing, CommandId::ToggleDrawMode));
        assert!(CommandPalette::is_enabled(drawing, CommandId::FinishRoute));
    }

    #[test]
    fn close_resets_query() {
        let mut p = palette("sport");
        p.open("sport");
        assert!(p.open);
        p.close();
        assert!(!p.open);
        assert!(p.query.is_empty());
    }
}
