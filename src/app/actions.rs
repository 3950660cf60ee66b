use crate::model;

use super::PlayEditorApp;
use super::settings;

impl PlayEditorApp {
    /// Schedules a recomposition of the scene when `changed` is set.
    pub(super) fn notify(&mut self, changed: bool) {
        if changed {
            self.needs_compose = true;
        }
    }

    pub(super) fn recompose_if_needed(&mut self) {
        if self.needs_compose {
            self.scene = self.session.compose();
            self.needs_compose = false;
        }
    }

    pub(super) fn add_player(&mut self, team: model::Team) {
        self.session.add_player(team);
        self.status = Some(format!("Added {} player", team.label().to_lowercase()));
        self.notify(true);
    }

    pub(super) fn remove_player(&mut self, id: model::PlayerId) {
        let changed = self.session.remove_player(id);
        if changed {
            self.status = Some("Player removed".to_string());
        }
        self.notify(changed);
    }

    pub(super) fn remove_selected(&mut self) {
        if let Some(id) = self.session.selected {
            self.remove_player(id);
        }
    }

    pub(super) fn toggle_draw_mode(&mut self) {
        let changed = self.session.toggle_draw_mode();
        self.notify(changed);
    }

    pub(super) fn finish_route(&mut self) {
        let changed = self.session.finish_route();
        if changed {
            self.status = Some("Route saved".to_string());
        }
        self.notify(changed);
    }

    pub(super) fn clear_all(&mut self) {
        let changed = self.session.clear_all();
        self.status = Some("Cleared all players and routes".to_string());
        self.notify(changed);
    }

    pub(super) fn set_sport(&mut self, sport: model::Sport) {
        if self.session.set_sport(sport) {
            self.notify(true);
            self.persist_settings();
        }
    }

    pub(super) fn settings_snapshot(&self) -> settings::AppSettings {
        settings::AppSettings {
            sport: self.session.sport,
            show_hints: self.show_hints,
            show_player_list: self.show_player_list,
        }
    }

    pub(super) fn persist_settings(&mut self) {
        let snapshot = self.settings_snapshot();
        if let Err(err) = settings::save_settings(&self.settings_path, &snapshot) {
            tracing::warn!(path = %self.settings_path, %err, "could not save settings");
            self.status = Some(format!("Settings not saved: {err}"));
        }
    }
}
