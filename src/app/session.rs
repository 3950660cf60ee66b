use crate::model;
use eframe::egui;

use super::interaction::{Context, Interaction, Outcome, PointerEvent, Request};
use super::render::PLAYER_RADIUS;
use super::scene::{self, Frame, SceneState};

fn context(
    play: &model::Play,
    selected: Option<model::PlayerId>,
    draw_mode: bool,
) -> Context<'_> {
    Context {
        players: &play.players,
        selected,
        draw_mode,
        radius: PLAYER_RADIUS,
    }
}

/// All state of one editing session. Every mutating method returns whether
/// anything visible changed; the caller recomposes the frame when it did.
#[derive(Clone, Debug, Default)]
pub(super) struct Session {
    pub play: model::Play,
    pub sport: model::Sport,
    pub selected: Option<model::PlayerId>,
    pub draw_mode: bool,
    pub interaction: Interaction,
}

impl Session {
    pub fn new(sport: model::Sport) -> Self {
        Self {
            sport,
            ..Default::default()
        }
    }

    pub fn compose(&self) -> Frame {
        scene::compose(&SceneState {
            sport: self.sport,
            play: &self.play,
            selected: self.selected,
            hovered: self.interaction.hover_target,
            draw_mode: self.draw_mode,
            in_progress: &self.interaction.in_progress,
        })
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let cx = context(&self.play, self.selected, self.draw_mode);
        let outcome = self.interaction.handle(event, cx);
        self.apply(outcome)
    }

    fn apply(&mut self, outcome: Outcome) -> bool {
        let mut changed = outcome.changed;
        for request in outcome.requests {
            changed |= match request {
                Request::MovePlayer { id, to } => self.play.move_player(id, to),
                Request::UpsertRoute(route) => {
                    let player_id = route.player_id;
                    let points = route.points.len();
                    let stored = self.play.upsert_route(route);
                    if stored {
                        tracing::info!(player = player_id, points, "route saved");
                    }
                    stored
                }
                Request::Select(id) => self.select(id),
            };
        }
        changed
    }

    /// Stale ids are ignored so the selection always names a live player.
    fn select(&mut self, id: Option<model::PlayerId>) -> bool {
        if id.is_some_and(|id| !self.play.contains_player(id)) || id == self.selected {
            return false;
        }
        tracing::debug!(?id, "selection changed");
        self.selected = id;
        true
    }

    pub fn hovered(&self) -> Option<model::PlayerId> {
        self.interaction.hover_target
    }

    pub fn in_progress(&self) -> &[egui::Pos2] {
        &self.interaction.in_progress
    }

    pub fn can_finish_route(&self) -> bool {
        self.interaction
            .can_finish_route(context(&self.play, self.selected, self.draw_mode))
    }

    pub fn can_toggle_draw_mode(&self) -> bool {
        self.selected.is_some()
    }

    pub fn finish_route(&mut self) -> bool {
        let cx = context(&self.play, self.selected, self.draw_mode);
        let outcome = self.interaction.finish_route(cx);
        self.apply(outcome)
    }

    pub fn toggle_draw_mode(&mut self) -> bool {
        if !self.can_toggle_draw_mode() {
            return false;
        }
        self.draw_mode = !self.draw_mode;
        tracing::debug!(draw_mode = self.draw_mode, "draw mode toggled");
        true
    }

    pub fn add_player(&mut self, team: model::Team) -> model::PlayerId {
        let id = self.play.add_player(team);
        tracing::debug!(player = id, team = team.label(), "player added");
        id
    }

    pub fn remove_player(&mut self, id: model::PlayerId) -> bool {
        if !self.play.remove_player(id) {
            return false;
        }
        let was_selected = self.selected == Some(id);
        if was_selected {
            self.selected = None;
        }
        self.interaction.forget_player(id, was_selected);
        tracing::debug!(player = id, "player removed");
        true
    }

    pub fn remove_selected(&mut self) -> bool {
        match self.selected {
            Some(id) => self.remove_player(id),
            None => false,
        }
    }

    pub fn clear_all(&mut self) -> bool {
        let changed = !self.play.is_empty()
            || self.selected.is_some()
            || self.draw_mode
            || self.interaction != Interaction::default();
        self.play.clear();
        self.selected = None;
        self.draw_mode = false;
        self.interaction.reset();
        tracing::info!("play cleared");
        changed
    }

    pub fn set_sport(&mut self, sport: model::Sport) -> bool {
        if self.sport == sport {
            return false;
        }
        self.sport = sport;
        true
    }
}
