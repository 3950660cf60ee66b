use crate::model;
use eframe::egui;

use super::geometry::hit_test;

/// Pointer input in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum PointerEvent {
    Down(egui::Pos2),
    Move(egui::Pos2),
    Up,
    Leave,
    Click(egui::Pos2),
}

/// A mutation the interaction asks the session to apply to the play.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum Request {
    MovePlayer {
        id: model::PlayerId,
        to: egui::Pos2,
    },
    UpsertRoute(model::Route),
    Select(Option<model::PlayerId>),
}

/// Read-only view of the session state a transition depends on.
#[derive(Clone, Copy)]
pub(super) struct Context<'a> {
    pub players: &'a [model::Player],
    pub selected: Option<model::PlayerId>,
    pub draw_mode: bool,
    pub radius: f32,
}

impl Context<'_> {
    fn hit(&self, pos: egui::Pos2) -> Option<model::PlayerId> {
        hit_test(pos, self.players, self.radius).map(|p| p.id)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(super) struct Outcome {
    /// Transient state changed and the frame must be recomposed.
    pub changed: bool,
    pub requests: Vec<Request>,
}

impl Outcome {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(changed: bool) -> Self {
        Self {
            changed,
            requests: Vec::new(),
        }
    }

    fn request(mut self, request: Request) -> Self {
        self.requests.push(request);
        self
    }
}

/// Transient editing state: what is dragged, what is hovered and the
/// waypoints of the route being drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub(super) struct Interaction {
    pub drag_target: Option<model::PlayerId>,
    pub hover_target: Option<model::PlayerId>,
    pub in_progress: Vec<egui::Pos2>,
}

impl Interaction {
    pub fn handle(&mut self, event: PointerEvent, cx: Context<'_>) -> Outcome {
        match event {
            PointerEvent::Down(pos) => self.pointer_down(pos, cx),
            PointerEvent::Move(pos) => self.pointer_move(pos, cx),
            PointerEvent::Up | PointerEvent::Leave => {
                Outcome::changed(self.drag_target.take().is_some())
            }
            PointerEvent::Click(pos) if cx.draw_mode => self.click_drawing(pos, cx),
            PointerEvent::Click(pos) => self.click_selecting(pos, cx),
        }
    }

    fn pointer_down(&mut self, pos: egui::Pos2, cx: Context<'_>) -> Outcome {
        if cx.draw_mode {
            return Outcome::unchanged();
        }
        match cx.hit(pos) {
            Some(id) => {
                tracing::debug!(player = id, "drag started");
                self.drag_target = Some(id);
                Outcome::changed(true)
            }
            None => Outcome::unchanged(),
        }
    }

    fn pointer_move(&mut self, pos: egui::Pos2, cx: Context<'_>) -> Outcome {
        let hovered = cx.hit(pos);
        let outcome = Outcome::changed(hovered != self.hover_target);
        self.hover_target = hovered;
        match self.drag_target {
            Some(id) => outcome.request(Request::MovePlayer { id, to: pos }),
            None => outcome,
        }
    }

    fn click_selecting(&mut self, pos: egui::Pos2, cx: Context<'_>) -> Outcome {
        let Some(id) = cx.hit(pos) else {
            return Outcome::unchanged();
        };
        let next = if cx.selected == Some(id) { None } else { Some(id) };
        Outcome::unchanged().request(Request::Select(next))
    }

    fn click_drawing(&mut self, pos: egui::Pos2, cx: Context<'_>) -> Outcome {
        match (cx.hit(pos), cx.selected) {
            (Some(id), selected) if selected != Some(id) => {
                let mut outcome = Outcome::changed(!self.in_progress.is_empty());
                let points = std::mem::take(&mut self.in_progress);
                if let Some(previous) = selected {
                    if !points.is_empty() {
                        tracing::debug!(player = previous, "route committed by switching player");
                        outcome = outcome.request(Request::UpsertRoute(model::Route {
                            player_id: previous,
                            points,
                        }));
                    }
                }
                outcome.request(Request::Select(Some(id)))
            }
            // Clicking the player being drawn for leaves the route untouched.
            (Some(_), _) => Outcome::unchanged(),
            (None, Some(_)) => {
                self.in_progress.push(pos);
                Outcome::changed(true)
            }
            (None, None) => Outcome::unchanged(),
        }
    }

    pub fn can_finish_route(&self, cx: Context<'_>) -> bool {
        cx.draw_mode && cx.selected.is_some() && !self.in_progress.is_empty()
    }

    /// Commits the in-progress route for the selected player and disarms
    /// drawing by clearing the selection.
    pub fn finish_route(&mut self, cx: Context<'_>) -> Outcome {
        if !self.can_finish_route(cx) {
            return Outcome::unchanged();
        }
        let Some(player_id) = cx.selected else {
            return Outcome::unchanged();
        };
        let points = std::mem::take(&mut self.in_progress);
        Outcome::changed(true)
            .request(Request::UpsertRoute(model::Route { player_id, points }))
            .request(Request::Select(None))
    }

    /// Drops references to a removed player.
    pub fn forget_player(&mut self, id: model::PlayerId, was_selected: bool) -> bool {
        let mut changed = false;
        if self.drag_target == Some(id) {
            self.drag_target = None;
            changed = true;
        }
        if self.hover_target == Some(id) {
            self.hover_target = None;
            changed = true;
        }
        if was_selected && !self.in_progress.is_empty() {
            self.in_progress.clear();
            changed = true;
        }
        changed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
