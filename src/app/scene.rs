use crate::model;
use eframe::egui;

use super::field::draw_field;
use super::render::{draw_in_progress_route, draw_players, draw_routes};

/// One drawing call on the field surface, in surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum Primitive {
    FillRect {
        rect: egui::Rect,
        color: egui::Color32,
    },
    StrokeRect {
        rect: egui::Rect,
        stroke: egui::Stroke,
    },
    Line {
        points: [egui::Pos2; 2],
        stroke: egui::Stroke,
    },
    Circle {
        center: egui::Pos2,
        radius: f32,
        fill: egui::Color32,
        stroke: egui::Stroke,
    },
    Arc {
        center: egui::Pos2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        stroke: egui::Stroke,
    },
    Dashes {
        segments: Vec<[egui::Pos2; 2]>,
        stroke: egui::Stroke,
    },
    Triangle {
        points: [egui::Pos2; 3],
        fill: egui::Color32,
    },
    Text {
        pos: egui::Pos2,
        text: String,
        size: f32,
        color: egui::Color32,
    },
}

/// Recording surface with a painter-like API.
#[derive(Clone, Debug, Default, PartialEq)]
pub(super) struct Canvas {
    pub primitives: Vec<Primitive>,
}

impl Canvas {
    pub fn rect_filled(&mut self, rect: egui::Rect, color: egui::Color32) {
        self.primitives.push(Primitive::FillRect { rect, color });
    }

    pub fn rect_stroke(&mut self, rect: egui::Rect, stroke: egui::Stroke) {
        self.primitives.push(Primitive::StrokeRect { rect, stroke });
    }

    pub fn line_segment(&mut self, points: [egui::Pos2; 2], stroke: egui::Stroke) {
        self.primitives.push(Primitive::Line { points, stroke });
    }

    pub fn circle(
        &mut self,
        center: egui::Pos2,
        radius: f32,
        fill: egui::Color32,
        stroke: egui::Stroke,
    ) {
        self.primitives.push(Primitive::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }

    pub fn circle_stroke(&mut self, center: egui::Pos2, radius: f32, stroke: egui::Stroke) {
        self.circle(center, radius, egui::Color32::TRANSPARENT, stroke);
    }

    pub fn arc(
        &mut self,
        center: egui::Pos2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        stroke: egui::Stroke,
    ) {
        self.primitives.push(Primitive::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            stroke,
        });
    }

    pub fn dashes(&mut self, segments: Vec<[egui::Pos2; 2]>, stroke: egui::Stroke) {
        if segments.is_empty() {
            return;
        }
        self.primitives.push(Primitive::Dashes { segments, stroke });
    }

    pub fn triangle_filled(&mut self, points: [egui::Pos2; 3], fill: egui::Color32) {
        self.primitives.push(Primitive::Triangle { points, fill });
    }

    pub fn text(
        &mut self,
        pos: egui::Pos2,
        text: impl Into<String>,
        size: f32,
        color: egui::Color32,
    ) {
        self.primitives.push(Primitive::Text {
            pos,
            text: text.into(),
            size,
            color,
        });
    }
}

/// A fully composed picture of the editor, one layer per renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub(super) struct Frame {
    pub field: Canvas,
    pub routes: Canvas,
    pub in_progress: Canvas,
    pub players: Canvas,
}

impl Frame {
    /// Primitives in paint order.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.field
            .primitives
            .iter()
            .chain(&self.routes.primitives)
            .chain(&self.in_progress.primitives)
            .chain(&self.players.primitives)
    }
}

/// Everything a repaint depends on.
pub(super) struct SceneState<'a> {
    pub sport: model::Sport,
    pub play: &'a model::Play,
    pub selected: Option<model::PlayerId>,
    pub hovered: Option<model::PlayerId>,
    pub draw_mode: bool,
    pub in_progress: &'a [egui::Pos2],
}

pub(super) fn compose(state: &SceneState<'_>) -> Frame {
    let mut frame = Frame::default();
    draw_field(&mut frame.field, state.sport);
    draw_routes(&mut frame.routes, state.play);
    if state.draw_mode {
        if let Some(player) = state.selected.and_then(|id| state.play.player(id)) {
            draw_in_progress_route(&mut frame.in_progress, player, state.in_progress);
        }
    }
    draw_players(&mut frame.players, state.play, state.selected, state.hovered);
    frame
}
