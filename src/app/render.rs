use crate::model;
use eframe::egui;

use super::geometry::{arc_points, compute_arrowhead, dash_segments};
use super::scene::{Canvas, Frame, Primitive};

pub(super) const PLAYER_RADIUS: f32 = 20.0;
const HOVER_GROWTH: f32 = 3.0;
const ROUTE_WIDTH: f32 = 3.0;
const ROUTE_DASH: f32 = 5.0;
const ROUTE_GAP: f32 = 5.0;
const ARROW_LENGTH: f32 = 15.0;
const LABEL_SIZE: f32 = 14.0;

const SELECTED_OUTLINE: egui::Color32 = egui::Color32::from_rgb(251, 191, 36);

pub(super) fn team_color(team: model::Team) -> egui::Color32 {
    match team {
        model::Team::Offense => egui::Color32::from_rgb(59, 130, 246),
        model::Team::Defense => egui::Color32::from_rgb(239, 68, 68),
    }
}

fn team_tint(team: model::Team) -> egui::Color32 {
    match team {
        model::Team::Offense => egui::Color32::from_rgb(96, 165, 250),
        model::Team::Defense => egui::Color32::from_rgb(248, 113, 113),
    }
}

pub(super) fn sport_button(
    ui: &mut egui::Ui,
    sport: model::Sport,
    selected: model::Sport,
) -> bool {
    ui.selectable_label(sport == selected, sport.label())
        .clicked()
}

pub(super) fn team_dot(ui: &mut egui::Ui, team: model::Team) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), 6.0, team_color(team));
}

/// Dashed path from `start` through `points` with an arrowhead on the last
/// segment.
fn draw_route_path(
    canvas: &mut Canvas,
    start: egui::Pos2,
    points: &[egui::Pos2],
    color: egui::Color32,
) {
    let Some(&tip) = points.last() else {
        return;
    };
    let mut path = Vec::with_capacity(points.len() + 1);
    path.push(start);
    path.extend_from_slice(points);
    canvas.dashes(
        dash_segments(&path, ROUTE_DASH, ROUTE_GAP),
        egui::Stroke::new(ROUTE_WIDTH, color),
    );
    let tail = path[path.len() - 2];
    canvas.triangle_filled(compute_arrowhead(tail, tip, ARROW_LENGTH), color);
}

pub(super) fn draw_routes(canvas: &mut Canvas, play: &model::Play) {
    for route in &play.routes {
        if !route.is_drawable() {
            continue;
        }
        let Some(player) = play.player(route.player_id) else {
            continue;
        };
        draw_route_path(canvas, player.pos, &route.points, team_color(player.team));
    }
}

pub(super) fn draw_in_progress_route(
    canvas: &mut Canvas,
    player: &model::Player,
    points: &[egui::Pos2],
) {
    draw_route_path(canvas, player.pos, points, team_tint(player.team));
}

pub(super) fn draw_players(
    canvas: &mut Canvas,
    play: &model::Play,
    selected: Option<model::PlayerId>,
    hovered: Option<model::PlayerId>,
) {
    for player in &play.players {
        let outline = if selected == Some(player.id) {
            egui::Stroke::new(4.0, SELECTED_OUTLINE)
        } else {
            egui::Stroke::new(2.0, egui::Color32::WHITE)
        };
        let radius = if hovered == Some(player.id) {
            PLAYER_RADIUS + HOVER_GROWTH
        } else {
            PLAYER_RADIUS
        };
        canvas.circle(player.pos, radius, team_color(player.team), outline);
        canvas.text(player.pos, player.label.clone(), LABEL_SIZE, egui::Color32::WHITE);
    }
}

/// Replays a composed frame onto the screen, offset by the surface origin.
pub(super) fn paint_frame(painter: &egui::Painter, origin: egui::Pos2, frame: &Frame) {
    let offset = origin.to_vec2();
    for primitive in frame.primitives() {
        match primitive {
            Primitive::FillRect { rect, color } => {
                painter.rect_filled(rect.translate(offset), 0.0, *color);
            }
            Primitive::StrokeRect { rect, stroke } => {
                painter.rect_stroke(rect.translate(offset), 0.0, *stroke, egui::StrokeKind::Middle);
            }
            Primitive::Line { points, stroke } => {
                painter.line_segment([points[0] + offset, points[1] + offset], *stroke);
            }
            Primitive::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                painter.circle(*center + offset, *radius, *fill, *stroke);
            }
            Primitive::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                stroke,
            } => {
                let pts = arc_points(*center + offset, *radius, *start_angle, *end_angle);
                painter.add(egui::Shape::line(pts, *stroke));
            }
            Primitive::Dashes { segments, stroke } => {
                for [a, b] in segments {
                    painter.line_segment([*a + offset, *b + offset], *stroke);
                }
            }
            Primitive::Triangle { points, fill } => {
                painter.add(egui::Shape::convex_polygon(
                    points.iter().map(|p| *p + offset).collect(),
                    *fill,
                    egui::Stroke::NONE,
                ));
            }
            Primitive::Text {
                pos,
                text,
                size,
                color,
            } => {
                painter.text(
                    *pos + offset,
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(*size),
                    *color,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Play, Route, Team};

    fn triangles(canvas: &Canvas) -> Vec<[egui::Pos2; 3]> {
        canvas
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Triangle { points, .. } => Some(*points),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn short_routes_are_not_drawn() {
        let mut play = Play::default();
        let a = play.add_player(Team::Offense);
        play.upsert_route(Route {
            player_id: a,
            points: vec![egui::pos2(10.0, 10.0)],
        });
        let mut canvas = Canvas::default();
        draw_routes(&mut canvas, &play);
        assert!(canvas.primitives.is_empty());
    }

    #[test]
    fn route_starts_at_player_and_ends_in_arrow() {
        let mut play = Play::default();
        let a = play.add_player(Team::Defense);
        play.move_player(a, egui::pos2(0.0, 0.0));
        play.upsert_route(Route {
            player_id: a,
            points: vec![egui::pos2(0.0, 100.0), egui::pos2(100.0, 100.0)],
        });
        let mut canvas = Canvas::default();
        draw_routes(&mut canvas, &play);

        let Some(Primitive::Dashes { segments, stroke }) = canvas.primitives.first() else {
            panic!("expected dashed route first");
        };
        assert_eq!(segments[0][0], egui::pos2(0.0, 0.0));
        assert_eq!(stroke.color, team_color(Team::Defense));
        assert_eq!(
            triangles(&canvas),
            vec![compute_arrowhead(
                egui::pos2(0.0, 100.0),
                egui::pos2(100.0, 100.0),
                ARROW_LENGTH
            )]
        );
    }

    #[test]
    fn in_progress_single_point_uses_player_as_tail() {
        let player = model::Player {
            id: 1,
            pos: egui::pos2(50.0, 50.0),
            label: "O".to_string(),
            team: Team::Offense,
        };
        let mut canvas = Canvas::default();
        draw_in_progress_route(&mut canvas, &player, &[egui::pos2(50.0, 10.0)]);
        assert_eq!(
            triangles(&canvas),
            vec![compute_arrowhead(
                egui::pos2(50.0, 50.0),
                egui::pos2(50.0, 10.0),
                ARROW_LENGTH
            )]
        );
        let tinted = canvas.primitives.iter().all(|p| match p {
            Primitive::Dashes { stroke, .. } => stroke.color == team_tint(Team::Offense),
            Primitive::Triangle { fill, .. } => *fill == team_tint(Team::Offense),
            _ => false,
        });
        assert!(tinted);
    }

    #[test]
    fn selected_and_hovered_players_are_styled() {
        let mut play = Play::default();
        let a = play.add_player(Team::Offense);
        let b = play.add_player(Team::Defense);
        let mut canvas = Canvas::default();
        draw_players(&mut canvas, &play, Some(a), Some(b));

        let circles: Vec<_> = canvas
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Circle { radius, stroke, .. } => Some((*radius, *stroke)),
                _ => None,
            })
            .collect();
        assert_eq!(
            circles,
            vec![
                (PLAYER_RADIUS, egui::Stroke::new(4.0, SELECTED_OUTLINE)),
                (
                    PLAYER_RADIUS + HOVER_GROWTH,
                    egui::Stroke::new(2.0, egui::Color32::WHITE)
                ),
            ]
        );
    }
}
