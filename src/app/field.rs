use crate::model::{FIELD_HEIGHT, FIELD_WIDTH, Sport};
use eframe::egui;
use std::f32::consts::{PI, TAU};

use super::scene::Canvas;

const W: f32 = FIELD_WIDTH;
const H: f32 = FIELD_HEIGHT;

const GRASS: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
const END_ZONE: egui::Color32 = egui::Color32::from_rgb(12, 122, 58);
const HARDWOOD: egui::Color32 = egui::Color32::from_rgb(217, 119, 6);
const LANE_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(26, 26, 26, 26);

fn chalk() -> egui::Stroke {
    egui::Stroke::new(2.0, egui::Color32::WHITE)
}

fn rect(x: f32, y: f32, w: f32, h: f32) -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(w, h))
}

fn hline(canvas: &mut Canvas, y: f32, x0: f32, x1: f32) {
    canvas.line_segment([egui::pos2(x0, y), egui::pos2(x1, y)], chalk());
}

/// Paints the background and markings of `sport` over the whole surface.
pub(super) fn draw_field(canvas: &mut Canvas, sport: Sport) {
    canvas.rect_filled(rect(0.0, 0.0, W, H), GRASS);
    match sport {
        Sport::Football => draw_football(canvas),
        Sport::Basketball => draw_basketball(canvas),
        Sport::Soccer => draw_soccer(canvas),
    }
}

fn draw_football(canvas: &mut Canvas) {
    // Two end zones plus ten ten-yard sections between the goal lines.
    let section = H / 12.0;
    let end_zone_h = section;

    canvas.rect_filled(rect(50.0, 0.0, W - 100.0, end_zone_h), END_ZONE);
    canvas.rect_filled(rect(50.0, H - end_zone_h, W - 100.0, end_zone_h), END_ZONE);
    canvas.text(
        egui::pos2(W / 2.0, end_zone_h / 2.0),
        "END ZONE",
        32.0,
        egui::Color32::WHITE,
    );
    canvas.text(
        egui::pos2(W / 2.0, H - end_zone_h / 2.0),
        "END ZONE",
        32.0,
        egui::Color32::WHITE,
    );

    let yard_numbers = [0, 10, 20, 30, 40, 50, 40, 30, 20, 10, 0];
    for (i, yards) in yard_numbers.iter().enumerate() {
        let y = end_zone_h + section * i as f32;
        hline(canvas, y, 50.0, W - 50.0);
        if i > 0 && i < yard_numbers.len() - 1 {
            let label = yards.to_string();
            canvas.text(egui::pos2(80.0, y), label.clone(), 24.0, egui::Color32::WHITE);
            canvas.text(egui::pos2(W - 80.0, y), label, 24.0, egui::Color32::WHITE);
        }
    }

    canvas.rect_stroke(rect(50.0, 0.0, W - 100.0, H), chalk());
}

fn draw_basketball(canvas: &mut Canvas) {
    canvas.rect_filled(rect(0.0, 0.0, W, H), HARDWOOD);
    canvas.rect_stroke(rect(0.0, 0.0, W, H), chalk());

    hline(canvas, H / 2.0, 0.0, W);
    canvas.circle_stroke(egui::pos2(W / 2.0, H / 2.0), 50.0, chalk());

    let lane_w = 120.0;
    let lane_h = 150.0;
    let lane_x = W / 2.0 - lane_w / 2.0;
    for lane in [rect(lane_x, 0.0, lane_w, lane_h), rect(lane_x, H - lane_h, lane_w, lane_h)] {
        canvas.rect_filled(lane, LANE_FILL);
        canvas.rect_stroke(lane, chalk());
    }

    for y in [lane_h, H - lane_h] {
        hline(canvas, y, lane_x, lane_x + lane_w);
        canvas.circle_stroke(egui::pos2(W / 2.0, y), 50.0, chalk());
    }

    let three_point_radius = 200.0;
    let basket_offset = 20.0;
    canvas.arc(
        egui::pos2(W / 2.0, basket_offset),
        three_point_radius,
        0.0,
        PI,
        chalk(),
    );
    canvas.arc(
        egui::pos2(W / 2.0, H - basket_offset),
        three_point_radius,
        PI,
        TAU,
        chalk(),
    );
}

fn draw_soccer(canvas: &mut Canvas) {
    canvas.rect_stroke(rect(0.0, 0.0, W, H), chalk());
    hline(canvas, H / 2.0, 0.0, W);
    canvas.circle_stroke(egui::pos2(W / 2.0, H / 2.0), 70.0, chalk());

    canvas.rect_stroke(rect(W / 2.0 - 100.0, 0.0, 200.0, 100.0), chalk());
    canvas.rect_stroke(rect(W / 2.0 - 100.0, H - 100.0, 200.0, 100.0), chalk());

    canvas.rect_stroke(rect(W / 2.0 - 50.0, 0.0, 100.0, 40.0), chalk());
    canvas.rect_stroke(rect(W / 2.0 - 50.0, H - 40.0, 100.0, 40.0), chalk());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::scene::Primitive;

    #[derive(Default, Debug, PartialEq)]
    struct Counts {
        fills: usize,
        rects: usize,
        lines: usize,
        circles: usize,
        arcs: usize,
        texts: usize,
    }

    fn counts(sport: Sport) -> Counts {
        let mut canvas = Canvas::default();
        draw_field(&mut canvas, sport);
        let mut c = Counts::default();
        for p in &canvas.primitives {
            match p {
                Primitive::FillRect { .. } => c.fills += 1,
                Primitive::StrokeRect { .. } => c.rects += 1,
                Primitive::Line { .. } => c.lines += 1,
                Primitive::Circle { .. } => c.circles += 1,
                Primitive::Arc { .. } => c.arcs += 1,
                Primitive::Text { .. } => c.texts += 1,
                other => panic!("unexpected field primitive {other:?}"),
            }
        }
        c
    }

    #[test]
    fn every_field_starts_with_full_grass() {
        for sport in Sport::ALL {
            let mut canvas = Canvas::default();
            draw_field(&mut canvas, sport);
            assert_eq!(
                canvas.primitives.first(),
                Some(&Primitive::FillRect {
                    rect: rect(0.0, 0.0, W, H),
                    color: GRASS,
                })
            );
        }
    }

    #[test]
    fn football_layout() {
        assert_eq!(
            counts(Sport::Football),
            Counts {
                fills: 3,
                rects: 1,
                lines: 11,
                circles: 0,
                arcs: 0,
                texts: 2 + 18,
            }
        );
    }

    #[test]
    fn football_yard_lines_run_goal_to_goal() {
        let mut canvas = Canvas::default();
        draw_field(&mut canvas, Sport::Football);
        let ys: Vec<f32> = canvas
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Line { points, .. } => Some(points[0].y),
                _ => None,
            })
            .collect();
        assert_eq!(ys.first(), Some(&75.0));
        assert_eq!(ys.last(), Some(&825.0));
    }

    #[test]
    fn football_midfield_is_fifty() {
        let mut canvas = Canvas::default();
        draw_field(&mut canvas, Sport::Football);
        let fifty = canvas.primitives.iter().filter(|p| {
            matches!(p, Primitive::Text { text, pos, .. } if text == "50" && pos.y == H / 2.0)
        });
        assert_eq!(fifty.count(), 2);
    }

    #[test]
    fn basketball_layout() {
        assert_eq!(
            counts(Sport::Basketball),
            Counts {
                fills: 4,
                rects: 3,
                lines: 3,
                circles: 3,
                arcs: 2,
                texts: 0,
            }
        );
    }

    #[test]
    fn soccer_layout() {
        assert_eq!(
            counts(Sport::Soccer),
            Counts {
                fills: 1,
                rects: 5,
                lines: 1,
                circles: 1,
                arcs: 0,
                texts: 0,
            }
        );
    }
}
