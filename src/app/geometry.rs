use crate::model;
use eframe::egui;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_6, TAU};

pub(super) fn distance(a: egui::Pos2, b: egui::Pos2) -> f32 {
    (b - a).length()
}

/// First player, in collection order, whose marker contains `point`.
pub(super) fn hit_test(
    point: egui::Pos2,
    players: &[model::Player],
    radius: f32,
) -> Option<&model::Player> {
    players.iter().find(|p| distance(point, p.pos) <= radius)
}

/// Filled triangle `[tip, left wing, right wing]` pointing from `tail` to
/// `tip`. The wings sit `length` back from the tip at +/-30 degrees.
///
/// A zero-length direction points the arrow up the field (negative y).
pub(super) fn compute_arrowhead(
    tail: egui::Pos2,
    tip: egui::Pos2,
    length: f32,
) -> [egui::Pos2; 3] {
    let v = tip - tail;
    let angle = if v.length_sq() <= f32::EPSILON {
        -FRAC_PI_2
    } else {
        v.y.atan2(v.x)
    };
    let wing = |offset: f32| {
        let a = angle + offset;
        tip - egui::vec2(a.cos(), a.sin()) * length
    };
    [tip, wing(-FRAC_PI_6), wing(FRAC_PI_6)]
}

/// Splits a poly-line into dash segments. The on/off pattern carries over
/// vertices instead of restarting on every segment.
pub(super) fn dash_segments(
    points: &[egui::Pos2],
    dash_len: f32,
    gap_len: f32,
) -> Vec<[egui::Pos2; 2]> {
    if dash_len <= 0.0 || gap_len <= 0.0 {
        return points.windows(2).map(|pair| [pair[0], pair[1]]).collect();
    }
    let mut out = Vec::new();
    let mut drawing = true;
    let mut remaining = dash_len;
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let v = b - a;
        let len = v.length();
        if len <= f32::EPSILON {
            continue;
        }
        let dir = v / len;
        let mut pos = 0.0;
        while pos < len {
            let step = remaining.min(len - pos);
            let next_pos = pos + step;
            if drawing {
                out.push([a + dir * pos, a + dir * next_pos]);
            }
            pos = next_pos;
            remaining -= step;
            if remaining <= f32::EPSILON {
                drawing = !drawing;
                remaining = if drawing { dash_len } else { gap_len };
            }
        }
    }
    out
}

/// Samples a circular arc from `start` to `end` (radians, clockwise on
/// screen since y grows downwards).
pub(super) fn arc_points(
    center: egui::Pos2,
    radius: f32,
    start: f32,
    end: f32,
) -> Vec<egui::Pos2> {
    let sweep = end - start;
    let steps = ((sweep.abs() / TAU) * 64.0).ceil().max(2.0) as usize;
    (0..=steps)
        .map(|i| {
            let a = start + sweep * (i as f32 / steps as f32);
            center + egui::vec2(a.cos(), a.sin()) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: model::PlayerId, x: f32, y: f32) -> model::Player {
        model::Player {
            id,
            pos: egui::pos2(x, y),
            label: "O".to_string(),
            team: model::Team::Offense,
        }
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(egui::pos2(0.0, 0.0), egui::pos2(3.0, 4.0)), 5.0);
    }

    #[test]
    fn hit_test_empty_collection_misses() {
        assert!(hit_test(egui::pos2(10.0, 10.0), &[], 20.0).is_none());
    }

    #[test]
    fn hit_test_includes_boundary() {
        let players = [player(1, 100.0, 100.0)];
        assert_eq!(hit_test(egui::pos2(120.0, 100.0), &players, 20.0).map(|p| p.id), Some(1));
        assert!(hit_test(egui::pos2(120.5, 100.0), &players, 20.0).is_none());
    }

    #[test]
    fn hit_test_first_match_wins_on_overlap() {
        let players = [player(1, 100.0, 100.0), player(2, 105.0, 100.0)];
        let hit = hit_test(egui::pos2(104.0, 100.0), &players, 20.0);
        assert_eq!(hit.map(|p| p.id), Some(1));
    }

    #[test]
    fn arrowhead_wings_at_thirty_degrees() {
        let [tip, left, right] =
            compute_arrowhead(egui::pos2(0.0, 0.0), egui::pos2(100.0, 0.0), 15.0);
        assert_eq!(tip, egui::pos2(100.0, 0.0));
        let expected_dx = 15.0 * FRAC_PI_6.cos();
        let expected_dy = 15.0 * FRAC_PI_6.sin();
        assert!((left.x - (100.0 - expected_dx)).abs() < 1e-4);
        assert!((left.y - expected_dy).abs() < 1e-4);
        assert!((right.x - (100.0 - expected_dx)).abs() < 1e-4);
        assert!((right.y + expected_dy).abs() < 1e-4);
    }

    #[test]
    fn degenerate_arrowhead_points_up() {
        let p = egui::pos2(50.0, 50.0);
        let triangle = compute_arrowhead(p, p, 15.0);
        for corner in triangle {
            assert!(corner.x.is_finite() && corner.y.is_finite());
        }
        // Wings trail below the tip when the arrow points up.
        assert!(triangle[1].y > p.y);
        assert!(triangle[2].y > p.y);
        assert!((triangle[1].x - p.x + (triangle[2].x - p.x)).abs() < 1e-4);
    }

    #[test]
    fn dashes_alternate_along_a_line() {
        let dashes = dash_segments(&[egui::pos2(0.0, 0.0), egui::pos2(20.0, 0.0)], 5.0, 5.0);
        assert_eq!(
            dashes,
            vec![
                [egui::pos2(0.0, 0.0), egui::pos2(5.0, 0.0)],
                [egui::pos2(10.0, 0.0), egui::pos2(15.0, 0.0)],
            ]
        );
    }

    #[test]
    fn dash_pattern_continues_across_vertices() {
        let points = [egui::pos2(0.0, 0.0), egui::pos2(3.0, 0.0), egui::pos2(3.0, 7.0)];
        let dashes = dash_segments(&points, 5.0, 5.0);
        assert_eq!(dashes.len(), 2);
        assert_eq!(dashes[0], [egui::pos2(0.0, 0.0), egui::pos2(3.0, 0.0)]);
        assert_eq!(dashes[1], [egui::pos2(3.0, 0.0), egui::pos2(3.0, 2.0)]);
    }

    #[test]
    fn arc_points_span_requested_angles() {
        let pts = arc_points(egui::pos2(0.0, 0.0), 10.0, 0.0, std::f32::consts::PI);
        let first = pts[0];
        let last = pts[pts.len() - 1];
        assert!((first.x - 10.0).abs() < 1e-4 && first.y.abs() < 1e-4);
        assert!((last.x + 10.0).abs() < 1e-4 && last.y.abs() < 1e-3);
        // Canvas arcs from 0 to pi sweep through positive y.
        assert!(pts[pts.len() / 2].y > 9.0);
    }
}
