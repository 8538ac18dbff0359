//! Arc operations using bezier curve approximation.
//!
//! tiny-skia has no arc primitive, so circular arcs are split into
//! segments of at most a quarter turn and each becomes one cubic.

use crate::geometry::ArcParams;
use std::f32::consts::{FRAC_PI_2, TAU};
use tiny_skia::PathBuilder;

/// Append a clockwise arc to `path`.
///
/// When `connect` is true the arc start is joined to the current point with a
/// line, otherwise a new subpath is started. Returns the arc's end point.
pub fn arc(path: &mut PathBuilder, params: &ArcParams, connect: bool) -> Option<(f32, f32)> {
    let ArcParams {
        x,
        y,
        radius,
        start_angle,
        end_angle,
    } = *params;
    if radius.is_nan() || radius <= 0.0 || !start_angle.is_finite() || !end_angle.is_finite() {
        return None;
    }

    let mut span = end_angle - start_angle;
    if span >= TAU {
        span = TAU;
    } else {
        span = span.rem_euclid(TAU);
    }

    let start = (x + radius * start_angle.cos(), y + radius * start_angle.sin());
    if connect {
        path.line_to(start.0, start.1);
    } else {
        path.move_to(start.0, start.1);
    }
    if span == 0.0 {
        return Some(start);
    }

    let num_segments = ((span / FRAC_PI_2).ceil() as usize).max(1);
    let step = span / num_segments as f32;
    let mut angle = start_angle;
    for _ in 0..num_segments {
        arc_segment(path, x, y, radius, angle, angle + step);
        angle += step;
    }

    Some((x + radius * angle.cos(), y + radius * angle.sin()))
}

/// One cubic segment spanning at most a quarter turn.
fn arc_segment(path: &mut PathBuilder, cx: f32, cy: f32, r: f32, a1: f32, a2: f32) {
    let k = 4.0 / 3.0 * ((a2 - a1) / 4.0).tan();

    let (sin1, cos1) = a1.sin_cos();
    let (sin2, cos2) = a2.sin_cos();

    let x1 = cx + r * cos1;
    let y1 = cy + r * sin1;
    let x2 = cx + r * cos2;
    let y2 = cy + r * sin2;

    path.cubic_to(
        x1 - k * r * sin1,
        y1 + k * r * cos1,
        x2 + k * r * sin2,
        y2 - k * r * cos2,
        x2,
        y2,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_circle_bounds() {
        let mut pb = PathBuilder::new();
        arc(&mut pb, &ArcParams::circle(50.0, 50.0, 25.0), false);
        pb.close();
        let path = pb.finish().unwrap();
        let bounds = path.bounds();
        assert!((bounds.left() - 25.0).abs() < 0.5);
        assert!((bounds.right() - 75.0).abs() < 0.5);
        assert!((bounds.top() - 25.0).abs() < 0.5);
        assert!((bounds.bottom() - 75.0).abs() < 0.5);
    }

    #[test]
    fn test_quarter_arc_end_point() {
        let mut pb = PathBuilder::new();
        let params = ArcParams {
            x: 0.0,
            y: 0.0,
            radius: 10.0,
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
        };
        let (ex, ey) = arc(&mut pb, &params, false).unwrap();
        assert!(ex.abs() < 1e-4);
        assert!((ey - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_radius_draws_nothing() {
        let mut pb = PathBuilder::new();
        assert!(arc(&mut pb, &ArcParams::circle(0.0, 0.0, 0.0), false).is_none());
        assert!(pb.finish().is_none());
    }
}
