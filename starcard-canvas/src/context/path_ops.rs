//! Path building operations for CardCanvas.

use super::CardCanvas;
use crate::geometry::{ArcParams, RectParams, RoundRectParams};

impl CardCanvas {
    /// Begin a new path.
    pub fn begin_path(&mut self) {
        log::debug!(target: "canvas", "beginPath");
        self.path_builder = tiny_skia::PathBuilder::new();
        self.has_current_point = false;
    }

    /// Add a rectangle to the current path.
    pub fn rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "rect {:?}", params);
        let RectParams {
            x,
            y,
            width,
            height,
        } = *params;
        self.path_builder.move_to(x, y);
        self.path_builder.line_to(x + width, y);
        self.path_builder.line_to(x + width, y + height);
        self.path_builder.line_to(x, y + height);
        self.path_builder.close();
        self.has_current_point = true;
    }

    /// Add a rectangle with equal circular corners to the current path.
    ///
    /// The radius is clamped to half the shorter side.
    pub fn round_rect(&mut self, params: &RoundRectParams) {
        log::debug!(target: "canvas", "roundRect {:?}", params);
        let RectParams {
            x,
            y,
            width,
            height,
        } = params.rect;
        let r = params
            .radius
            .max(0.0)
            .min(width.abs() / 2.0)
            .min(height.abs() / 2.0);
        if r == 0.0 {
            self.rect(&params.rect);
            return;
        }

        // Kappa for quarter-circle cubic Bezier approximation
        const K: f32 = 0.552_284_8;
        let k = r * K;
        let (right, bottom) = (x + width, y + height);

        let pb = &mut self.path_builder;
        pb.move_to(x + r, y);
        pb.line_to(right - r, y);
        pb.cubic_to(right - r + k, y, right, y + r - k, right, y + r);
        pb.line_to(right, bottom - r);
        pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
        pb.line_to(x + r, bottom);
        pb.cubic_to(x + r - k, bottom, x, bottom - r + k, x, bottom - r);
        pb.line_to(x, y + r);
        pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
        pb.close();
        self.has_current_point = true;
    }

    /// Add a clockwise circular arc to the current path.
    pub fn arc(&mut self, params: &ArcParams) {
        log::debug!(target: "canvas", "arc {:?}", params);
        if crate::arc::arc(&mut self.path_builder, params, self.has_current_point).is_some() {
            self.has_current_point = true;
        }
    }
}
