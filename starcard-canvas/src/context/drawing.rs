//! Fill, stroke, clip, and paint helper operations for CardCanvas.

use super::CardCanvas;
use crate::geometry::RectParams;
use crate::style::FillStyle;
use tiny_skia::{FillRule, Transform};

impl CardCanvas {
    // --- Clipping ---

    /// Intersect the clipping region with the current path.
    pub fn clip(&mut self) {
        log::debug!(target: "canvas", "clip");
        let path =
            std::mem::replace(&mut self.path_builder, tiny_skia::PathBuilder::new()).finish();
        self.has_current_point = false;

        if let Some(path) = path {
            self.state.clip_paths.push(path);
        }
    }

    // --- Drawing operations ---

    /// Fill the current path using the non-zero winding rule.
    pub fn fill(&mut self) {
        log::debug!(target: "canvas", "fill");
        // Clone the path builder so we don't consume it - stroke() may follow
        let Some(path) = self.path_builder.clone().finish() else {
            return;
        };
        let clip_mask = self.create_clip_mask();
        let painted = self.with_fill_paint(|canvas, paint| {
            canvas.pixmap.fill_path(
                &path,
                paint,
                FillRule::Winding,
                Transform::identity(),
                clip_mask.as_ref(),
            );
        });
        if painted.is_none() {
            log::warn!(target: "canvas", "fill skipped: fill style has no usable paint");
        }
    }

    /// Stroke the current path.
    pub fn stroke(&mut self) {
        log::debug!(target: "canvas", "stroke");
        let Some(path) = self.path_builder.clone().finish() else {
            return;
        };
        let stroke = tiny_skia::Stroke {
            width: self.state.line_width,
            ..Default::default()
        };
        let clip_mask = self.create_clip_mask();
        let painted = self.with_stroke_paint(|canvas, paint| {
            canvas.pixmap.stroke_path(
                &path,
                paint,
                &stroke,
                Transform::identity(),
                clip_mask.as_ref(),
            );
        });
        if painted.is_none() {
            log::warn!(target: "canvas", "stroke skipped: stroke style has no usable paint");
        }
    }

    /// Fill a rectangle without touching the current path.
    pub fn fill_rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "fillRect {:?}", params);
        let Some(rect) =
            tiny_skia::Rect::from_xywh(params.x, params.y, params.width, params.height)
        else {
            return;
        };
        let path = tiny_skia::PathBuilder::from_rect(rect);
        let clip_mask = self.create_clip_mask();
        let painted = self.with_fill_paint(|canvas, paint| {
            canvas.pixmap.fill_path(
                &path,
                paint,
                FillRule::Winding,
                Transform::identity(),
                clip_mask.as_ref(),
            );
        });
        if painted.is_none() {
            log::warn!(target: "canvas", "fill_rect skipped: fill style has no usable paint");
        }
    }

    // --- Private paint helpers ---

    /// Mask covering the intersection of every active clip path.
    pub(crate) fn create_clip_mask(&self) -> Option<tiny_skia::Mask> {
        let (first, rest) = self.state.clip_paths.split_first()?;
        let mut mask = tiny_skia::Mask::new(self.width, self.height)?;
        mask.fill_path(first, FillRule::Winding, true, Transform::identity());
        for path in rest {
            mask.intersect_path(path, FillRule::Winding, true, Transform::identity());
        }
        Some(mask)
    }

    pub(crate) fn with_fill_paint<R>(
        &mut self,
        draw: impl for<'a> FnOnce(&mut Self, &tiny_skia::Paint<'a>) -> R,
    ) -> Option<R> {
        let style = self.state.fill_style.clone();
        self.with_paint_from_style(style, draw)
    }

    pub(crate) fn with_stroke_paint<R>(
        &mut self,
        draw: impl for<'a> FnOnce(&mut Self, &tiny_skia::Paint<'a>) -> R,
    ) -> Option<R> {
        let style = self.state.stroke_style.clone();
        self.with_paint_from_style(style, draw)
    }

    /// Run `draw` with a paint built from `style`. Returns `None` when the style
    /// has no usable shader, such as a gradient without stops.
    pub(crate) fn with_paint_from_style<R>(
        &mut self,
        style: FillStyle,
        draw: impl for<'a> FnOnce(&mut Self, &tiny_skia::Paint<'a>) -> R,
    ) -> Option<R> {
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };

        match style {
            FillStyle::Color(mut color) => {
                if self.state.global_alpha < 1.0 {
                    color.set_alpha((color.alpha() * self.state.global_alpha).clamp(0.0, 1.0));
                }
                paint.set_color(color);
            }
            FillStyle::LinearGradient(gradient) => {
                paint.shader = gradient.to_shader(self.state.global_alpha)?;
            }
        }
        Some(draw(self, &paint))
    }
}
