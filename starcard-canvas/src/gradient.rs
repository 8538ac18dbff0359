//! Linear gradient fill descriptors.

use crate::error::{CanvasError, CanvasResult};
use crate::geometry::CanvasColor;

/// A color stop in a gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Offset position (0.0 to 1.0).
    pub offset: f64,
    /// Color at this stop.
    pub color: CanvasColor,
}

/// A linear gradient from (x0, y0) to (x1, y1), padded beyond its endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasGradient {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    /// Color stops, kept sorted by offset.
    pub stops: Vec<GradientStop>,
}

impl CanvasGradient {
    /// Create a new linear gradient with no stops.
    pub fn new_linear(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: Vec::new(),
        }
    }

    /// Add a color stop to the gradient.
    pub fn add_color_stop(&mut self, offset: f64, color: CanvasColor) -> CanvasResult<()> {
        if !(0.0..=1.0).contains(&offset) {
            return Err(CanvasError::InvalidGradientStop(offset));
        }
        // Equal offsets keep insertion order
        let index = self.stops.partition_point(|stop| stop.offset <= offset);
        self.stops.insert(index, GradientStop { offset, color });
        Ok(())
    }

    /// Build the tiny-skia shader, scaling every stop's alpha by `alpha`.
    pub(crate) fn to_shader(&self, alpha: f32) -> Option<tiny_skia::Shader<'static>> {
        if self.stops.is_empty() {
            return None;
        }

        let stops: Vec<tiny_skia::GradientStop> = self
            .stops
            .iter()
            .map(|stop| {
                let mut color: tiny_skia::Color = stop.color.into();
                if alpha < 1.0 {
                    color.set_alpha((color.alpha() * alpha).clamp(0.0, 1.0));
                }
                tiny_skia::GradientStop::new(stop.offset as f32, color)
            })
            .collect();

        tiny_skia::LinearGradient::new(
            tiny_skia::Point {
                x: self.x0,
                y: self.y0,
            },
            tiny_skia::Point {
                x: self.x1,
                y: self.y1,
            },
            stops,
            tiny_skia::SpreadMode::Pad,
            tiny_skia::Transform::identity(),
        )
    }
}
