//! Style types for canvas operations.

use crate::gradient::CanvasGradient;

/// Paint source for fills, strokes and text.
#[derive(Debug, Clone)]
pub enum FillStyle {
    /// Solid color fill.
    Color(tiny_skia::Color),
    /// Linear gradient fill.
    LinearGradient(CanvasGradient),
}

impl Default for FillStyle {
    fn default() -> Self {
        // Default is opaque black
        FillStyle::Color(tiny_skia::Color::BLACK)
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Text starts at the anchor point.
    #[default]
    Start,
    /// Text ends at the anchor point.
    End,
    /// Text is centered on the anchor point.
    Center,
}

impl TextAlign {
    /// Offset to add to the anchor x for text of the given advance width.
    pub fn x_offset(self, width: f32) -> f32 {
        match self {
            TextAlign::Start => 0.0,
            TextAlign::End => -width,
            TextAlign::Center => -width / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_align_offsets() {
        assert_eq!(TextAlign::Start.x_offset(120.0), 0.0);
        assert_eq!(TextAlign::End.x_offset(120.0), -120.0);
        assert_eq!(TextAlign::Center.x_offset(120.0), -60.0);
    }
}
