//! Drawing state that can be saved and restored.

use crate::font_parser::ParsedFont;
use crate::style::{FillStyle, TextAlign};

/// Drawing state that can be saved and restored.
#[derive(Debug, Clone)]
pub struct DrawingState {
    /// Current fill style.
    pub fill_style: FillStyle,
    /// Current stroke style.
    pub stroke_style: FillStyle,
    /// Current line width.
    pub line_width: f32,
    /// Current font specification.
    pub font: ParsedFont,
    /// Current text alignment.
    pub text_align: TextAlign,
    /// Current global alpha.
    pub global_alpha: f32,
    /// Clip paths in device space; the effective clip is their intersection.
    pub clip_paths: Vec<tiny_skia::Path>,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            fill_style: FillStyle::default(),
            stroke_style: FillStyle::default(),
            line_width: 1.0,
            font: ParsedFont::default(),
            text_align: TextAlign::default(),
            global_alpha: 1.0,
            clip_paths: Vec::new(),
        }
    }
}
