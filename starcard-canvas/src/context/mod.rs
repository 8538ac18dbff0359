//! The drawing surface a stat card is composed on.

mod drawing;
mod image_ops;
mod path_ops;
mod text_rendering;

pub use image_ops::encode_png;

use crate::drawing_state::DrawingState;
use crate::error::{CanvasError, CanvasResult};
use crate::font_config::{font_config_to_fontdb, FontConfig};
use crate::geometry::CanvasColor;
use crate::gradient::CanvasGradient;
use crate::style::FillStyle;
use cosmic_text::{FontSystem, SwashCache};
use std::ops::{Deref, DerefMut};
use tiny_skia::Pixmap;

/// Maximum canvas dimension (same as Chrome).
const MAX_DIMENSION: u32 = 32767;

/// A fixed-size RGBA canvas with a save/restore state stack.
pub struct CardCanvas {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) pixmap: Pixmap,
    pub(crate) font_system: FontSystem,
    pub(crate) swash_cache: SwashCache,
    pub(crate) state: DrawingState,
    state_stack: Vec<DrawingState>,
    pub(crate) path_builder: tiny_skia::PathBuilder,
    /// Whether the current path has a current point (arc connects with a line).
    pub(crate) has_current_point: bool,
}

impl CardCanvas {
    /// Create a canvas with the default font configuration.
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        Self::with_config(width, height, &FontConfig::default())
    }

    /// Create a canvas whose text is shaped against `config`.
    pub fn with_config(width: u32, height: u32, config: &FontConfig) -> CanvasResult<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        let pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;

        let font_system =
            FontSystem::new_with_locale_and_db("en".to_string(), font_config_to_fontdb(config));

        log::debug!(target: "canvas", "new canvas {width}x{height}");
        Ok(Self {
            width,
            height,
            pixmap,
            font_system,
            swash_cache: SwashCache::new(),
            state: DrawingState::default(),
            state_stack: Vec::new(),
            path_builder: tiny_skia::PathBuilder::new(),
            has_current_point: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Save the current drawing state.
    pub fn save(&mut self) {
        log::debug!(target: "canvas", "save");
        self.state_stack.push(self.state.clone());
    }

    /// Restore the previously saved drawing state. A restore without a
    /// matching save is ignored.
    pub fn restore(&mut self) {
        log::debug!(target: "canvas", "restore");
        if let Some(state) = self.state_stack.pop() {
            self.state = state;
        }
    }

    /// Save the drawing state and restore it when the returned guard drops.
    ///
    /// Clips, styles and fonts set through the guard are discarded at the
    /// end of the scope, so a drawing phase cannot leak state into the next.
    pub fn scoped(&mut self) -> StateGuard<'_> {
        self.save();
        StateGuard { canvas: self }
    }

    /// Number of saved states not yet restored.
    pub fn save_depth(&self) -> usize {
        self.state_stack.len()
    }

    // --- Style setters ---

    /// Set the fill style from a CSS color string.
    pub fn set_fill_style(&mut self, style: &str) -> CanvasResult<()> {
        self.state.fill_style = FillStyle::Color(parse_color(style)?);
        Ok(())
    }

    /// Set the fill style from a CanvasColor.
    pub fn set_fill_style_color(&mut self, color: CanvasColor) {
        self.state.fill_style = FillStyle::Color(color.into());
    }

    /// Set the fill style to a gradient.
    pub fn set_fill_style_gradient(&mut self, gradient: CanvasGradient) {
        self.state.fill_style = FillStyle::LinearGradient(gradient);
    }

    /// Set the stroke style from a CSS color string.
    pub fn set_stroke_style(&mut self, style: &str) -> CanvasResult<()> {
        self.state.stroke_style = FillStyle::Color(parse_color(style)?);
        Ok(())
    }

    /// Set the line width. Non-finite or non-positive widths are ignored.
    pub fn set_line_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    /// Set the global alpha. Values outside [0.0, 1.0] are ignored.
    pub fn set_global_alpha(&mut self, alpha: f32) {
        if alpha.is_finite() && (0.0..=1.0).contains(&alpha) {
            self.state.global_alpha = alpha;
        }
    }
}

/// Restores the canvas drawing state when dropped.
pub struct StateGuard<'a> {
    canvas: &'a mut CardCanvas,
}

impl Deref for StateGuard<'_> {
    type Target = CardCanvas;

    fn deref(&self) -> &CardCanvas {
        self.canvas
    }
}

impl DerefMut for StateGuard<'_> {
    fn deref_mut(&mut self) -> &mut CardCanvas {
        self.canvas
    }
}

impl Drop for StateGuard<'_> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}

/// Parse a CSS color string.
pub(crate) fn parse_color(s: &str) -> CanvasResult<tiny_skia::Color> {
    let parsed = csscolorparser::parse(s)
        .map_err(|e| CanvasError::ColorParseError(format!("{s}: {e}")))?;

    let [r, g, b, a] = parsed.to_array();
    Ok(tiny_skia::Color::from_rgba(r, g, b, a).unwrap_or(tiny_skia::Color::BLACK))
}
