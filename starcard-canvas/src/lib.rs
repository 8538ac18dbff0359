//! Pure Rust drawing surface for stat cards, built on tiny-skia and cosmic-text.
//!
//! The canvas exposes the small Canvas 2D subset a card renderer needs:
//! - paths (rectangles, rounded rectangles, circular arcs) with fill, stroke and clip
//! - solid colors and linear gradients
//! - text shaped by `cosmic-text` and drawn as vector outlines
//! - raster images decoded with `image`
//!
//! # Example
//!
//! ```rust,ignore
//! use starcard_canvas::{CardCanvas, RectParams};
//!
//! let mut canvas = CardCanvas::new(400, 300)?;
//! canvas.set_fill_style("#ff0000")?;
//! canvas.fill_rect(&RectParams::new(10.0, 10.0, 100.0, 50.0));
//! let png_data = canvas.to_png()?;
//! ```

mod arc;
mod canvas_image;
mod context;
mod drawing_state;
mod error;
mod font_config;
mod font_parser;
mod geometry;
mod gradient;
mod style;
mod text;

// Re-export public API
pub use canvas_image::CanvasImage;
pub use context::{encode_png, CardCanvas, StateGuard};
pub use drawing_state::DrawingState;
pub use error::{CanvasError, CanvasResult};
pub use font_config::{font_config_to_fontdb, CustomFont, FontConfig};
pub use font_parser::{parse_font, ParsedFont};
pub use geometry::{ArcParams, CanvasColor, RectParams, RoundRectParams};
pub use gradient::{CanvasGradient, GradientStop};
pub use style::{FillStyle, TextAlign};
pub use text::TextMetrics;
