//! Render configuration.

use crate::layout::LayoutConstants;
use starcard_canvas::FontConfig;

/// Footer credit lines. Each is drawn as a dimmed lead followed by a
/// highlighted name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub generated_by: String,
    pub generator: String,
    pub made_in: String,
    pub made_with: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            generated_by: "Generated by ".to_string(),
            generator: env!("CARGO_PKG_NAME").to_string(),
            made_in: "Made in ".to_string(),
            made_with: "Rust tiny-skia".to_string(),
        }
    }
}

/// Options threaded through a single composition.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub layout: LayoutConstants,
    /// Base font configuration; the card's own faces are added on top.
    pub fonts: FontConfig,
    /// File name under `common/` to use instead of the player's avatar.
    pub avatar_override: Option<String>,
    pub attribution: Attribution,
}
