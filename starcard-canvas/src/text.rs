//! Text shaping and measurement using cosmic-text.

use crate::font_config::has_family;
use crate::font_parser::ParsedFont;
use cosmic_text::{Attrs, Buffer, CacheKeyFlags, Family, FontSystem, Metrics, Shaping};

/// Text metrics returned by `measure_text()`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the text in pixels.
    pub width: f32,
    /// Distance from baseline to the top of the line box.
    pub ascent: f32,
    /// Distance from baseline to the bottom of the line box.
    pub descent: f32,
}

/// Pick the first family in the list the font database can satisfy.
///
/// Generic CSS families map onto cosmic-text's generic families. Unknown
/// names fall through to the next entry and finally to sans-serif.
pub(crate) fn resolve_family<'a>(font_system: &FontSystem, families: &'a [String]) -> Family<'a> {
    for name in families {
        match name.to_ascii_lowercase().as_str() {
            "sans-serif" | "system-ui" => return Family::SansSerif,
            "serif" => return Family::Serif,
            "monospace" => return Family::Monospace,
            "cursive" => return Family::Cursive,
            "fantasy" => return Family::Fantasy,
            _ => {
                if has_family(font_system.db(), name) {
                    return Family::Name(name);
                }
                log::debug!(target: "canvas", "font family {name:?} not available");
            }
        }
    }
    Family::SansSerif
}

/// Shape a single line of text into a cosmic-text buffer.
pub(crate) fn shape_text(font_system: &mut FontSystem, text: &str, font: &ParsedFont) -> Buffer {
    let metrics = Metrics::new(font.size_px, font.size_px * 1.2);
    let mut buffer = Buffer::new(font_system, metrics);
    if font_system.db().is_empty() {
        log::warn!(target: "canvas", "no fonts loaded, skipping text {text:?}");
        return buffer;
    }

    let family = resolve_family(font_system, &font.families);
    // Outlines are drawn unhinted so measured and rendered widths agree
    let attrs = Attrs::new()
        .family(family)
        .weight(font.weight)
        .style(font.style)
        .cache_key_flags(CacheKeyFlags::DISABLE_HINTING);

    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);
    buffer
}

/// Metrics of an already shaped buffer.
pub(crate) fn buffer_metrics(buffer: &Buffer, font: &ParsedFont) -> TextMetrics {
    let mut metrics = TextMetrics::default();
    for run in buffer.layout_runs() {
        metrics.width = metrics.width.max(run.line_w);
        metrics.ascent = metrics.ascent.max(run.line_y - run.line_top);
        metrics.descent = metrics
            .descent
            .max(run.line_top + run.line_height - run.line_y);
    }
    if metrics.ascent == 0.0 && metrics.descent == 0.0 {
        metrics.ascent = font.size_px * 0.8;
        metrics.descent = font.size_px * 0.2;
    }
    metrics
}

/// Measure text using cosmic-text.
pub fn measure_text(font_system: &mut FontSystem, text: &str, font: &ParsedFont) -> TextMetrics {
    let buffer = shape_text(font_system, text, font);
    buffer_metrics(&buffer, font)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_config::{font_config_to_fontdb, FontConfig};

    fn empty_font_system() -> FontSystem {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        FontSystem::new_with_locale_and_db("en".to_string(), font_config_to_fontdb(&config))
    }

    #[test]
    fn test_unknown_family_falls_back_to_sans_serif() {
        let fs = empty_font_system();
        let families = vec!["Rubik".to_string()];
        assert_eq!(resolve_family(&fs, &families), Family::SansSerif);
    }

    #[test]
    fn test_generic_family_maps_directly() {
        let fs = empty_font_system();
        let families = vec!["Missing".to_string(), "monospace".to_string()];
        assert_eq!(resolve_family(&fs, &families), Family::Monospace);
    }

    #[test]
    fn test_empty_text_has_zero_width() {
        let mut fs = empty_font_system();
        let metrics = measure_text(&mut fs, "", &ParsedFont::default());
        assert_eq!(metrics.width, 0.0);
    }
}
