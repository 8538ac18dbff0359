//! Font configuration and resolution into a fontdb database.

use crate::error::{CanvasError, CanvasResult};
use std::path::PathBuf;
use std::sync::Arc;

/// Fonts available to a canvas.
///
/// Cloning is cheap: custom font data is shared behind an `Arc`.
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// Raw font files (TTF/OTF) to register.
    pub custom_fonts: Vec<CustomFont>,
    /// Whether to load system fonts (default: true).
    pub load_system_fonts: bool,
    /// Additional directories to scan for font files.
    pub font_dirs: Vec<PathBuf>,
    /// Preferred concrete families for CSS `sans-serif`, in priority order.
    pub sans_serif: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            custom_fonts: Vec::new(),
            load_system_fonts: true,
            font_dirs: Vec::new(),
            sans_serif: vec!["Arial".into(), "Helvetica".into(), "Liberation Sans".into()],
        }
    }
}

impl FontConfig {
    /// Register a parsed custom font.
    pub fn with_font(mut self, font: CustomFont) -> Self {
        self.custom_fonts.push(font);
        self
    }
}

/// Raw font file data, shared between clones of a [`FontConfig`].
#[derive(Clone, Debug)]
pub struct CustomFont {
    pub data: Arc<Vec<u8>>,
}

impl CustomFont {
    /// Wrap TTF/OTF bytes, failing when fontdb finds no face in them.
    pub fn parse(data: Vec<u8>) -> CanvasResult<Self> {
        let font = Self {
            data: Arc::new(data),
        };
        let mut db = fontdb::Database::new();
        if db.load_font_source(font.source()).is_empty() {
            return Err(CanvasError::InvalidFontData(font.data.len()));
        }
        Ok(font)
    }

    fn source(&self) -> fontdb::Source {
        let data: Arc<dyn AsRef<[u8]> + Sync + Send> = self.data.clone();
        fontdb::Source::Binary(data)
    }
}

/// Convert a [`FontConfig`] into a [`fontdb::Database`].
pub fn font_config_to_fontdb(config: &FontConfig) -> fontdb::Database {
    let mut db = fontdb::Database::new();

    if config.load_system_fonts {
        db.load_system_fonts();
    }

    for dir in &config.font_dirs {
        db.load_fonts_dir(dir);
    }

    for font in &config.custom_fonts {
        if db.load_font_source(font.source()).is_empty() {
            log::warn!("Skipping {} bytes of unparsable font data", font.data.len());
        }
    }

    let preferred = config
        .sans_serif
        .iter()
        .find(|family| has_family(&db, family));
    if let Some(family) = preferred {
        db.set_sans_serif_family(family.as_str());
    }

    db
}

/// Whether any face in `db` belongs to `family` (case-insensitive).
pub(crate) fn has_family(db: &fontdb::Database, family: &str) -> bool {
    db.faces().any(|face| {
        face.families
            .iter()
            .any(|(name, _lang)| name.eq_ignore_ascii_case(family))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_config() {
        let config = FontConfig::default();
        assert!(config.custom_fonts.is_empty());
        assert!(config.load_system_fonts);
        assert!(config.font_dirs.is_empty());
        assert_eq!(config.sans_serif[0], "Arial");
    }

    #[test]
    fn test_no_system_fonts_gives_empty_database() {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        let db = font_config_to_fontdb(&config);
        assert_eq!(db.faces().count(), 0);
        assert!(!has_family(&db, "Arial"));
    }

    #[test]
    fn test_parse_rejects_garbage_font_data() {
        let err = CustomFont::parse(b"this is not a font file".to_vec()).unwrap_err();
        assert!(matches!(err, CanvasError::InvalidFontData(23)));
        assert!(CustomFont::parse(Vec::new()).is_err());
    }

    #[test]
    fn test_unparsed_custom_font_is_skipped() {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        }
        .with_font(CustomFont {
            data: Arc::new(vec![0u8; 64]),
        });
        let db = font_config_to_fontdb(&config);
        assert_eq!(db.faces().count(), 0);
    }

    #[test]
    fn test_clone_shares_font_data() {
        let config = FontConfig::default().with_font(CustomFont {
            data: Arc::new(vec![1u8; 1000]),
        });
        let cloned = config.clone();
        assert!(Arc::ptr_eq(
            &config.custom_fonts[0].data,
            &cloned.custom_fonts[0].data
        ));
    }
}
