//! The Rubik faces a card is typeset in.

/// A bundled font face, addressed by the weight and style it registers under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Light,
    LightItalic,
    Medium,
    SemiBold,
    SemiBoldItalic,
}

impl FontFace {
    pub const ALL: [FontFace; 5] = [
        FontFace::Light,
        FontFace::LightItalic,
        FontFace::Medium,
        FontFace::SemiBold,
        FontFace::SemiBoldItalic,
    ];

    /// File name under the `fonts/` asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            FontFace::Light => "Rubik-Light.ttf",
            FontFace::LightItalic => "Rubik-LightItalic.ttf",
            FontFace::Medium => "Rubik-Medium.ttf",
            FontFace::SemiBold => "Rubik-SemiBold.ttf",
            FontFace::SemiBoldItalic => "Rubik-SemiBoldItalic.ttf",
        }
    }

    /// CSS font shorthand for this face at `size_px`.
    pub fn css(self, size_px: u32) -> String {
        let (style, weight) = match self {
            FontFace::Light => ("", 300),
            FontFace::LightItalic => ("italic ", 300),
            FontFace::Medium => ("", 500),
            FontFace::SemiBold => ("", 600),
            FontFace::SemiBoldItalic => ("italic ", 600),
        };
        format!("{style}{weight} {size_px}px Rubik, sans-serif")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starcard_canvas::parse_font;

    #[test]
    fn test_css_round_trips_through_parser() {
        for face in FontFace::ALL {
            let parsed = parse_font(&face.css(30)).unwrap();
            assert_eq!(parsed.size_px, 30.0);
            assert_eq!(parsed.families, ["Rubik", "sans-serif"]);
        }
        assert_eq!(FontFace::SemiBoldItalic.css(25), "italic 600 25px Rubik, sans-serif");
    }
}
