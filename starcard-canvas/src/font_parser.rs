//! CSS font shorthand parsing.
//!
//! Parses strings like "600 30px Rubik" or "italic 600 25px 'Rubik', sans-serif"
//! into the pieces cosmic-text needs.

use crate::error::{CanvasError, CanvasResult};
use cosmic_text::{Style, Weight};

/// Parsed font specification from a CSS font string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFont {
    /// Font style (normal, italic, oblique).
    pub style: Style,
    /// Font weight (100-900).
    pub weight: Weight,
    /// Font size in pixels.
    pub size_px: f32,
    /// Font families in order of preference.
    pub families: Vec<String>,
}

impl Default for ParsedFont {
    fn default() -> Self {
        Self {
            style: Style::Normal,
            weight: Weight::NORMAL,
            size_px: 10.0,
            families: vec!["sans-serif".to_string()],
        }
    }
}

/// Parse a CSS font shorthand: `[style] [weight] size family[, family]*`.
pub fn parse_font(font_str: &str) -> CanvasResult<ParsedFont> {
    let font_str = font_str.trim();
    if font_str.is_empty() {
        return Ok(ParsedFont::default());
    }

    let mut result = ParsedFont::default();
    let mut rest = font_str;

    loop {
        let (token, after) = split_token(rest);
        if token.is_empty() {
            return Err(CanvasError::FontParseError(format!(
                "Missing font size in: {font_str}"
            )));
        }
        match token {
            "normal" | "small-caps" => {}
            "italic" => result.style = Style::Italic,
            "oblique" => result.style = Style::Oblique,
            "bold" => result.weight = Weight::BOLD,
            "lighter" => result.weight = Weight::LIGHT,
            "bolder" => result.weight = Weight::EXTRA_BOLD,
            _ => {
                if let Some(weight) = parse_numeric_weight(token) {
                    result.weight = weight;
                } else {
                    result.size_px = parse_font_size(token)?;
                    rest = after;
                    break;
                }
            }
        }
        rest = after;
    }

    let families = parse_font_families(rest);
    if !families.is_empty() {
        result.families = families;
    }
    Ok(result)
}

fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], &s[end..]),
        None => (s, ""),
    }
}

/// A bare multiple of 100 in 100..=900.
fn parse_numeric_weight(token: &str) -> Option<Weight> {
    let weight: u16 = token.parse().ok()?;
    ((100..=900).contains(&weight) && weight % 100 == 0).then_some(Weight(weight))
}

/// Font size with an optional unit and optional `/line-height` suffix.
fn parse_font_size(token: &str) -> CanvasResult<f32> {
    let size = token.split('/').next().unwrap_or(token);
    let num_end = size
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(size.len());
    let (number, unit) = size.split_at(num_end);

    let value: f32 = number
        .parse()
        .map_err(|_| CanvasError::FontParseError(format!("Invalid font size: {token}")))?;

    let multiplier = match unit {
        "" | "px" => 1.0,
        "pt" => 4.0 / 3.0,
        "em" | "rem" => 16.0,
        "%" => 16.0 / 100.0,
        other => {
            return Err(CanvasError::FontParseError(format!(
                "Unsupported font size unit: {other}"
            )))
        }
    };
    Ok(value * multiplier)
}

fn parse_font_families(s: &str) -> Vec<String> {
    s.split(',')
        .map(|family| family.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|family| !family.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_and_family() {
        let font = parse_font("600 30px Rubik").unwrap();
        assert_eq!(font.size_px, 30.0);
        assert_eq!(font.weight, Weight(600));
        assert_eq!(font.style, Style::Normal);
        assert_eq!(font.families, vec!["Rubik"]);
    }

    #[test]
    fn test_italic_with_fallback_family() {
        let font = parse_font("italic 600 25px 'Rubik', sans-serif").unwrap();
        assert_eq!(font.style, Style::Italic);
        assert_eq!(font.weight, Weight(600));
        assert_eq!(font.families, vec!["Rubik", "sans-serif"]);
    }

    #[test]
    fn test_points_and_line_height() {
        let font = parse_font("bold 12pt/16pt Arial").unwrap();
        assert!((font.size_px - 16.0).abs() < 0.01);
        assert_eq!(font.weight, Weight::BOLD);
        assert_eq!(font.families, vec!["Arial"]);
    }

    #[test]
    fn test_size_without_family_keeps_default() {
        let font = parse_font("40px").unwrap();
        assert_eq!(font.size_px, 40.0);
        assert_eq!(font.families, vec!["sans-serif"]);
    }

    #[test]
    fn test_missing_size_is_error() {
        assert!(matches!(
            parse_font("bold"),
            Err(CanvasError::FontParseError(_))
        ));
        assert!(matches!(
            parse_font("bold Rubik"),
            Err(CanvasError::FontParseError(_))
        ));
    }
}
