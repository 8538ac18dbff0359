//! Parameter structs for canvas drawing operations.
//!
//! These structs replace long positional argument lists with named fields,
//! grouping semantically related parameters together.

/// Parameters for a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectParams {
    /// X coordinate of the rectangle origin.
    pub x: f32,
    /// Y coordinate of the rectangle origin.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl RectParams {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `size` anchored at (x, y).
    pub const fn square(x: f32, y: f32, size: f32) -> Self {
        Self::new(x, y, size, size)
    }
}

/// Parameters for a rounded rectangle with one radius for every corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRectParams {
    pub rect: RectParams,
    /// Corner radius, clamped so opposite corners never overlap.
    pub radius: f32,
}

impl RoundRectParams {
    pub const fn new(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Self {
        Self {
            rect: RectParams::new(x, y, width, height),
            radius,
        }
    }
}

/// Parameters for a circular arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    /// X coordinate of the arc center.
    pub x: f32,
    /// Y coordinate of the arc center.
    pub y: f32,
    /// Radius of the arc.
    pub radius: f32,
    /// Starting angle in radians.
    pub start_angle: f32,
    /// Ending angle in radians.
    pub end_angle: f32,
}

impl ArcParams {
    /// A full circle around (x, y).
    pub fn circle(x: f32, y: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            radius,
            start_angle: 0.0,
            end_angle: std::f32::consts::TAU,
        }
    }
}

/// A backend-neutral RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl CanvasColor {
    /// Create a color from 8-bit RGBA components.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#rrggbb` hex triplet into an opaque color.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
            a: 255,
        }
    }
}

impl From<CanvasColor> for tiny_skia::Color {
    fn from(c: CanvasColor) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(
            CanvasColor::from_hex(0xe6ac54),
            CanvasColor::from_rgba8(0xe6, 0xac, 0x54, 255)
        );
    }

    #[test]
    fn test_full_circle_spans_tau() {
        let arc = ArcParams::circle(10.0, 20.0, 5.0);
        assert_eq!(arc.start_angle, 0.0);
        assert!((arc.end_angle - std::f32::consts::TAU).abs() < f32::EPSILON);
    }
}
