//! Rarity-tier gradient frames.

use crate::error::{CardError, CardResult};
use starcard_canvas::{CanvasColor, CanvasGradient};

/// Five-stop colour table for a rarity tier.
pub fn rarity_stops(rarity: u8) -> CardResult<&'static [(f64, CanvasColor); 5]> {
    const TIER_3: [(f64, CanvasColor); 5] = [
        (0.0, CanvasColor::from_hex(0x515474)),
        (0.1, CanvasColor::from_hex(0x506688)),
        (0.3, CanvasColor::from_hex(0x4d799a)),
        (0.7, CanvasColor::from_hex(0x498ca9)),
        (1.0, CanvasColor::from_hex(0x499fb3)),
    ];
    const TIER_4: [(f64, CanvasColor); 5] = [
        (0.0, CanvasColor::from_hex(0x595482)),
        (0.1, CanvasColor::from_hex(0x6e6195)),
        (0.3, CanvasColor::from_hex(0x866da7)),
        (0.7, CanvasColor::from_hex(0x9e7ab9)),
        (1.0, CanvasColor::from_hex(0xb886ca)),
    ];
    const TIER_5: [(f64, CanvasColor); 5] = [
        (0.0, CanvasColor::from_hex(0x695453)),
        (0.1, CanvasColor::from_hex(0x90655b)),
        (0.3, CanvasColor::from_hex(0xb3785d)),
        (0.7, CanvasColor::from_hex(0xd1905a)),
        (1.0, CanvasColor::from_hex(0xe6ac54)),
    ];

    match rarity {
        3 => Ok(&TIER_3),
        4 => Ok(&TIER_4),
        5 => Ok(&TIER_5),
        other => Err(CardError::data_shape(format!(
            "rarity {other} has no gradient frame, expected 3, 4 or 5"
        ))),
    }
}

/// Gradient for `rarity` laid along the axis (x0, y0) -> (x1, y1).
pub fn rarity_gradient(rarity: u8, x0: f32, y0: f32, x1: f32, y1: f32) -> CardResult<CanvasGradient> {
    let mut gradient = CanvasGradient::new_linear(x0, y0, x1, y1);
    for &(offset, color) in rarity_stops(rarity)? {
        gradient.add_color_stop(offset, color)?;
    }
    Ok(gradient)
}

/// Frame gradient behind the relic icon of the panel whose cursor is `relic_y`.
pub fn relic_frame(rarity: u8, relic_y: f32) -> CardResult<CanvasGradient> {
    rarity_gradient(rarity, 200.0, 70.0 + relic_y, 215.0, 320.0 + relic_y)
}
