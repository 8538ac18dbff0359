//! Element colours for layered footer text.

use crate::error::{CardError, CardResult};
use starcard_canvas::CanvasColor;

/// Shadow colours drawn beneath white footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementPalette {
    pub primary: CanvasColor,
    pub secondary: CanvasColor,
}

impl ElementPalette {
    /// Palette for an element display name such as `Quantum`.
    pub fn for_element(name: &str) -> CardResult<Self> {
        let (primary, secondary) = match name {
            "Fire" => (0xe62e00, 0xd47861),
            "Ice" => (0x00ade6, 0x61a4d4),
            "Imaginary" => (0xe6db00, 0xd4d461),
            "Lightning" => (0xd700e6, 0xd473d9),
            "Physical" => (0xc2c2c2, 0xd6d6d6),
            "Quantum" => (0x5200d6, 0x8d61d4),
            "Wind" => (0x00e660, 0x61d497),
            other => {
                return Err(CardError::data_shape(format!("unknown element {other:?}")))
            }
        };
        Ok(Self {
            primary: CanvasColor::from_hex(primary),
            secondary: CanvasColor::from_hex(secondary),
        })
    }
}
