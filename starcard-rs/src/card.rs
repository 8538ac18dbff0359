//! The finished card and the regions placed on it.

use crate::error::CardResult;
use starcard_canvas::encode_png;

/// What a placed region shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionKind {
    Avatar,
    Nickname,
    LightConeArt,
    LightConeStar(usize),
    LightConeTitleLine(usize),
    StatRow(usize),
    SkillMedallion {
        column: usize,
        row: usize,
        skill_id: String,
    },
    RelicPanel(usize),
    SubAffix {
        relic: usize,
        slot: usize,
    },
    LevelBadge,
    Title,
}

/// An axis-aligned box on the card.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRegion {
    pub kind: RegionKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlacedRegion {
    pub(crate) fn new(kind: RegionKind, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            kind,
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A composed card: straight-alpha RGBA pixels plus the layout that produced them.
#[derive(Debug, Clone)]
pub struct CardImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub regions: Vec<PlacedRegion>,
}

impl CardImage {
    /// Lossless PNG encoding of the card.
    pub fn to_png(&self) -> CardResult<Vec<u8>> {
        Ok(encode_png(&self.data, self.width, self.height)?)
    }

    /// Regions matching `predicate`, in drawing order.
    pub fn regions_where<'a>(
        &'a self,
        predicate: impl Fn(&RegionKind) -> bool + 'a,
    ) -> impl Iterator<Item = &'a PlacedRegion> + 'a {
        self.regions.iter().filter(move |r| predicate(&r.kind))
    }
}
