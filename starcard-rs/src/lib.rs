//! Compose Honkai: Star Rail character stat cards from showcase data.
//!
//! A card is laid out in fixed phases (header, light cone, stat rows, skill
//! medallions, relic panels, footer) onto a [`starcard_canvas::CardCanvas`]
//! sized from the character's stats. Images and fonts come from an
//! [`AssetResolver`]; [`FsAssetResolver`] reads them from an asset directory.
//!
//! ```rust,ignore
//! use starcard_rs::{compose, FsAssetResolver, ShowcasePayload};
//!
//! let payload = ShowcasePayload::from_json(&json)?;
//! let character = payload.select(0)?;
//! let resolver = FsAssetResolver::new("assets");
//! let card = compose(&payload.player, character, &resolver)?;
//! std::fs::write("card.png", card.to_png()?)?;
//! ```

pub mod assets;
pub mod card;
pub mod composer;
pub mod display;
pub mod error;
pub mod fonts;
pub mod gradient;
pub mod layout;
pub mod merge;
pub mod model;
pub mod options;
pub mod palette;
pub mod text_layout;

pub use assets::{AssetKey, AssetResolver, FsAssetResolver};
pub use card::{CardImage, PlacedRegion, RegionKind};
pub use composer::{compose, compose_with_options, Phase};
pub use error::{CardError, CardResult, ErrorKind};
pub use layout::LayoutConstants;
pub use merge::{merge_stats, MergedStat, StatSource};
pub use model::{CharacterRecord, PlayerProfile, ShowcasePayload};
pub use options::{Attribution, RenderOptions};
pub use starcard_canvas;
