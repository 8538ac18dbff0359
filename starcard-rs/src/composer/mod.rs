//! Card composition: sizing the canvas and running the layout phases in order.

mod footer;
mod header;
mod light_cone;
mod relics;
mod skills;
mod stats;

use crate::assets::{load_fonts, AssetKey, AssetResolver, ImageSet};
use crate::card::{CardImage, PlacedRegion};
use crate::error::{CardError, CardResult};
use crate::layout::LayoutConstants;
use crate::merge::{longest_name, merge_stats, MergedStat};
use crate::model::{CharacterRecord, PlayerProfile};
use crate::options::RenderOptions;
use crate::palette::ElementPalette;
use starcard_canvas::{CardCanvas, FontConfig};

const WHITE: &str = "#fff";
const PANEL: &str = "rgba(0, 0, 0, .8)";

/// Layout phases, drawn strictly in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Header,
    LightCone,
    StatRows,
    Skills,
    Relics,
    Footer,
}

impl Phase {
    pub const ORDER: [Phase; 6] = [
        Phase::Header,
        Phase::LightCone,
        Phase::StatRows,
        Phase::Skills,
        Phase::Relics,
        Phase::Footer,
    ];
}

/// Compose the stat card of `character` for `profile` with the stock
/// [`RenderOptions`].
///
/// Fails without producing an image when the data is malformed or any
/// required asset cannot be resolved.
pub fn compose(
    profile: &PlayerProfile,
    character: &CharacterRecord,
    resolver: &dyn AssetResolver,
) -> CardResult<CardImage> {
    compose_with_options(profile, character, resolver, &RenderOptions::default())
}

/// Like [`compose`], with custom layout, fonts, avatar and attribution.
pub fn compose_with_options(
    profile: &PlayerProfile,
    character: &CharacterRecord,
    resolver: &dyn AssetResolver,
    options: &RenderOptions,
) -> CardResult<CardImage> {
    let palette = validate(character)?;
    let layout = &options.layout;

    let stats = merge_stats(&character.attributes, &character.additions);
    let (width, height) = layout.canvas_size(stats.len(), longest_name(&stats));
    log::info!(
        "composing {} ({}) for uid {} at {width}x{height}",
        character.name,
        character.id,
        profile.uid
    );

    let keys = initial_batch(profile, character, options);
    let (fonts, images) = rayon::join(
        || load_fonts(resolver),
        || ImageSet::preload(resolver, &keys),
    );
    let (fonts, images) = (fonts?, images?);

    let font_config = fonts
        .into_iter()
        .fold(options.fonts.clone(), FontConfig::with_font);
    let canvas = CardCanvas::with_config(width, height, &font_config)?;

    CardComposer {
        canvas,
        width: width as f32,
        height: height as f32,
        layout,
        options,
        profile,
        character,
        stats,
        palette,
        resolver,
        images,
        regions: Vec::new(),
    }
    .run()
}

/// Reject data no phase could draw before any asset is fetched.
fn validate(character: &CharacterRecord) -> CardResult<ElementPalette> {
    if let Some(light_cone) = &character.light_cone {
        light_cone::star_start(light_cone.rarity)?;
    }
    for (index, relic) in character.relics.iter().enumerate() {
        crate::gradient::rarity_stops(relic.rarity)?;
        if relic.sub_affixes.len() > 4 {
            return Err(CardError::data_shape(format!(
                "relic {index} has {} sub-affixes, at most 4 are supported",
                relic.sub_affixes.len()
            )));
        }
    }
    ElementPalette::for_element(&character.element.name)
}

/// Assets every card needs, fetched in one parallel batch before drawing.
fn initial_batch(
    profile: &PlayerProfile,
    character: &CharacterRecord,
    options: &RenderOptions,
) -> Vec<AssetKey> {
    let mut keys = vec![
        avatar_key(profile, options),
        AssetKey::Background,
        AssetKey::CharacterCountIcon,
        AssetKey::FriendIcon,
        AssetKey::AchievementIcon,
        AssetKey::DrawCard(character.id.clone()),
        AssetKey::PathIcon(character.path.id.clone()),
        AssetKey::ElementIcon(character.element.id.clone()),
    ];
    if let Some(light_cone) = &character.light_cone {
        keys.push(AssetKey::LightCone(light_cone.id.clone()));
        keys.push(AssetKey::Star);
    }
    keys
}

fn avatar_key(profile: &PlayerProfile, options: &RenderOptions) -> AssetKey {
    match options.avatar_override.as_deref() {
        Some(file) if !file.is_empty() => AssetKey::CustomAvatar(file.to_string()),
        _ => AssetKey::Avatar(profile.avatar_ref.file_name().to_string()),
    }
}

struct CardComposer<'a> {
    canvas: CardCanvas,
    width: f32,
    height: f32,
    layout: &'a LayoutConstants,
    options: &'a RenderOptions,
    profile: &'a PlayerProfile,
    character: &'a CharacterRecord,
    stats: Vec<MergedStat>,
    palette: ElementPalette,
    resolver: &'a dyn AssetResolver,
    images: ImageSet,
    regions: Vec<PlacedRegion>,
}

impl CardComposer<'_> {
    fn run(mut self) -> CardResult<CardImage> {
        let character = self.character;
        for phase in Phase::ORDER {
            log::debug!("layout phase {phase:?}");
            match phase {
                Phase::Header => self.draw_header()?,
                Phase::LightCone => match character.light_cone.as_ref() {
                    Some(light_cone) => self.draw_light_cone(light_cone)?,
                    None => log::debug!("no light cone equipped, skipping panel"),
                },
                Phase::StatRows => self.draw_stat_rows()?,
                Phase::Skills => self.draw_skills()?,
                Phase::Relics => self.draw_relics()?,
                Phase::Footer => self.draw_footer()?,
            }
        }
        debug_assert_eq!(self.canvas.save_depth(), 0);

        Ok(CardImage {
            width: self.canvas.width(),
            height: self.canvas.height(),
            data: self.canvas.get_image_data(),
            regions: self.regions,
        })
    }
}
