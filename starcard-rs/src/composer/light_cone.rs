//! Equipped light cone: art, rarity stars, wrapped title and level.

use super::{CardComposer, WHITE};
use crate::assets::AssetKey;
use crate::card::{PlacedRegion, RegionKind};
use crate::error::{CardError, CardResult};
use crate::fonts::FontFace;
use crate::model::LightConeRecord;
use crate::text_layout::title_lines;
use starcard_canvas::{RectParams, TextAlign};

const STAR_SIZE: f32 = 35.0;
const STAR_STEP: f32 = 25.0;

/// X of the first rarity star, shifted so every tier stays visually centred.
pub(super) fn star_start(rarity: u8) -> CardResult<f32> {
    match rarity {
        5 => Ok(25.0),
        4 => Ok(35.0),
        3 => Ok(45.0),
        other => Err(CardError::data_shape(format!(
            "light cone rarity {other} is outside 3..=5"
        ))),
    }
}

impl CardComposer<'_> {
    pub(super) fn draw_light_cone(&mut self, light_cone: &LightConeRecord) -> CardResult<()> {
        let art = self.images.get(&AssetKey::LightCone(light_cone.id.clone()))?;
        let star = self.images.get(&AssetKey::Star)?;
        let start = star_start(light_cone.rarity)?;

        let mut ctx = self.canvas.scoped();
        ctx.draw_image_scaled(art, &RectParams::square(20.0, 270.0, 150.0));
        self.regions.push(PlacedRegion::new(
            RegionKind::LightConeArt,
            20.0,
            270.0,
            150.0,
            150.0,
        ));

        for i in 0..usize::from(light_cone.rarity) {
            let x = start + STAR_STEP * i as f32;
            ctx.draw_image_scaled(star, &RectParams::square(x, 400.0, STAR_SIZE));
            self.regions.push(PlacedRegion::new(
                RegionKind::LightConeStar(i),
                x,
                400.0,
                STAR_SIZE,
                STAR_SIZE,
            ));
        }

        ctx.set_font(&FontFace::SemiBold.css(40))?;
        ctx.set_fill_style(WHITE)?;
        ctx.set_text_align(TextAlign::Start);

        let pitch = self.layout.light_cone_line_pitch;
        let mut break_height = 0.0;
        for (i, line) in title_lines(&light_cone.name, self.layout.light_cone_words_per_line).enumerate() {
            let y = 310.0 + break_height;
            let width = ctx.measure_text(&line).width;
            ctx.fill_text(&line, 190.0, y);
            self.regions.push(PlacedRegion::new(
                RegionKind::LightConeTitleLine(i),
                190.0,
                y - 40.0,
                width,
                pitch,
            ));
            break_height += pitch;
        }

        ctx.set_global_alpha(0.8);
        ctx.set_font(&FontFace::Light.css(30))?;
        ctx.fill_text("Lv. ", 190.0, 320.0 + break_height);
        ctx.set_global_alpha(1.0);
        ctx.set_font(&FontFace::SemiBold.css(30))?;
        ctx.fill_text(&light_cone.level.to_string(), 230.0, 320.0 + break_height);
        Ok(())
    }
}
