use super::{CardComposer, PANEL, WHITE};
use crate::assets::{load_image, AssetKey};
use crate::card::{PlacedRegion, RegionKind};
use crate::error::CardResult;
use crate::fonts::FontFace;
use crate::gradient::relic_frame;
use crate::model::RelicEntry;
use crate::text_layout::digit_count;
use starcard_canvas::{RectParams, RoundRectParams, TextAlign};

impl CardComposer<'_> {
    /// Relic panels stacked down the right edge.
    pub(super) fn draw_relics(&mut self) -> CardResult<()> {
        let character = self.character;
        for (index, relic) in character.relics.iter().enumerate() {
            self.draw_relic(index, relic)?;
        }
        Ok(())
    }

    fn draw_relic(&mut self, index: usize, relic: &RelicEntry) -> CardResult<()> {
        let layout = self.layout;
        let w = self.width;
        let y = layout.relic_y(index);
        let panel_width = layout.relic_panel_width;

        let icon = load_image(
            self.resolver,
            &AssetKey::RelicIcon(relic.icon_ref.file_name().to_string()),
        )?;
        let main_icon = load_image(
            self.resolver,
            &AssetKey::AttributeIcon(relic.main_affix.icon_ref.file_name().to_string()),
        )?;

        {
            let mut ctx = self.canvas.scoped();
            ctx.begin_path();
            ctx.set_fill_style(PANEL)?;
            ctx.round_rect(&RoundRectParams::new(w - 800.0, 20.0 + y, panel_width, 200.0, 20.0));
            ctx.fill();
            ctx.clip();

            ctx.draw_image_scaled(&main_icon, &RectParams::square(w - 550.0, 40.0 + y, 80.0));

            ctx.set_font(&FontFace::Light.css(30))?;
            ctx.set_fill_style(WHITE)?;
            ctx.set_text_align(TextAlign::Start);
            for (slot, affix) in relic.sub_affixes.iter().enumerate() {
                let (dx, dy) = layout.sub_affix_offset(slot);
                let affix_icon = load_image(
                    self.resolver,
                    &AssetKey::AttributeIcon(affix.icon_ref.file_name().to_string()),
                )?;
                let (x, top) = (w - 410.0 + dx, 40.0 + y + dy);
                ctx.draw_image_scaled(&affix_icon, &RectParams::square(x, top, 45.0));
                ctx.fill_text(&format!("+{}", affix.display), w - 360.0 + dx, 73.0 + y + dy);
                self.regions.push(PlacedRegion::new(
                    RegionKind::SubAffix { relic: index, slot },
                    x,
                    top,
                    layout.sub_affix_column_step,
                    45.0,
                ));
            }

            ctx.set_font(&FontFace::Medium.css(40))?;
            ctx.set_text_align(TextAlign::Center);
            ctx.fill_text(&format!("+{}", relic.main_affix.display), w - 510.0, 175.0 + y);
        }

        let mut ctx = self.canvas.scoped();
        ctx.begin_path();
        ctx.set_fill_style_gradient(relic_frame(relic.rarity, y)?);
        ctx.round_rect(&RoundRectParams::new(w - 800.0, 20.0 + y, 200.0, 200.0, 20.0));
        ctx.fill();
        ctx.clip();
        ctx.draw_image_scaled(&icon, &RectParams::square(w - 775.0, 40.0 + y, 150.0));

        let badge_x =
            w - 660.0 - layout.relic_level_digit_offset * digit_count(relic.level) as f32 + 5.0;
        ctx.begin_path();
        ctx.set_fill_style(PANEL)?;
        ctx.round_rect(&RoundRectParams::new(badge_x, 160.0 + y, 150.0, 80.0, 20.0));
        ctx.fill();
        ctx.clip();
        ctx.set_font(&FontFace::Medium.css(40))?;
        ctx.set_fill_style(WHITE)?;
        ctx.set_text_align(TextAlign::End);
        ctx.fill_text(&format!("+{}", relic.level), w - 610.0, 205.0 + y);
        drop(ctx);

        self.regions.push(PlacedRegion::new(
            RegionKind::RelicPanel(index),
            w - 800.0,
            20.0 + y,
            panel_width,
            200.0,
        ));
        Ok(())
    }
}
