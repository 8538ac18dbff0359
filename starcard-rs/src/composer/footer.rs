//! Footer: layered level badge, path and element icons, title and attribution.

use super::{CardComposer, WHITE};
use crate::assets::AssetKey;
use crate::card::{PlacedRegion, RegionKind};
use crate::error::CardResult;
use crate::fonts::FontFace;
use starcard_canvas::{CanvasColor, RectParams, TextAlign};

const TEXT_WHITE: CanvasColor = CanvasColor::from_hex(0xffffff);

impl CardComposer<'_> {
    pub(super) fn draw_footer(&mut self) -> CardResult<()> {
        self.draw_level_badge()?;
        self.draw_path_and_element()?;
        self.draw_title()?;
        self.draw_attribution()
    }

    /// Shadow layers first, white last, each nudged up and left.
    fn layers(&self) -> [(CanvasColor, f32); 3] {
        [
            (self.palette.primary, 0.0),
            (self.palette.secondary, 1.0),
            (TEXT_WHITE, 2.0),
        ]
    }

    fn draw_level_badge(&mut self) -> CardResult<()> {
        let h = self.height;
        let level = self.character.level.to_string();
        let layers = self.layers();

        let mut ctx = self.canvas.scoped();
        ctx.set_text_align(TextAlign::Start);
        for (color, depth) in layers {
            ctx.set_fill_style_color(color);
            ctx.set_font(&FontFace::Light.css(50))?;
            ctx.fill_text("Lv. ", 65.0 - 2.0 * depth, h - 106.0 - 2.0 * depth);
            ctx.set_font(&FontFace::SemiBold.css(80))?;
            ctx.fill_text(&level, 135.0 - 5.0 * depth, h - 104.0 - 3.0 * depth);
        }
        drop(ctx);

        self.regions.push(PlacedRegion::new(
            RegionKind::LevelBadge,
            61.0,
            h - 170.0,
            220.0,
            70.0,
        ));
        Ok(())
    }

    fn draw_path_and_element(&mut self) -> CardResult<()> {
        let h = self.height;
        let path = self.images.get(&AssetKey::PathIcon(self.character.path.id.clone()))?;
        let element = self
            .images
            .get(&AssetKey::ElementIcon(self.character.element.id.clone()))?;

        let mut ctx = self.canvas.scoped();
        ctx.draw_image_scaled(path, &RectParams::square(300.0, h - 185.0, 100.0));
        ctx.draw_image_scaled(element, &RectParams::square(430.0, h - 185.0, 100.0));
        Ok(())
    }

    fn draw_title(&mut self) -> CardResult<()> {
        let (w, h) = (self.width, self.height);
        let title = format!(
            "{} | E{}",
            self.character.display_name(),
            self.character.rank
        );
        let layers = self.layers();

        let mut ctx = self.canvas.scoped();
        ctx.set_font(&FontFace::SemiBold.css(120))?;
        ctx.set_text_align(TextAlign::Center);
        for (color, depth) in layers {
            ctx.set_fill_style_color(color);
            ctx.fill_text(&title, w / 2.0 - 90.0 - 5.0 * depth, h - 60.0 - 5.0 * depth);
        }
        let width = ctx.measure_text(&title).width;
        drop(ctx);

        self.regions.push(PlacedRegion::new(
            RegionKind::Title,
            w / 2.0 - 100.0 - width / 2.0,
            h - 190.0,
            width + 10.0,
            130.0,
        ));
        Ok(())
    }

    fn draw_attribution(&mut self) -> CardResult<()> {
        let (w, h) = (self.width, self.height);
        let attribution = &self.options.attribution;

        let mut ctx = self.canvas.scoped();
        ctx.set_font(&FontFace::SemiBoldItalic.css(25))?;
        ctx.set_fill_style(WHITE)?;

        ctx.set_text_align(TextAlign::Start);
        ctx.set_global_alpha(0.5);
        ctx.fill_text(&attribution.generated_by, 20.0, h - 20.0);
        let generator_x = 20.0 + ctx.measure_text(&attribution.generated_by).width;
        ctx.set_global_alpha(1.0);
        ctx.fill_text(&attribution.generator, generator_x, h - 20.0);

        ctx.set_text_align(TextAlign::End);
        let made_in_x = w - 50.0 - ctx.measure_text(&attribution.made_with).width;
        ctx.set_global_alpha(0.5);
        ctx.fill_text(&attribution.made_in, made_in_x, h - 20.0);
        ctx.set_global_alpha(1.0);
        ctx.fill_text(&attribution.made_with, w - 50.0, h - 20.0);
        Ok(())
    }
}
