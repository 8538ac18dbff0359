use super::{CardComposer, WHITE};
use crate::assets::{load_image, AssetKey};
use crate::card::{PlacedRegion, RegionKind};
use crate::display::{Secondary, StatDisplay};
use crate::error::CardResult;
use crate::fonts::FontFace;
use crate::text_layout::right_align;
use starcard_canvas::{RectParams, RoundRectParams, TextAlign};

const BONUS: &str = "#0ddb25";
const ROW_WIDTH: f32 = 650.0;

impl CardComposer<'_> {
    /// One row per merged stat, alternating backdrop shades.
    pub(super) fn draw_stat_rows(&mut self) -> CardResult<()> {
        let layout = self.layout;
        let value_right = layout.stat_value_right;
        let row_height = layout.stat_row_height - 10.0;

        let mut ctx = self.canvas.scoped();
        for (i, stat) in self.stats.iter().enumerate() {
            let y = layout.stat_row_y(i);
            let icon = load_image(
                self.resolver,
                &AssetKey::AttributeIcon(stat.icon_ref().file_name().to_string()),
            )?;

            ctx.begin_path();
            ctx.set_fill_style(if i % 2 == 0 {
                "rgba(0, 0, 0, .8)"
            } else {
                "rgba(20, 20, 20, .8)"
            })?;
            ctx.round_rect(&RoundRectParams::new(20.0, y, ROW_WIDTH, row_height, 10.0));
            ctx.fill();
            ctx.draw_image_scaled(&icon, &RectParams::square(35.0, y + 10.0, 45.0));

            ctx.set_font(&FontFace::SemiBold.css(35))?;
            ctx.set_fill_style(WHITE)?;
            ctx.set_text_align(TextAlign::Start);
            ctx.fill_text(&stat.name, 90.0, y + 45.0);

            let display = StatDisplay::for_stat(stat);
            ctx.set_text_align(TextAlign::End);
            ctx.fill_text(&display.primary, value_right, y + 30.0);

            ctx.set_font(&FontFace::Light.css(25))?;
            let bonus = match &display.secondary {
                Secondary::Base(base) => {
                    ctx.fill_text(base, value_right, y + 60.0);
                    None
                }
                Secondary::BaseWithBonus { base, bonus } => {
                    let x = right_align(layout.stat_base_value_right, ctx.measure_text(bonus).width);
                    ctx.fill_text(base, x, y + 60.0);
                    Some(bonus)
                }
                Secondary::Bonus(bonus) => Some(bonus),
            };
            if let Some(bonus) = bonus {
                ctx.set_fill_style(BONUS)?;
                ctx.fill_text(&format!("+{bonus}"), value_right, y + 60.0);
            }

            self.regions.push(PlacedRegion::new(
                RegionKind::StatRow(i),
                20.0,
                y,
                ROW_WIDTH,
                row_height,
            ));
        }
        Ok(())
    }
}
