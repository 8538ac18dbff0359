//! Header: background, splash art, player identity and counters.

use super::{avatar_key, CardComposer, WHITE};
use crate::assets::AssetKey;
use crate::card::{PlacedRegion, RegionKind};
use crate::error::CardResult;
use crate::fonts::FontFace;
use crate::text_layout::truncate_label;
use starcard_canvas::{ArcParams, RectParams, RoundRectParams, TextAlign};

impl CardComposer<'_> {
    pub(super) fn draw_header(&mut self) -> CardResult<()> {
        let background = self.images.get(&AssetKey::Background)?;
        let draw_card = self.images.get(&AssetKey::DrawCard(self.character.id.clone()))?;
        {
            let mut ctx = self.canvas.scoped();
            ctx.draw_image(background, 0.0, 0.0);
            ctx.draw_image_scaled(draw_card, &RectParams::new(300.0, -400.0, 2000.0, 2000.0));
            ctx.set_font(&FontFace::SemiBold.css(30))?;
            ctx.set_fill_style(WHITE)?;
            ctx.set_text_align(TextAlign::Center);
            ctx.fill_text(&self.profile.uid, 110.0, 220.0);
        }

        self.draw_avatar()?;
        self.draw_nickname()?;
        self.draw_levels()?;
        self.draw_counters()
    }

    fn draw_avatar(&mut self) -> CardResult<()> {
        let avatar = self.images.get(&avatar_key(self.profile, self.options))?;

        let mut ctx = self.canvas.scoped();
        ctx.begin_path();
        ctx.arc(&ArcParams::circle(105.0, 100.0, 70.0));
        ctx.set_stroke_style(WHITE)?;
        ctx.set_line_width(3.0);
        ctx.stroke();
        ctx.clip();
        ctx.draw_image_scaled(avatar, &RectParams::square(35.0, 30.0, 140.0));
        drop(ctx);

        self.regions.push(PlacedRegion::new(
            RegionKind::Avatar,
            35.0,
            30.0,
            140.0,
            140.0,
        ));
        Ok(())
    }

    fn draw_nickname(&mut self) -> CardResult<()> {
        let nickname = truncate_label(&self.profile.nickname, self.layout.nickname_max_chars);

        let mut ctx = self.canvas.scoped();
        ctx.begin_path();
        ctx.set_fill_style("rgba(0, 0, 0, .5)")?;
        ctx.set_line_width(1.0);
        ctx.round_rect(&RoundRectParams::new(185.0, 30.0, 330.0, 40.0, 15.0));
        ctx.fill();
        ctx.stroke();
        ctx.clip();
        ctx.set_font(&FontFace::SemiBold.css(30))?;
        ctx.set_fill_style(WHITE)?;
        ctx.fill_text(&nickname, 195.0, 60.0);
        drop(ctx);

        self.regions.push(PlacedRegion::new(
            RegionKind::Nickname,
            185.0,
            30.0,
            330.0,
            40.0,
        ));
        Ok(())
    }

    fn draw_levels(&mut self) -> CardResult<()> {
        let labels = [
            ("Level", 195.0, self.profile.level, 260.0),
            ("Equilibrium", 355.0, self.profile.world_level, 490.0),
        ];

        let mut ctx = self.canvas.scoped();
        ctx.set_fill_style(WHITE)?;
        for (label, label_x, value, value_x) in labels {
            ctx.set_font(&FontFace::Light.css(25))?;
            ctx.set_global_alpha(0.8);
            ctx.fill_text(label, label_x, 100.0);
            ctx.set_font(&FontFace::SemiBold.css(25))?;
            ctx.set_global_alpha(1.0);
            ctx.fill_text(&value.to_string(), value_x, 100.0);
        }
        Ok(())
    }

    fn draw_counters(&mut self) -> CardResult<()> {
        let counters = [
            (AssetKey::FriendIcon, self.profile.friend_count, 195.0),
            (AssetKey::CharacterCountIcon, self.profile.avatar_count, 305.0),
            (AssetKey::AchievementIcon, self.profile.achievement_count, 415.0),
        ];

        for (key, count, x) in counters {
            let icon = self.images.get(&key)?;
            let mut ctx = self.canvas.scoped();
            ctx.set_global_alpha(0.7);
            ctx.draw_image_scaled(icon, &RectParams::square(x, 130.0, 30.0));
            ctx.set_global_alpha(1.0);
            ctx.set_font(&FontFace::SemiBold.css(25))?;
            ctx.set_fill_style(WHITE)?;
            ctx.fill_text(&count.to_string(), x + 38.0, 154.0);
        }
        Ok(())
    }
}
