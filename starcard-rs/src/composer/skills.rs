use super::{CardComposer, PANEL, WHITE};
use crate::assets::{load_image, AssetKey};
use crate::card::{PlacedRegion, RegionKind};
use crate::error::CardResult;
use crate::fonts::FontFace;
use crate::model::SkillEntry;
use crate::text_layout::level_digit_offset;
use starcard_canvas::{ArcParams, RectParams, TextAlign};

const MEDALLION_RADIUS: f32 = 85.0;

impl CardComposer<'_> {
    /// Circular skill medallions in columns growing leftwards from the anchor.
    pub(super) fn draw_skills(&mut self) -> CardResult<()> {
        let character = self.character;
        let skills: Vec<&SkillEntry> = character.active_skills().collect();
        log::debug!(
            "{} of {} skills have icons",
            skills.len(),
            character.skills.len()
        );

        for (column, chunk) in skills.chunks(self.layout.skills_per_column.max(1)).enumerate() {
            for (row, skill) in chunk.iter().enumerate() {
                self.draw_medallion(skill, column, row)?;
            }
        }
        Ok(())
    }

    fn draw_medallion(&mut self, skill: &SkillEntry, column: usize, row: usize) -> CardResult<()> {
        let layout = self.layout;
        let anchor = layout.skill_anchor(!self.character.relics.is_empty());
        let (dx, dy) = layout.skill_offset(column, row);
        let (cx, cy) = (self.width - (anchor + dx), 115.0 + dy);

        let icon = load_image(
            self.resolver,
            &AssetKey::SkillIcon {
                character_id: self.character.id.clone(),
                skill_type: skill.skill_type,
            },
        )?;

        {
            let mut ctx = self.canvas.scoped();
            ctx.begin_path();
            ctx.arc(&ArcParams::circle(cx, cy, MEDALLION_RADIUS));
            ctx.set_fill_style(PANEL)?;
            ctx.fill();
            ctx.clip();

            ctx.begin_path();
            ctx.draw_image_scaled(
                &icon,
                &RectParams::square(self.width - (anchor + 75.0 + dx), 40.0 + dy, 150.0),
            );
            ctx.set_fill_style("#000")?;
            ctx.rect(&RectParams::new(
                self.width - (layout.skill_badge_right_inset + dx),
                160.0 + dy,
                150.0,
                40.0,
            ));
            ctx.fill();
        }

        let mut ctx = self.canvas.scoped();
        ctx.begin_path();
        ctx.arc(&ArcParams::circle(cx, cy, MEDALLION_RADIUS + 2.0));
        ctx.set_stroke_style(WHITE)?;
        ctx.set_line_width(5.0);
        ctx.stroke();

        ctx.set_font(&FontFace::SemiBold.css(30))?;
        ctx.set_fill_style(WHITE)?;
        ctx.set_text_align(TextAlign::Start);
        let level_x = self.width
            - (anchor + 15.0 + dx)
            - level_digit_offset(skill.level, layout.skill_level_digit_offset);
        ctx.fill_text(&format!("+{}", skill.level), level_x, 190.0 + dy);

        ctx.set_font(&FontFace::SemiBold.css(35))?;
        ctx.set_text_align(TextAlign::Center);
        ctx.set_stroke_style("#000")?;
        ctx.stroke_text(&skill.type_text, cx, 240.0 + dy);
        ctx.fill_text(&skill.type_text, cx, 240.0 + dy);
        drop(ctx);

        self.regions.push(PlacedRegion::new(
            RegionKind::SkillMedallion {
                column,
                row,
                skill_id: skill.id.clone(),
            },
            cx - MEDALLION_RADIUS,
            cy - MEDALLION_RADIUS,
            MEDALLION_RADIUS * 2.0,
            MEDALLION_RADIUS * 2.0,
        ));
        Ok(())
    }
}
