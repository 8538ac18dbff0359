//! Layout constants and canvas sizing.

/// Every fixed origin, step and inset the composer positions regions with.
///
/// Coordinates are either absolute from the top-left corner or measured
/// from the right/bottom edge where the field name says so.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConstants {
    /// Canvas width before the longest stat name is accounted for.
    pub base_width: u32,
    /// Extra width per character of the longest stat name.
    pub width_per_name_char: u32,
    /// Fixed height reserved for the header and footer.
    pub header_height: u32,
    pub bottom_padding: u32,

    pub nickname_max_chars: usize,
    pub light_cone_words_per_line: usize,
    pub light_cone_line_pitch: f32,

    /// Top of the first stat row.
    pub stat_rows_top: f32,
    pub stat_row_height: f32,
    /// Right edge primary and bonus values are aligned to.
    pub stat_value_right: f32,
    /// Right edge of the base value when a bonus follows it.
    pub stat_base_value_right: f32,

    pub skills_per_column: usize,
    /// Medallion centre distance from the right edge when relics are shown.
    pub skill_anchor_with_relics: f32,
    pub skill_anchor_without_relics: f32,
    pub skill_column_step: f32,
    pub skill_row_step: f32,
    /// Vertical offset of every column after the first.
    pub skill_column_drop: f32,
    /// Right inset of the level badge backdrop inside a medallion.
    pub skill_badge_right_inset: f32,
    /// Per extra level digit shift of the skill level label.
    pub skill_level_digit_offset: f32,

    pub relic_panel_width: f32,
    pub relic_step: f32,
    pub sub_affixes_per_row: usize,
    pub sub_affix_column_step: f32,
    pub sub_affix_row_step: f32,
    /// Per level digit shift of the relic level badge.
    pub relic_level_digit_offset: f32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            base_width: 2720,
            width_per_name_char: 10,
            header_height: 620,
            bottom_padding: 70,
            nickname_max_chars: 20,
            light_cone_words_per_line: 3,
            light_cone_line_pitch: 50.0,
            stat_rows_top: 475.0,
            stat_row_height: 80.0,
            stat_value_right: 655.0,
            stat_base_value_right: 638.0,
            skills_per_column: 5,
            skill_anchor_with_relics: 920.0,
            skill_anchor_without_relics: 115.0,
            skill_column_step: 200.0,
            skill_row_step: 250.0,
            skill_column_drop: 100.0,
            skill_badge_right_inset: 190.0,
            skill_level_digit_offset: 10.0,
            relic_panel_width: 780.0,
            relic_step: 220.0,
            sub_affixes_per_row: 2,
            sub_affix_column_step: 195.0,
            sub_affix_row_step: 95.0,
            relic_level_digit_offset: 20.0,
        }
    }
}

impl LayoutConstants {
    /// Canvas size for `stat_count` rows whose longest name has
    /// `longest_name` characters.
    pub fn canvas_size(&self, stat_count: usize, longest_name: usize) -> (u32, u32) {
        let width = self.base_width + self.width_per_name_char * longest_name as u32;
        let height = self.stat_row_height as u32 * stat_count as u32
            + self.header_height
            + self.bottom_padding;
        (width, height)
    }

    /// Top of stat row `index`.
    pub fn stat_row_y(&self, index: usize) -> f32 {
        self.stat_rows_top + self.stat_row_height * index as f32
    }

    /// Distance of the first medallion column from the right edge.
    pub fn skill_anchor(&self, has_relics: bool) -> f32 {
        if has_relics {
            self.skill_anchor_with_relics
        } else {
            self.skill_anchor_without_relics
        }
    }

    /// Cursor offsets of a medallion within the skill grid.
    pub fn skill_offset(&self, column: usize, row: usize) -> (f32, f32) {
        let drop = if column == 0 {
            0.0
        } else {
            self.skill_column_drop
        };
        (
            self.skill_column_step * column as f32,
            drop + self.skill_row_step * row as f32,
        )
    }

    /// Cursor offsets of sub-affix `slot` within a relic panel.
    pub fn sub_affix_offset(&self, slot: usize) -> (f32, f32) {
        let per_row = self.sub_affixes_per_row.max(1);
        (
            self.sub_affix_column_step * (slot % per_row) as f32,
            self.sub_affix_row_step * (slot / per_row) as f32,
        )
    }

    pub fn relic_y(&self, index: usize) -> f32 {
        self.relic_step * index as f32
    }
}
