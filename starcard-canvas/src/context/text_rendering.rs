//! Text rendering operations for CardCanvas.

use super::CardCanvas;
use crate::error::CanvasResult;
use crate::font_parser::parse_font;
use crate::style::TextAlign;
use crate::text::{buffer_metrics, shape_text, TextMetrics};
use cosmic_text::Command;
use tiny_skia::{FillRule, Transform};

impl CardCanvas {
    /// Set the font from a CSS font string.
    pub fn set_font(&mut self, font: &str) -> CanvasResult<()> {
        self.state.font = parse_font(font)?;
        Ok(())
    }

    /// Set the text alignment.
    pub fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    /// Measure text with the current font.
    pub fn measure_text(&mut self, text: &str) -> TextMetrics {
        crate::text::measure_text(&mut self.font_system, text, &self.state.font)
    }

    /// Fill text with its alphabetic baseline at `y`.
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        log::debug!(target: "canvas", "fillText \"{}\" {} {}", text, x, y);
        self.render_text(text, x, y, true);
    }

    /// Stroke the outline of text with its alphabetic baseline at `y`.
    pub fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        log::debug!(target: "canvas", "strokeText \"{}\" {} {}", text, x, y);
        self.render_text(text, x, y, false);
    }

    /// Render text as vector glyph outlines.
    fn render_text(&mut self, text: &str, x: f32, y: f32, fill: bool) {
        if text.is_empty() {
            return;
        }
        let buffer = shape_text(&mut self.font_system, text, &self.state.font);
        let metrics = buffer_metrics(&buffer, &self.state.font);

        let base_x = x + self.state.text_align.x_offset(metrics.width);

        let style = if fill {
            self.state.fill_style.clone()
        } else {
            self.state.stroke_style.clone()
        };
        let clip_mask = self.create_clip_mask();
        let painted = self.with_paint_from_style(style, |canvas, paint| {
            for run in buffer.layout_runs() {
                for glyph in run.glyphs.iter() {
                    let physical = glyph.physical((base_x, y), 1.0);
                    let glyph_x = base_x + glyph.x + glyph.font_size * glyph.x_offset;
                    let glyph_y = y + glyph.y - glyph.font_size * glyph.y_offset;

                    let Some(commands) = canvas
                        .swash_cache
                        .get_outline_commands(&mut canvas.font_system, physical.cache_key)
                    else {
                        continue;
                    };

                    // Font outlines are y-up
                    let mut pb = tiny_skia::PathBuilder::new();
                    for cmd in commands {
                        match cmd {
                            Command::MoveTo(p) => pb.move_to(p.x, -p.y),
                            Command::LineTo(p) => pb.line_to(p.x, -p.y),
                            Command::QuadTo(ctrl, end) => {
                                pb.quad_to(ctrl.x, -ctrl.y, end.x, -end.y)
                            }
                            Command::CurveTo(c1, c2, end) => {
                                pb.cubic_to(c1.x, -c1.y, c2.x, -c2.y, end.x, -end.y)
                            }
                            Command::Close => pb.close(),
                        }
                    }
                    let Some(path) = pb.finish() else {
                        continue;
                    };

                    let transform = Transform::from_translate(glyph_x, glyph_y);
                    if fill {
                        canvas.pixmap.fill_path(
                            &path,
                            paint,
                            FillRule::Winding,
                            transform,
                            clip_mask.as_ref(),
                        );
                    } else {
                        let stroke = tiny_skia::Stroke {
                            width: canvas.state.line_width,
                            ..Default::default()
                        };
                        canvas.pixmap.stroke_path(
                            &path,
                            paint,
                            &stroke,
                            transform,
                            clip_mask.as_ref(),
                        );
                    }
                }
            }
        });
        if painted.is_none() {
            log::warn!(target: "canvas", "text skipped: style has no usable paint");
        }
    }
}
