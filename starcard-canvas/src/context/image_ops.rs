//! Image drawing, pixel data, and PNG output operations for CardCanvas.

use super::CardCanvas;
use crate::error::CanvasResult;
use crate::geometry::RectParams;
use crate::canvas_image::CanvasImage;
use tiny_skia::Transform;

impl CardCanvas {
    /// Draw an image at its natural size with its top-left corner at (dx, dy).
    pub fn draw_image(&mut self, image: &CanvasImage, dx: f32, dy: f32) {
        let dest = RectParams::new(dx, dy, image.width() as f32, image.height() as f32);
        self.draw_image_scaled(image, &dest);
    }

    /// Draw an image stretched to fill `dest`.
    pub fn draw_image_scaled(&mut self, image: &CanvasImage, dest: &RectParams) {
        log::debug!(
            target: "canvas",
            "drawImage {}x{} into {:?}",
            image.width(),
            image.height(),
            dest
        );
        if dest.width <= 0.0 || dest.height <= 0.0 {
            return;
        }
        let paint = tiny_skia::PixmapPaint {
            opacity: self.state.global_alpha,
            quality: tiny_skia::FilterQuality::Bilinear,
            ..Default::default()
        };

        let scale_x = dest.width / image.width() as f32;
        let scale_y = dest.height / image.height() as f32;
        let transform = Transform::from_translate(dest.x, dest.y).pre_scale(scale_x, scale_y);

        let clip_mask = self.create_clip_mask();
        self.pixmap.draw_pixmap(
            0,
            0,
            image.pixmap.as_ref(),
            &paint,
            transform,
            clip_mask.as_ref(),
        );
    }

    /// Straight-alpha RGBA pixels of the whole canvas, row-major.
    pub fn get_image_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }

    /// Export the canvas as PNG data.
    pub fn to_png(&self) -> CanvasResult<Vec<u8>> {
        encode_png(&self.get_image_data(), self.width, self.height)
    }
}

/// Encode straight-alpha RGBA pixels as an 8-bit PNG.
pub fn encode_png(data: &[u8], width: u32, height: u32) -> CanvasResult<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(data)?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_canvas;
    use crate::geometry::RectParams;
    use crate::canvas_image::CanvasImage;

    #[test]
    fn test_draw_image_scaled_covers_dest() {
        let mut canvas = test_canvas(40, 40);
        let red = CanvasImage::from_rgba([255, 0, 0, 255].repeat(4), 2, 2).unwrap();
        canvas.draw_image_scaled(&red, &RectParams::new(10.0, 10.0, 20.0, 20.0));

        let data = canvas.get_image_data();
        let at = |x: usize, y: usize| &data[(y * 40 + x) * 4..(y * 40 + x) * 4 + 4];
        assert_eq!(at(20, 20), &[255, 0, 0, 255]);
        assert_eq!(at(5, 5), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_draw_image_respects_clip() {
        let mut canvas = test_canvas(20, 20);
        canvas.begin_path();
        canvas.rect(&RectParams::new(0.0, 0.0, 10.0, 20.0));
        canvas.clip();
        let blue = CanvasImage::from_rgba([0, 0, 255, 255].repeat(400), 20, 20).unwrap();
        canvas.draw_image(&blue, 0.0, 0.0);

        let data = canvas.get_image_data();
        assert_eq!(&data[(5 * 20 + 5) * 4..(5 * 20 + 5) * 4 + 4], &[0, 0, 255, 255]);
        assert_eq!(data[(5 * 20 + 15) * 4 + 3], 0);
    }

    #[test]
    fn test_to_png_signature() {
        let canvas = test_canvas(3, 2);
        let png = canvas.to_png().unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
    }
}
