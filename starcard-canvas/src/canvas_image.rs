//! Decoded raster images ready to be drawn on a canvas.

use crate::error::{CanvasError, CanvasResult};
use tiny_skia::{IntSize, Pixmap};

/// A decoded image held as premultiplied RGBA.
#[derive(Clone, Debug)]
pub struct CanvasImage {
    pub(crate) pixmap: Pixmap,
}

impl CanvasImage {
    /// Decode PNG, JPEG or WebP bytes.
    pub fn decode(bytes: &[u8]) -> CanvasResult<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(rgba.into_raw(), width, height)
    }

    /// Wrap straight-alpha RGBA pixels (4 bytes per pixel).
    pub fn from_rgba(mut data: Vec<u8>, width: u32, height: u32) -> CanvasResult<Self> {
        let size = IntSize::from_wh(width, height)
            .ok_or(CanvasError::InvalidDimensions { width, height })?;
        if data.len() != width as usize * height as usize * 4 {
            return Err(CanvasError::ImageDecodeError(format!(
                "expected {} bytes of RGBA data for {width}x{height}, got {}",
                width as usize * height as usize * 4,
                data.len()
            )));
        }

        for pixel in data.chunks_exact_mut(4) {
            let a = pixel[3] as u16;
            if a < 255 {
                for channel in &mut pixel[..3] {
                    *channel = ((*channel as u16 * a + 127) / 255) as u8;
                }
            }
        }

        let pixmap = Pixmap::from_vec(data, size)
            .ok_or(CanvasError::InvalidDimensions { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }
}
