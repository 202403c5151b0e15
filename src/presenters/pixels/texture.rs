use std::error::Error;
use std::fmt;

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::pixel_size::PixelSize;

const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureUploadError {
    SizeMismatch {
        texture_size: PixelSize,
        buffer_size: PixelSize,
    },
}

impl fmt::Display for TextureUploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                texture_size,
                buffer_size,
            } => write!(
                f,
                "buffer is {}x{} but texture is {}x{}",
                buffer_size.width(),
                buffer_size.height(),
                texture_size.width(),
                texture_size.height()
            ),
        }
    }
}

impl Error for TextureUploadError {}

/// CPU-side RGBA copy of the last committed render at one resolution.
///
/// Rows are stored bottom-up: raster row 0 lands on the last texture row, so
/// the texture is the raster mirrored vertically. Starts opaque black.
/// `revision` advances on every upload so the presenter only copies into the
/// pixels frame when something changed.
#[derive(Debug, Clone)]
pub struct FrameTexture {
    size: PixelSize,
    rgba: Vec<u8>,
    revision: u64,
}

impl FrameTexture {
    #[must_use]
    pub fn new(size: PixelSize) -> Self {
        let mut rgba = vec![0; size.pixel_count() * RGBA_BYTES_PER_PIXEL];
        for pixel in rgba.chunks_exact_mut(RGBA_BYTES_PER_PIXEL) {
            pixel[3] = 255;
        }

        Self {
            size,
            rgba,
            revision: 0,
        }
    }

    pub fn upload(&mut self, buffer: &PixelBuffer) -> Result<(), TextureUploadError> {
        if buffer.size() != self.size {
            return Err(TextureUploadError::SizeMismatch {
                texture_size: self.size,
                buffer_size: buffer.size(),
            });
        }

        let dst_stride = self.size.width() as usize * RGBA_BYTES_PER_PIXEL;
        let src_rows = buffer.buffer().chunks_exact(buffer.row_stride());
        let dst_rows = self.rgba.chunks_exact_mut(dst_stride).rev();

        for (src_row, dst_row) in src_rows.zip(dst_rows) {
            let src = src_row.chunks_exact(BYTES_PER_PIXEL);
            for (src_pixel, dst_pixel) in src.zip(dst_row.chunks_exact_mut(RGBA_BYTES_PER_PIXEL)) {
                dst_pixel[..BYTES_PER_PIXEL].copy_from_slice(src_pixel);
            }
        }

        self.revision += 1;

        Ok(())
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    #[test]
    fn test_new_texture_is_opaque_black() {
        let texture = FrameTexture::new(PixelSize::new(2, 2).unwrap());

        assert_eq!(texture.rgba(), &[0u8, 0, 0, 255].repeat(4)[..]);
        assert_eq!(texture.revision(), 0);
    }

    #[test]
    fn test_upload_mirrors_rows_with_opaque_alpha() {
        let size = PixelSize::new(2, 2).unwrap();
        let buffer = PixelBuffer::from_data(
            size,
            vec![
                255, 0, 0, // red
                0, 255, 0, // green
                0, 0, 255, // blue
                255, 255, 255, // white
            ],
        )
        .unwrap();
        let mut texture = FrameTexture::new(size);

        texture.upload(&buffer).unwrap();

        assert_eq!(
            texture.rgba(),
            &[0, 0, 255, 255, 255, 255, 255, 255, 255, 0, 0, 255, 0, 255, 0, 255]
        );
        assert_eq!(texture.revision(), 1);
    }

    #[test]
    fn test_reupload_replaces_contents() {
        let size = PixelSize::new(1, 2).unwrap();
        let mut buffer = PixelBuffer::new(size);
        let mut texture = FrameTexture::new(size);

        texture.upload(&buffer).unwrap();
        buffer
            .set_pixel(Point { x: 0, y: 1 }, Colour { r: 9, g: 8, b: 7 })
            .unwrap();
        texture.upload(&buffer).unwrap();

        assert_eq!(texture.rgba(), &[9, 8, 7, 255, 0, 0, 0, 255]);
        assert_eq!(texture.revision(), 2);
    }

    #[test]
    fn test_top_raster_row_is_shown_at_bottom() {
        let size = PixelSize::new(3, 4).unwrap();
        let mut buffer = PixelBuffer::new(size);
        buffer
            .set_pixel(Point { x: 1, y: 0 }, Colour { r: 1, g: 2, b: 3 })
            .unwrap();
        let mut texture = FrameTexture::new(size);

        texture.upload(&buffer).unwrap();

        let stride = 3 * RGBA_BYTES_PER_PIXEL;
        let last_row = &texture.rgba()[3 * stride..];
        assert_eq!(&last_row[4..8], &[1, 2, 3, 255]);
        assert!(
            texture.rgba()[..3 * stride]
                .chunks_exact(4)
                .all(|p| p == [0, 0, 0, 255])
        );
    }

    #[test]
    fn test_mismatched_upload_is_rejected() {
        let mut texture = FrameTexture::new(PixelSize::new(4, 4).unwrap());
        let buffer = PixelBuffer::new(PixelSize::new(2, 2).unwrap());

        let err = texture.upload(&buffer).unwrap_err();

        assert_eq!(err.to_string(), "buffer is 2x2 but texture is 4x4");
        assert_eq!(texture.revision(), 0);
        assert!(texture.rgba().chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
    }
}
