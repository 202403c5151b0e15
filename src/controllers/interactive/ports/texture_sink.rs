use crate::controllers::interactive::data::resolution::Resolution;
use crate::core::data::pixel_buffer::PixelBuffer;

/// GPU-side mirror of the two raster buffers.
///
/// Only committed renders reach `upload`; a render superseded by a newer
/// generation never does.
pub trait TextureSink {
    fn upload(&mut self, resolution: Resolution, buffer: &PixelBuffer);
}
