use image::RgbImage;

use crate::raster::domain::image_decoder::ImageDecoder;

/// Decodes in-memory bytes with the `image` crate, guessing the format
/// from the content.
pub struct MemoryImageDecoder;

impl MemoryImageDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MemoryImageDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDecoder for MemoryImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<RgbImage, Box<dyn std::error::Error>> {
        Ok(image::load_from_memory(bytes)?.to_rgb8())
    }
}
