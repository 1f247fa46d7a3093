use std::path::Path;

use image::RgbImage;

use crate::raster::domain::image_writer::ImageWriter;

/// Writes a raster with the `image` crate; the output format is inferred
/// from the path's extension.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, image: &RgbImage) -> Result<(), Box<dyn std::error::Error>> {
        image.save(path)?;
        Ok(())
    }
}
