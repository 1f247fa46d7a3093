use std::path::Path;

use image::RgbImage;

/// Writes a raster to an image file; format follows the path's extension.
pub trait ImageWriter: Send {
    fn write(&self, path: &Path, image: &RgbImage) -> Result<(), Box<dyn std::error::Error>>;
}
