use image::RgbImage;

use crate::detection::domain::face::Face;

/// Draws face overlays onto a raster in place.
pub trait FaceHighlighter: Send {
    fn highlight(
        &self,
        image: &mut RgbImage,
        faces: &[Face],
    ) -> Result<(), Box<dyn std::error::Error>>;
}
