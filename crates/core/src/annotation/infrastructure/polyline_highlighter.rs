use image::RgbImage;

use crate::annotation::domain::face_highlighter::FaceHighlighter;
use crate::annotation::domain::polygon;
use crate::annotation::infrastructure::stroke::stroke_polyline;
use crate::detection::domain::face::Face;
use crate::shared::constants::{FACE_BOX_COLOR, FACE_BOX_WIDTH, MOUTH_COLOR, MOUTH_WIDTH};

/// Strokes a green closed polygon around each face's bounding quadrilateral
/// and a blue closed polygon through its mouth landmarks.
///
/// Mouth points are stroked in encounter order; a face without any mouth
/// landmarks is an error rather than a silent skip.
pub struct PolylineHighlighter;

impl PolylineHighlighter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PolylineHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceHighlighter for PolylineHighlighter {
    fn highlight(
        &self,
        image: &mut RgbImage,
        faces: &[Face],
    ) -> Result<(), Box<dyn std::error::Error>> {
        for face in faces {
            let face_box = polygon::close(&face.box_points())?;
            stroke_polyline(image, &face_box, FACE_BOX_WIDTH, FACE_BOX_COLOR);

            let mouth = polygon::close(&face.mouth_points())?;
            stroke_polyline(image, &mouth, MOUTH_WIDTH, MOUTH_COLOR);
        }
        Ok(())
    }
}
