use crate::detection::domain::face::Face;

/// Domain interface for face detection.
///
/// `image` is the encoded file content; decoding happens on the service
/// side. `max_results` caps how many faces the service returns.
/// Implementations may hold connection state, hence `&mut self`.
pub trait FaceDetector: Send {
    fn detect(
        &mut self,
        image: &[u8],
        max_results: u32,
    ) -> Result<Vec<Face>, Box<dyn std::error::Error>>;
}
