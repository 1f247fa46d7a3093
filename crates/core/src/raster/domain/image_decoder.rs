use image::RgbImage;

/// Decodes an encoded image byte buffer into an RGB raster.
///
/// Taking bytes rather than a path lets the pipeline hand the detector and
/// the decoder the same buffer, read from disk exactly once.
pub trait ImageDecoder: Send {
    fn decode(&self, bytes: &[u8]) -> Result<RgbImage, Box<dyn std::error::Error>>;
}
