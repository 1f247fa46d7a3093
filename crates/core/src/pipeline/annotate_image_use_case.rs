use std::fs;
use std::path::Path;

use crate::annotation::domain::face_highlighter::FaceHighlighter;
use crate::detection::domain::face_detector::FaceDetector;
use crate::pipeline::run_logger::RunLogger;
use crate::raster::domain::image_decoder::ImageDecoder;
use crate::raster::domain::image_writer::ImageWriter;

/// Single-image annotation pipeline: read → detect → highlight → write.
///
/// The input file is read into memory once; the detector and the decoder
/// both consume that same buffer.
pub struct AnnotateImageUseCase {
    detector: Box<dyn FaceDetector>,
    decoder: Box<dyn ImageDecoder>,
    highlighter: Box<dyn FaceHighlighter>,
    writer: Box<dyn ImageWriter>,
    logger: Box<dyn RunLogger>,
    max_results: u32,
}

impl AnnotateImageUseCase {
    pub fn new(
        detector: Box<dyn FaceDetector>,
        decoder: Box<dyn ImageDecoder>,
        highlighter: Box<dyn FaceHighlighter>,
        writer: Box<dyn ImageWriter>,
        logger: Box<dyn RunLogger>,
        max_results: u32,
    ) -> Self {
        Self {
            detector,
            decoder,
            highlighter,
            writer,
            logger,
            max_results,
        }
    }

    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let bytes = fs::read(input_path)?;

        let faces = self.detector.detect(&bytes, self.max_results)?;
        let suffix = if faces.len() == 1 { "" } else { "s" };
        self.logger
            .info(&format!("Found {} face{}", faces.len(), suffix));
        self.logger
            .info(&format!("Writing to file {}", output_path.display()));

        let mut image = self.decoder.decode(&bytes)?;
        self.highlighter.highlight(&mut image, &faces)?;
        self.writer.write(output_path, &image)?;

        Ok(())
    }
}
