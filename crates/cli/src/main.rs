use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use facemark_core::annotation::infrastructure::polyline_highlighter::PolylineHighlighter;
use facemark_core::detection::domain::face_detector::FaceDetector;
use facemark_core::detection::infrastructure::vision_api_detector::VisionApiDetector;
use facemark_core::pipeline::annotate_image_use_case::AnnotateImageUseCase;
use facemark_core::pipeline::run_logger::StdoutRunLogger;
use facemark_core::raster::infrastructure::image_file_writer::ImageFileWriter;
use facemark_core::raster::infrastructure::memory_image_decoder::MemoryImageDecoder;
use facemark_core::shared::constants::{API_KEY_ENV, DEFAULT_MAX_RESULTS, DETECTION_ENDPOINT};

/// Detects faces in the given image and draws polygons around them.
#[derive(Parser)]
#[command(name = "facemark")]
struct Cli {
    /// The image you'd like to detect faces in.
    input: PathBuf,

    /// The name of the output file.
    #[arg(long, default_value = "out.jpg")]
    out: PathBuf,

    /// The max results of face detection.
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: u32,

    /// Base URL of the face detection service.
    #[arg(long, default_value = DETECTION_ENDPOINT)]
    endpoint: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let detector = build_detector(&cli)?;
    let mut use_case = AnnotateImageUseCase::new(
        detector,
        Box::new(MemoryImageDecoder::new()),
        Box::new(PolylineHighlighter::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(StdoutRunLogger::new()),
        cli.max_results,
    );
    use_case.execute(&cli.input, &cli.out)?;

    log::info!("Output written to {}", cli.out.display());
    Ok(())
}

fn build_detector(cli: &Cli) -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
    let api_key = env::var(API_KEY_ENV)
        .map_err(|_| format!("{API_KEY_ENV} environment variable not set"))?;
    Ok(Box::new(VisionApiDetector::new(&cli.endpoint, &api_key)))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.max_results == 0 {
        return Err("Max results must be at least 1".into());
    }
    Ok(())
}
