use image::Rgb;

/// Default base URL of the face detection service.
pub const DETECTION_ENDPOINT: &str = "https://vision.googleapis.com";

/// Environment variable holding the detection service API key.
pub const API_KEY_ENV: &str = "FACEMARK_API_KEY";

/// Default cap on faces returned by the detection service.
pub const DEFAULT_MAX_RESULTS: u32 = 4;

pub const FACE_BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const FACE_BOX_WIDTH: u32 = 5;

pub const MOUTH_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
pub const MOUTH_WIDTH: u32 = 2;
