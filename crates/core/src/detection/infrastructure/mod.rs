pub mod schemas;
pub mod vision_api_detector;
