pub mod face;
pub mod face_detector;
pub mod landmark;
