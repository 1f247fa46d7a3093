pub mod face_highlighter;
pub mod polygon;
