pub mod polyline_highlighter;
pub mod stroke;
