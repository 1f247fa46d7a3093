pub mod annotation;
pub mod detection;
pub mod pipeline;
pub mod raster;
pub mod shared;
