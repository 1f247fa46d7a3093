pub mod annotate_image_use_case;
pub mod run_logger;
