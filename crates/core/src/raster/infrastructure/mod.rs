pub mod image_file_writer;
pub mod memory_image_decoder;
