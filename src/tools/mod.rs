mod file_tools;
mod image_scanner;
mod path_validator;
mod progress;

pub use file_tools::{copy_with_metadata, unique_destination};
pub use image_scanner::{list_image_files, list_subdirectories};
pub use path_validator::{PathError, ensure_directory_exists, validate_directory_exists};
pub use progress::create_progress_bar;
