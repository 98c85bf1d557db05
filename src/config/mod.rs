pub mod file_type;
pub mod load;
pub mod types;

pub use file_type::{IMAGE_EXTENSIONS, is_image_extension};
pub use types::{CopyMode, DEFAULT_LOG_FILE, SelectorArgs, SelectorConfig};
