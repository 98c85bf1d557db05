//! 隨機挑選圖片元件
//!
//! 掃描根目錄下的每個子資料夾，隨機挑選圖片後依設定顯示、匯出 CSV 或複製

mod csv_reporter;
mod image_copier;
mod main;
mod previewer;
mod sampler;
mod selection;

pub use csv_reporter::{CSV_HEADER, read_selection_csv, save_selection_csv};
pub use image_copier::{CopyResult, ImageCopier};
pub use main::{PhotoSelector, RunSummary};
pub use previewer::{
    DisplayResult, NoopPreviewer, Previewer, SystemPreviewer, default_previewer, display_selection,
    read_image_dimensions,
};
pub use sampler::{ImageSelector, sample_images, select_from_subfolder};
pub use selection::{Selection, SubfolderSample};
