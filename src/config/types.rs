use clap::Parser;
use std::path::PathBuf;

/// 預設的記錄檔名稱（寫在目前工作目錄）
pub const DEFAULT_LOG_FILE: &str = "random_photo_selector.log";

/// 命令列參數
#[derive(Debug, Clone, Parser)]
#[command(
    name = "random_photo_selector",
    version,
    about = "從根目錄下的每個子資料夾隨機挑選圖片"
)]
pub struct SelectorArgs {
    /// 包含圖片子資料夾的根目錄
    #[arg(long = "root_folder")]
    pub root_folder: PathBuf,

    /// 每個子資料夾要挑選的圖片數量
    #[arg(long = "num_images", default_value_t = 1, allow_negative_numbers = true)]
    pub num_images: i64,

    /// 使用系統預設的圖片檢視器顯示挑選結果
    #[arg(long = "display", default_value_t = false)]
    pub display: bool,

    /// 將挑選結果寫入 CSV 檔
    #[arg(long = "save_csv")]
    pub save_csv: Option<PathBuf>,

    /// 將挑選的圖片複製到此資料夾
    #[arg(long = "output_dir")]
    pub output_dir: Option<PathBuf>,

    /// 在輸出資料夾中保留原本的子資料夾結構
    #[arg(long = "maintain_structure", default_value_t = false)]
    pub maintain_structure: bool,

    /// 記錄檔路徑
    #[arg(long = "log_file", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// 不顯示進度條
    #[arg(long = "no_progress", default_value_t = false)]
    pub no_progress: bool,
}

/// 複製模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMode {
    /// 在輸出資料夾中建立同名子資料夾，同名檔案直接覆蓋
    PreserveStructure,
    /// 全部放在輸出資料夾，檔名衝突時加上 UUID
    Flat,
}

impl CopyMode {
    #[must_use]
    pub const fn from_flag(maintain_structure: bool) -> Self {
        if maintain_structure {
            Self::PreserveStructure
        } else {
            Self::Flat
        }
    }

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::PreserveStructure => "保留資料夾結構",
            Self::Flat => "單一資料夾",
        }
    }
}

/// 已驗證的執行設定
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    pub root_folder: PathBuf,
    pub num_images: usize,
    pub display: bool,
    pub csv_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub copy_mode: CopyMode,
    pub show_progress: bool,
}
