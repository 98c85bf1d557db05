//! 圖片複製器
//!
//! 保留結構模式：輸出到 `<output>/<子資料夾>/<檔名>`，同名檔案直接覆蓋。
//! 單一資料夾模式：輸出到 `<output>/<檔名>`，同名時改名為 `<檔名>_<uuid>.<副檔名>`。

use super::selection::Selection;
use crate::config::CopyMode;
use crate::tools::{
    copy_with_metadata, create_progress_bar, ensure_directory_exists, unique_destination,
};
use anyhow::Result;
use log::{error, info, warn};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 複製結果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyResult {
    /// 成功複製的檔案數
    pub copied: usize,
    /// 因檔名衝突而改名的檔案數
    pub renamed: usize,
    /// 複製失敗的檔案數
    pub errors: usize,
}

pub struct ImageCopier {
    mode: CopyMode,
    shutdown_signal: Arc<AtomicBool>,
    show_progress: bool,
}

impl ImageCopier {
    #[must_use]
    pub const fn new(mode: CopyMode, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            mode,
            shutdown_signal,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// 複製挑選的圖片到輸出資料夾
    ///
    /// 無法建立輸出資料夾時回傳錯誤；單一檔案失敗只記錄並繼續
    pub fn copy_selection(&self, selection: &Selection, output_dir: &Path) -> Result<CopyResult> {
        ensure_directory_exists(output_dir)?;

        let mut result = CopyResult::default();
        let progress_bar = create_progress_bar(
            selection.total_images(),
            "複製圖片中...",
            self.show_progress,
        );

        for (subfolder, image_path) in selection.pairs() {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止複製");
                break;
            }

            match self.copy_one(subfolder, image_path, output_dir) {
                Ok((target_path, renamed)) => {
                    info!(
                        "已複製 '{}' 到 '{}'",
                        image_path.display(),
                        target_path.display()
                    );
                    result.copied += 1;
                    if renamed {
                        result.renamed += 1;
                    }
                }
                Err(e) => {
                    error!("複製 '{}' 失敗: {e:#}", image_path.display());
                    result.errors += 1;
                }
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        info!("已將挑選的圖片複製到 '{}'", output_dir.display());
        Ok(result)
    }

    fn copy_one(
        &self,
        subfolder: &OsStr,
        image_path: &Path,
        output_dir: &Path,
    ) -> Result<(PathBuf, bool)> {
        let file_name = image_path
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("路徑沒有檔名: {}", image_path.display()))?;

        let (target_path, renamed) = match self.mode {
            CopyMode::PreserveStructure => {
                let target_dir = output_dir.join(subfolder);
                ensure_directory_exists(&target_dir)?;
                (target_dir.join(file_name), false)
            }
            CopyMode::Flat => {
                let (target_path, renamed) = unique_destination(output_dir, file_name);
                if renamed {
                    info!(
                        "檔名衝突，將 '{}' 改名為 '{}'",
                        file_name.to_string_lossy(),
                        target_path
                            .file_name()
                            .unwrap_or_default()
                            .to_string_lossy()
                    );
                }
                (target_path, renamed)
            }
        };

        copy_with_metadata(image_path, &target_path)?;
        Ok((target_path, renamed))
    }
}
