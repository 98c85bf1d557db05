//! 圖片預覽
//!
//! 預覽功能是可選的：沒有可用的檢視器時改用 `NoopPreviewer`，
//! 每張圖片記錄一筆錯誤，不影響後續流程

use super::selection::Selection;
use anyhow::{Context, Result, bail};
use log::{error, info, warn};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

pub trait Previewer {
    fn name(&self) -> &str;
    fn is_available(&self) -> bool;
    fn show(&self, image_path: &Path) -> Result<()>;
}

/// 使用系統預設的圖片檢視器
pub struct SystemPreviewer;

impl Previewer for SystemPreviewer {
    fn name(&self) -> &str {
        "system"
    }

    fn is_available(&self) -> bool {
        if cfg!(any(target_os = "macos", target_os = "windows")) {
            return true;
        }
        std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
    }

    fn show(&self, image_path: &Path) -> Result<()> {
        // 損壞或無法辨識的圖片不交給檢視器
        read_image_dimensions(image_path)?;

        open::that_detached(image_path)
            .with_context(|| format!("無法開啟圖片檢視器: {}", image_path.display()))
    }
}

/// 依檔案內容（而非副檔名）判斷格式並讀取圖片尺寸
pub fn read_image_dimensions(image_path: &Path) -> Result<(u32, u32)> {
    image::ImageReader::open(image_path)
        .with_context(|| format!("無法開啟圖片: {}", image_path.display()))?
        .with_guessed_format()
        .with_context(|| format!("無法讀取圖片: {}", image_path.display()))?
        .into_dimensions()
        .with_context(|| format!("無法辨識圖片格式: {}", image_path.display()))
}

/// 沒有可用檢視器時使用
pub struct NoopPreviewer;

impl Previewer for NoopPreviewer {
    fn name(&self) -> &str {
        "none"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn show(&self, _image_path: &Path) -> Result<()> {
        bail!("沒有可用的圖片檢視器，無法顯示圖片")
    }
}

/// 偵測可用的預覽方式
#[must_use]
pub fn default_previewer() -> Box<dyn Previewer> {
    let system = SystemPreviewer;
    if system.is_available() {
        Box::new(system)
    } else {
        warn!("找不到圖片顯示環境，將略過圖片預覽");
        Box::new(NoopPreviewer)
    }
}

/// 預覽結果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisplayResult {
    pub shown: usize,
    pub errors: usize,
}

/// 逐一顯示挑選的圖片；單張失敗只記錄錯誤
pub fn display_selection(
    selection: &Selection,
    previewer: &dyn Previewer,
    shutdown_signal: &AtomicBool,
) -> DisplayResult {
    let mut result = DisplayResult::default();
    info!("顯示挑選的圖片（{}）...", previewer.name());

    'outer: for (subfolder, images) in selection.iter() {
        info!("子資料夾: {}", subfolder.to_string_lossy());
        for image_path in images {
            if shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止顯示圖片");
                break 'outer;
            }

            info!(" - {}", image_path.display());
            match previewer.show(image_path) {
                Ok(()) => result.shown += 1,
                Err(e) => {
                    error!("無法顯示圖片 '{}': {e:#}", image_path.display());
                    result.errors += 1;
                }
            }
        }
    }

    result
}
