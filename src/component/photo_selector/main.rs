use super::csv_reporter::save_selection_csv;
use super::image_copier::{CopyResult, ImageCopier};
use super::previewer::{DisplayResult, Previewer, default_previewer, display_selection};
use super::sampler::ImageSelector;
use super::selection::Selection;
use crate::config::SelectorConfig;
use anyhow::Result;
use console::style;
use log::{error, info};
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 一次執行的摘要
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 掃描的子資料夾數
    pub subfolders_scanned: usize,
    /// 有挑選到圖片的子資料夾數
    pub subfolders_selected: usize,
    /// 挑選的圖片總數
    pub images_selected: usize,
    /// CSV 寫入的資料列數（未啟用或失敗時為 None）
    pub csv_rows: Option<usize>,
    pub display: Option<DisplayResult>,
    /// 複製結果（未啟用或無法建立輸出資料夾時為 None）
    pub copy: Option<CopyResult>,
}

/// 隨機挑選圖片元件
pub struct PhotoSelector {
    config: SelectorConfig,
    shutdown_signal: Arc<AtomicBool>,
    previewer: Option<Box<dyn Previewer>>,
}

impl PhotoSelector {
    #[must_use]
    pub const fn new(config: SelectorConfig, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
            previewer: None,
        }
    }

    /// 指定預覽方式；未指定時在需要顯示時自動偵測
    #[must_use]
    pub fn with_previewer(mut self, previewer: Box<dyn Previewer>) -> Self {
        self.previewer = Some(previewer);
        self
    }

    /// 以未指定種子的亂數來源執行
    pub fn run(&self) -> Result<(Selection, RunSummary)> {
        self.run_with_rng(&mut rand::rng())
    }

    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(Selection, RunSummary)> {
        let config = &self.config;
        info!(
            "從 '{}' 的每個子資料夾挑選 {} 張圖片...",
            config.root_folder.display(),
            config.num_images
        );

        let selector = ImageSelector::new(config.num_images, Arc::clone(&self.shutdown_signal))
            .with_progress(config.show_progress);
        let (selection, subfolders_scanned) =
            selector.select_random_images(&config.root_folder, rng)?;

        let mut summary = RunSummary {
            subfolders_scanned,
            subfolders_selected: selection.len(),
            images_selected: selection.total_images(),
            ..RunSummary::default()
        };

        if selection.is_empty() {
            info!("沒有挑選到任何圖片，結束");
            return Ok((selection, summary));
        }

        if config.display {
            let result = match &self.previewer {
                Some(previewer) => {
                    display_selection(&selection, previewer.as_ref(), &self.shutdown_signal)
                }
                None => {
                    let previewer = default_previewer();
                    display_selection(&selection, previewer.as_ref(), &self.shutdown_signal)
                }
            };
            summary.display = Some(result);
        }

        if let Some(csv_path) = &config.csv_path {
            match save_selection_csv(&selection, csv_path) {
                Ok(rows) => summary.csv_rows = Some(rows),
                Err(e) => error!("無法儲存 CSV 檔案 '{}': {e:#}", csv_path.display()),
            }
        }

        if let Some(output_dir) = &config.output_dir {
            info!(
                "複製圖片到 '{}'（{}）",
                output_dir.display(),
                config.copy_mode.display_name()
            );
            let copier = ImageCopier::new(config.copy_mode, Arc::clone(&self.shutdown_signal))
                .with_progress(config.show_progress);
            match copier.copy_selection(&selection, output_dir) {
                Ok(result) => summary.copy = Some(result),
                Err(e) => error!("無法複製圖片到 '{}': {e:#}", output_dir.display()),
            }
        }

        info!("隨機挑選圖片完成");
        Ok((selection, summary))
    }

    pub fn print_summary(&self, summary: &RunSummary) {
        println!();
        println!("{}", style("=== 挑選結果 ===").cyan().bold());
        println!("  掃描子資料夾: {} 個", summary.subfolders_scanned);
        println!(
            "  挑選圖片: {} 張（來自 {} 個子資料夾）",
            style(summary.images_selected).green(),
            summary.subfolders_selected
        );

        if let Some(display) = &summary.display {
            println!("  已顯示: {} 張", display.shown);
            if display.errors > 0 {
                println!("  顯示失敗: {} 張", style(display.errors).red());
            }
        }

        if let Some(csv_path) = &self.config.csv_path {
            match summary.csv_rows {
                Some(rows) => println!("  CSV: {} ({} 列)", csv_path.display(), rows),
                None if summary.images_selected > 0 => {
                    println!("  CSV: {}", style("寫入失敗").red());
                }
                None => {}
            }
        }

        if let Some(copy) = &summary.copy {
            println!("  已複製: {} 張", style(copy.copied).green());
            if copy.renamed > 0 {
                println!("  改名（檔名衝突）: {} 張", style(copy.renamed).yellow());
            }
            if copy.errors > 0 {
                println!("  複製失敗: {} 張", style(copy.errors).red());
            }
        }

        info!(
            "挑選完成 - 子資料夾: {}, 圖片: {}",
            summary.subfolders_selected, summary.images_selected
        );
    }
}
