use crate::config::types::{CopyMode, SelectorArgs, SelectorConfig};
use crate::tools::validate_directory_exists;
use anyhow::{Context, Result, bail};

impl SelectorConfig {
    /// 從命令列參數建立設定，根目錄與數量不合法時回傳錯誤
    ///
    /// 驗證只讀取檔案系統，不會建立任何檔案
    pub fn from_args(args: SelectorArgs) -> Result<Self> {
        validate_directory_exists(&args.root_folder).with_context(|| {
            format!(
                "指定的根資料夾不存在或不是資料夾: {}",
                args.root_folder.display()
            )
        })?;

        if args.num_images < 1 {
            bail!("每個資料夾挑選的圖片數量至少為 1（收到 {}）", args.num_images);
        }
        let num_images =
            usize::try_from(args.num_images).context("圖片數量超出此平台可支援的範圍")?;

        Ok(Self {
            root_folder: args.root_folder,
            num_images,
            display: args.display,
            csv_path: args.save_csv,
            output_dir: args.output_dir,
            copy_mode: CopyMode::from_flag(args.maintain_structure),
            show_progress: !args.no_progress,
        })
    }
}
