//! CSV 匯出
//!
//! 格式：UTF-8、逗號分隔，標題列 `Subfolder,Image Path`

use super::selection::Selection;
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CSV_HEADER: [&str; 2] = ["Subfolder", "Image Path"];

#[derive(Debug, Serialize, Deserialize)]
struct SelectionRow {
    #[serde(rename = "Subfolder")]
    subfolder: String,
    #[serde(rename = "Image Path")]
    image_path: String,
}

/// 將挑選結果寫入 CSV，檔案已存在時覆蓋，回傳寫入的資料列數
pub fn save_selection_csv(selection: &Selection, csv_path: &Path) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(csv_path)
        .with_context(|| format!("無法建立 CSV 檔案: {}", csv_path.display()))?;

    writer.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for (subfolder, image_path) in selection.pairs() {
        writer.serialize(SelectionRow {
            subfolder: subfolder.to_string_lossy().to_string(),
            image_path: image_path.to_string_lossy().to_string(),
        })?;
        rows += 1;
    }

    writer
        .flush()
        .with_context(|| format!("無法寫入 CSV 檔案: {}", csv_path.display()))?;

    info!("已將挑選的圖片路徑儲存到 '{}'", csv_path.display());
    Ok(rows)
}

/// 讀回匯出的 CSV，回傳 (子資料夾, 圖片路徑) 配對
pub fn read_selection_csv(csv_path: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("無法開啟 CSV 檔案: {}", csv_path.display()))?;

    let headers = reader.headers()?.clone();
    if headers.iter().ne(CSV_HEADER) {
        anyhow::bail!("CSV 標題列不符: {headers:?}");
    }

    reader
        .deserialize::<SelectionRow>()
        .map(|row| {
            let row = row.with_context(|| format!("無法解析 CSV: {}", csv_path.display()))?;
            Ok((row.subfolder, PathBuf::from(row.image_path)))
        })
        .collect()
}
