use crate::config::is_image_extension;
use crate::tools::validate_directory_exists;
use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 列出根目錄下的第一層子資料夾（完整路徑，依名稱排序）
///
/// 指向資料夾的符號連結也算子資料夾
pub fn list_subdirectories(root: &Path) -> Result<Vec<PathBuf>> {
    validate_directory_exists(root)?;

    let subdirs = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("略過無法讀取的項目: {e}");
                None
            }
        })
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.is_dir())
        .collect();

    Ok(subdirs)
}

/// 列出資料夾中（不含子資料夾）副檔名符合的圖片檔
///
/// 資料夾不存在或無法讀取時回傳空列表
#[must_use]
pub fn list_image_files(directory: &Path) -> Vec<PathBuf> {
    WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .map(walkdir::DirEntry::into_path)
        .filter(|path| is_image_extension(path) && path.is_file())
        .collect()
}
