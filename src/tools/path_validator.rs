use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 路徑驗證錯誤
#[derive(Debug, Error)]
pub enum PathError {
    #[error("路徑不存在: {}", .0.display())]
    NotFound(PathBuf),
    #[error("路徑不是資料夾: {}", .0.display())]
    NotADirectory(PathBuf),
}

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(PathError::NotFound(path.to_path_buf()).into());
    }
    if !path.is_dir() {
        return Err(PathError::NotADirectory(path.to_path_buf()).into());
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("無法建立資料夾: {}", path.display()))?;
    }
    Ok(())
}
