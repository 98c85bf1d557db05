use anyhow::{Context, Result, bail};
use std::ffi::OsStr;
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// 取得不會覆蓋既有檔案的目標路徑
///
/// 目標不存在時直接使用原檔名；否則在副檔名前加上 `_<uuid>`。
/// 回傳 `(路徑, 是否改名)`
#[must_use]
pub fn unique_destination(directory: &Path, file_name: &OsStr) -> (PathBuf, bool) {
    let candidate = directory.join(file_name);
    if !candidate.exists() {
        return (candidate, false);
    }

    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let extension = name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let renamed = directory.join(format!("{stem}_{}{extension}", Uuid::new_v4()));
    (renamed, true)
}

/// 複製檔案並保留權限與存取/修改時間
///
/// 來源與目標是同一個檔案時回傳錯誤，不會截斷來源。
/// 時間戳記無法寫入時只回報錯誤，檔案內容已經複製完成
pub fn copy_with_metadata(source: &Path, target: &Path) -> Result<()> {
    if is_same_file(source, target) {
        bail!(
            "來源與目標是同一個檔案: {} -> {}",
            source.display(),
            target.display()
        );
    }

    fs::copy(source, target).with_context(|| {
        format!("複製檔案失敗: {} -> {}", source.display(), target.display())
    })?;

    preserve_timestamps(source, target)
        .with_context(|| format!("無法保留時間戳記: {}", target.display()))
}

/// 兩個路徑都存在且指向同一個檔案（符號連結、硬連結、`..` 等）時為 true
#[cfg(unix)]
fn is_same_file(source: &Path, target: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(source), fs::metadata(target)) {
        (Ok(source), Ok(target)) => source.dev() == target.dev() && source.ino() == target.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(source: &Path, target: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(target)) {
        (Ok(source), Ok(target)) => source == target,
        _ => false,
    }
}

fn preserve_timestamps(source: &Path, target: &Path) -> Result<()> {
    let metadata = fs::metadata(source)?;
    let times = FileTimes::new()
        .set_accessed(metadata.accessed()?)
        .set_modified(metadata.modified()?);

    // 唯讀檔案開不了寫入模式，這時改用讀取模式（Unix 上檔案擁有者仍可設定時間）
    let file = File::options()
        .write(true)
        .open(target)
        .or_else(|_| File::open(target))?;
    file.set_times(times)?;
    Ok(())
}
