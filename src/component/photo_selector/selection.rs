use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// 單一子資料夾的取樣結果
#[derive(Debug, Clone)]
pub struct SubfolderSample {
    /// 子資料夾名稱（不含路徑，保留原始位元組）
    pub name: OsString,
    /// 挑選出的圖片
    pub images: Vec<PathBuf>,
    /// 子資料夾中可用的圖片總數
    pub available: usize,
}

/// 子資料夾名稱 -> 挑選出的圖片
///
/// 取樣完成後只讀；沒有圖片的子資料夾不會出現在這裡。
/// 以原始檔名為鍵，非 UTF-8 的同層資料夾不會互相覆蓋
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: BTreeMap<OsString, Vec<PathBuf>>,
}

impl Selection {
    /// 加入一個子資料夾的取樣結果，空的結果會被忽略
    pub(crate) fn insert(&mut self, sample: SubfolderSample) {
        if !sample.images.is_empty() {
            self.entries.insert(sample.name, sample.images);
        }
    }

    #[must_use]
    pub fn get(&self, subfolder: impl AsRef<OsStr>) -> Option<&[PathBuf]> {
        self.entries.get(subfolder.as_ref()).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &[PathBuf])> {
        self.entries
            .iter()
            .map(|(name, images)| (name.as_os_str(), images.as_slice()))
    }

    /// 依序列出所有 (子資料夾, 圖片) 配對
    pub fn pairs(&self) -> impl Iterator<Item = (&OsStr, &PathBuf)> {
        self.iter()
            .flat_map(|(name, images)| images.iter().map(move |image| (name, image)))
    }

    /// 子資料夾數量
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 所有挑選的圖片數量
    #[must_use]
    pub fn total_images(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl FromIterator<SubfolderSample> for Selection {
    fn from_iter<I: IntoIterator<Item = SubfolderSample>>(iter: I) -> Self {
        let mut selection = Self::default();
        for sample in iter {
            selection.insert(sample);
        }
        selection
    }
}
