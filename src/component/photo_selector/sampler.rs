//! 圖片取樣器
//!
//! 對每個子資料夾獨立做不放回的均勻隨機取樣

use super::selection::{Selection, SubfolderSample};
use crate::tools::{create_progress_bar, list_image_files, list_subdirectories};
use anyhow::Result;
use log::{info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 從候選列表中不放回地均勻挑選 `count` 個項目
///
/// 候選數量不足時回傳全部候選（順序不變）
#[must_use]
pub fn sample_images<R: Rng + ?Sized>(
    candidates: &[PathBuf],
    count: usize,
    rng: &mut R,
) -> Vec<PathBuf> {
    if candidates.len() <= count {
        return candidates.to_vec();
    }
    candidates.choose_multiple(rng, count).cloned().collect()
}

/// 取樣單一子資料夾
pub fn select_from_subfolder<R: Rng + ?Sized>(
    directory: &Path,
    count: usize,
    rng: &mut R,
) -> SubfolderSample {
    let name = directory
        .file_name()
        .unwrap_or(directory.as_os_str())
        .to_os_string();

    let candidates = list_image_files(directory);
    if candidates.is_empty() {
        warn!("子資料夾中沒有圖片: {}", directory.display());
        return SubfolderSample {
            name,
            images: Vec::new(),
            available: 0,
        };
    }

    if candidates.len() < count {
        info!(
            "要求 {} 張圖片，但 '{}' 只有 {} 張，全部選取",
            count,
            directory.display(),
            candidates.len()
        );
    }

    SubfolderSample {
        name,
        images: sample_images(&candidates, count, rng),
        available: candidates.len(),
    }
}

/// 子資料夾取樣器
pub struct ImageSelector {
    num_images: usize,
    shutdown_signal: Arc<AtomicBool>,
    show_progress: bool,
}

impl ImageSelector {
    #[must_use]
    pub const fn new(num_images: usize, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            num_images,
            shutdown_signal,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// 對根目錄下的每個子資料夾取樣，回傳挑選結果與掃描的子資料夾數量
    pub fn select_random_images<R: Rng + ?Sized>(
        &self,
        root: &Path,
        rng: &mut R,
    ) -> Result<(Selection, usize)> {
        let subdirs = list_subdirectories(root)?;

        if subdirs.is_empty() {
            warn!("根資料夾中沒有任何子資料夾: {}", root.display());
            return Ok((Selection::default(), 0));
        }

        let progress_bar = create_progress_bar(subdirs.len(), "挑選圖片中...", self.show_progress);
        let mut selection = Selection::default();

        for subdir in &subdirs {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止挑選");
                break;
            }

            selection.insert(select_from_subfolder(subdir, self.num_images, rng));
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        Ok((selection, subdirs.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};
    use std::fs;
    use tempfile::TempDir;

    fn paths(count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| PathBuf::from(format!("/photos/{i}.jpg")))
            .collect()
    }

    fn create_test_selector(num_images: usize) -> ImageSelector {
        ImageSelector::new(num_images, Arc::new(AtomicBool::new(false)))
    }

    #[test]
    fn test_sample_exact_count_distinct() {
        let candidates = paths(10);
        let mut rng = StdRng::seed_from_u64(7);

        for count in 1..=10 {
            let picked = sample_images(&candidates, count, &mut rng);
            assert_eq!(picked.len(), count);

            let unique: HashSet<&PathBuf> = picked.iter().collect();
            assert_eq!(unique.len(), count, "不應該有重複");
            assert!(picked.iter().all(|p| candidates.contains(p)));
        }
    }

    #[test]
    fn test_sample_fewer_than_requested_returns_all() {
        let candidates = paths(3);
        let mut rng = StdRng::seed_from_u64(1);

        let picked = sample_images(&candidates, 5, &mut rng);
        assert_eq!(picked, candidates);
    }

    #[test]
    fn test_sample_empty_candidates() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_images(&[], 3, &mut rng).is_empty());
    }

    #[test]
    fn test_sample_same_seed_same_result() {
        let candidates = paths(50);

        let first = sample_images(&candidates, 5, &mut StdRng::seed_from_u64(42));
        let second = sample_images(&candidates, 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_is_roughly_uniform() {
        let candidates = paths(4);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<PathBuf, usize> = HashMap::new();

        for _ in 0..4000 {
            for picked in sample_images(&candidates, 1, &mut rng) {
                *counts.entry(picked).or_insert(0) += 1;
            }
        }

        // 期望值 1000，容許較寬的範圍
        assert_eq!(counts.len(), 4);
        for (path, count) in &counts {
            assert!(
                (800..=1200).contains(count),
                "{} 被選中 {count} 次，分布不均",
                path.display()
            );
        }
    }

    #[test]
    fn test_select_from_subfolder_names_by_base_name() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("Cats");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("1.jpg"), "1").unwrap();
        fs::write(dir.join("2.jpg"), "2").unwrap();

        let sample = select_from_subfolder(&dir, 1, &mut StdRng::seed_from_u64(3));
        assert_eq!(sample.name, "Cats");
        assert_eq!(sample.available, 2);
        assert_eq!(sample.images.len(), 1);
    }

    #[test]
    fn test_select_random_images_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        // A: 3 張 jpg, B: 沒有圖片, C: 1 張 png
        fs::create_dir(root.join("A")).unwrap();
        for i in 0..3 {
            fs::write(root.join(format!("A/{i}.jpg")), format!("a{i}")).unwrap();
        }
        fs::create_dir(root.join("B")).unwrap();
        fs::write(root.join("B/notes.txt"), "not an image").unwrap();
        fs::create_dir(root.join("C")).unwrap();
        fs::write(root.join("C/only.png"), "c").unwrap();

        let selector = create_test_selector(2);
        let (selection, scanned) = selector
            .select_random_images(root, &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(scanned, 3);
        assert_eq!(selection.len(), 2);

        let a = selection.get("A").unwrap();
        assert_eq!(a.len(), 2);
        assert_ne!(a[0], a[1]);
        assert!(a.iter().all(|p| p.parent() == Some(root.join("A").as_path())));

        assert!(selection.get("B").is_none());
        assert_eq!(selection.get("C").unwrap(), &[root.join("C/only.png")]);
    }

    #[test]
    #[cfg(target_os = "linux")]
    #[test]
    fn test_select_random_images_non_utf8_subfolders() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for raw in [b"\xff", b"\xfe"] {
            let dir = root.join(OsStr::from_bytes(raw));
            fs::create_dir(&dir).unwrap();
            fs::write(dir.join("pic.jpg"), raw).unwrap();
        }

        let selector = create_test_selector(1);
        let (selection, scanned) = selector
            .select_random_images(root, &mut StdRng::seed_from_u64(4))
            .unwrap();

        // 兩個名稱在 lossy 轉換後相同，但仍是不同的子資料夾
        assert_eq!(scanned, 2);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.total_images(), 2);
        assert_eq!(
            selection.get(OsStr::from_bytes(b"\xfe")).unwrap(),
            &[root.join(OsStr::from_bytes(b"\xfe")).join("pic.jpg")]
        );
    }

    #[test]
    fn test_select_random_images_no_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("loose.jpg"), "x").unwrap();

        let selector = create_test_selector(1);
        let (selection, scanned) = selector
            .select_random_images(temp_dir.path(), &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(scanned, 0);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_random_images_invalid_root() {
        let temp_dir = TempDir::new().unwrap();
        let selector = create_test_selector(1);

        let result = selector
            .select_random_images(&temp_dir.path().join("missing"), &mut StdRng::seed_from_u64(1));
        assert!(result.is_err());
    }

    #[test]
    fn test_select_random_images_stops_on_shutdown() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("A")).unwrap();
        fs::write(temp_dir.path().join("A/1.jpg"), "1").unwrap();

        let selector = ImageSelector::new(1, Arc::new(AtomicBool::new(true)));
        let (selection, scanned) = selector
            .select_random_images(temp_dir.path(), &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(scanned, 1);
        assert!(selection.is_empty());
    }
}
