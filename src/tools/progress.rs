use indicatif::{ProgressBar, ProgressStyle};

/// 建立進度條；停用時回傳隱藏的進度條，呼叫端不需要分支
#[must_use]
pub fn create_progress_bar(len: usize, message: &'static str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let progress_bar = ProgressBar::new(len as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    progress_bar.set_message(message);
    progress_bar
}
