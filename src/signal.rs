use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 安裝 Ctrl-C 處理器，回傳中斷旗標
///
/// 旗標只在檔案之間檢查：目前的檔案處理完才停止，已完成的輸出保留在磁碟上
pub fn setup_shutdown_signal() -> Result<Arc<AtomicBool>> {
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&shutdown_signal);

    ctrlc::set_handler(move || {
        if handler_flag.swap(true, Ordering::SeqCst) {
            eprintln!("\n已在停止中，請稍候...");
        } else {
            eprintln!("\n收到中斷信號，完成目前的檔案後停止...");
        }
    })
    .context("無法設定 Ctrl-C 處理器")?;

    Ok(shutdown_signal)
}

/// 安裝失敗時改用永遠不會觸發的旗標，流程照常進行
#[must_use]
pub fn shutdown_signal_or_unset() -> Arc<AtomicBool> {
    setup_shutdown_signal().unwrap_or_else(|e| {
        log::warn!("{e:#}，Ctrl-C 將直接結束程式");
        Arc::new(AtomicBool::new(false))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_installation_falls_back() {
        let first = setup_shutdown_signal().unwrap();
        assert!(!first.load(Ordering::SeqCst));

        // 同一個行程只能安裝一次處理器
        assert!(setup_shutdown_signal().is_err());
        let fallback = shutdown_signal_or_unset();
        assert!(!fallback.load(Ordering::SeqCst));
    }
}
