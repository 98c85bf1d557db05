//! 記錄初始化
//!
//! 同時輸出到標準輸出與記錄檔，格式：`2024-01-31 12:00:00 [INFO] 訊息`。
//! 預設等級為 info，可用 `RUST_LOG` 覆寫。

use chrono::Local;
use env_logger::{Env, Target, WriteStyle};
use log::warn;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// 同時寫入標準輸出與記錄檔
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = &mut self.file {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }
}

fn open_log_file(log_file: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(log_file)
}

/// 初始化全域記錄器，只能呼叫一次；重複呼叫會被忽略
///
/// `log_file` 為 `None` 時只輸出到終端機，不會建立記錄檔
pub fn init_logging(log_file: Option<&Path>) {
    let (file, open_error) = match log_file.map(open_log_file) {
        Some(Ok(file)) => (Some(file), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    let initialized = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(TeeWriter { file })))
        .try_init()
        .is_ok();

    if initialized {
        if let (Some(log_file), Some(e)) = (log_file, open_error) {
            warn!("無法開啟記錄檔 {}，只輸出到終端機: {e}", log_file.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_tee_writer_writes_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("run.log");

        let mut writer = TeeWriter {
            file: Some(open_log_file(&log_path).unwrap()),
        };
        writer.write_all(b"first line\n").unwrap();
        writer.flush().unwrap();

        // 以附加模式開啟，不會清掉既有內容
        let mut writer = TeeWriter {
            file: Some(open_log_file(&log_path).unwrap()),
        };
        writer.write_all(b"second line\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(
            fs::read_to_string(&log_path).unwrap(),
            "first line\nsecond line\n"
        );
    }

    #[test]
    fn test_open_log_file_in_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(open_log_file(&temp_dir.path().join("missing/run.log")).is_err());
    }
}
