use std::path::Path;

/// 支援的圖片副檔名（小寫，含點）
pub const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff"];

/// 依檔名結尾判斷是否為支援的圖片格式（不分大小寫）
///
/// 以完整檔名比對，所以 `.jpg` 這種隱藏檔也算圖片
#[must_use]
pub fn is_image_extension(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .is_some_and(|name| IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_extension() {
        assert!(is_image_extension(Path::new("/photos/a.jpg")));
        assert!(is_image_extension(Path::new("/photos/b.JPEG")));
        assert!(is_image_extension(Path::new("c.Png")));
        assert!(is_image_extension(Path::new("d.tiff")));
        assert!(is_image_extension(Path::new(".jpg")));

        // 不在清單內
        assert!(!is_image_extension(Path::new("e.tif")));
        assert!(!is_image_extension(Path::new("f.webp")));
        assert!(!is_image_extension(Path::new("notes.txt")));
        assert!(!is_image_extension(Path::new("jpg")));
        assert!(!is_image_extension(Path::new("archive.jpg.zip")));
    }
}
