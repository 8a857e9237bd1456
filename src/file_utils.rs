use crate::config::{DEFAULT_MIME_TYPE, EXTRA_MIME_TYPES, IMAGE_MIME_PREFIX, SIZE_UNITS};
use crate::error::{AppError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A file chosen by the user, as reported by the host platform.
///
/// Content is never read here; only what the list needs to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileHandle {
    #[cfg(test)]
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        size: u64,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Resolves a selected path into a handle using its filesystem metadata.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(AppError::NotAFile(path.display().to_string()));
        }

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
            mime_type: mime_type_for_path(path),
        })
    }

    /// Whether the declared type asks for an image preview.
    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime_type)
    }
}

pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with(IMAGE_MIME_PREFIX)
}

/// Declared MIME type guessed from the file extension.
pub fn mime_type_for_path(path: &Path) -> String {
    if let Ok(format) = image::ImageFormat::from_path(path) {
        return format.to_mime_type().to_string();
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| {
            let ext = ext.to_lowercase();
            EXTRA_MIME_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| mime.to_string())
        })
        .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string())
}

/// Formats a byte count as e.g. `"0 Bytes"`, `"1.5 KB"`, `"1 MB"`.
///
/// The unit is the largest power of 1024 not exceeding the count, capped at GB.
/// The value is rounded to two decimals with trailing zeros dropped.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", SIZE_UNITS[0]);
    }

    let mut unit_index = 0;
    let mut scale = 1u64;
    while unit_index + 1 < SIZE_UNITS.len() && bytes / scale >= 1024 {
        scale *= 1024;
        unit_index += 1;
    }

    let value = bytes as f64 / scale as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit_index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempdir::TempDir;

    #[test]
    fn format_size_matches_reference_values() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1048576), "1 MB");
        assert_eq!(format_size(1073741824), "1 GB");
    }

    #[test]
    fn format_size_rounds_to_two_decimals() {
        // 1234 / 1024 = 1.205078...
        assert_eq!(format_size(1234), "1.21 KB");
    }

    #[test]
    fn format_size_caps_at_gigabytes() {
        let five_tb = 5 * 1024u64.pow(4);
        assert_eq!(format_size(five_tb), "5120 GB");
    }

    #[test]
    fn mime_type_detection() {
        assert_eq!(mime_type_for_path(Path::new("a.png")), "image/png");
        assert_eq!(mime_type_for_path(Path::new("b.JPG")), "image/jpeg");
        assert_eq!(mime_type_for_path(Path::new("c.pdf")), "application/pdf");
        assert_eq!(mime_type_for_path(Path::new("d.PDF")), "application/pdf");
        assert_eq!(
            mime_type_for_path(Path::new("no_extension")),
            DEFAULT_MIME_TYPE
        );
    }

    #[test]
    fn image_mime_prefix() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime("text/image"));
    }

    #[test]
    fn from_path_reads_name_and_size() {
        let dir = TempDir::new("file_utils").unwrap();
        let path = dir.path().join("report.pdf");
        File::create(&path).unwrap().write_all(&[0u8; 300]).unwrap();

        let handle = FileHandle::from_path(&path).unwrap();
        assert_eq!(handle.name, "report.pdf");
        assert_eq!(handle.size, 300);
        assert_eq!(handle.mime_type, "application/pdf");
        assert!(!handle.is_image());
    }

    #[test]
    fn from_path_rejects_directories_and_missing_files() {
        let dir = TempDir::new("file_utils").unwrap();

        assert!(matches!(
            FileHandle::from_path(dir.path()),
            Err(AppError::NotAFile(_))
        ));
        assert!(matches!(
            FileHandle::from_path(&dir.path().join("missing.txt")),
            Err(AppError::FileMetadata(_))
        ));
    }
}
