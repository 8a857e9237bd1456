//! Application configuration constants.

/// Edge length (pixels) of the square box thumbnails are scaled to fit.
pub const THUMBNAIL_SIZE: u32 = 96;

/// Unit labels for human-readable sizes, in ascending powers of 1024.
pub const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Declared MIME types starting with this prefix get a preview.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// Fallback MIME type for unrecognised extensions.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Non-image extensions with a well-known MIME type.
/// Image extensions are resolved through `image::ImageFormat`.
pub const EXTRA_MIME_TYPES: [(&str, &str); 12] = [
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("json", "application/json"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("html", "text/html"),
    ("svg", "image/svg+xml"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
];
