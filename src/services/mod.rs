//! Service layer for business logic.
//!
//! Separates business logic from UI handlers for better testability and maintainability.

pub mod preview_service;
pub mod selection_service;
pub mod upload_service;

pub use preview_service::{PreviewManager, ThumbnailPreviewManager};
pub use selection_service::SelectionService;
pub use upload_service::UploadService;
