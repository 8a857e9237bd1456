use crate::error::{AppError, Result};
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Downscaled RGBA8 pixels of an image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decodes an image and scales it to fit a `max_edge` square.
/// Blocking; call from a worker thread.
pub fn load_thumbnail_blocking(path: &Path, max_edge: u32) -> Result<Thumbnail> {
    let image = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| AppError::PreviewDecode(e.to_string()))?
        .decode()?;

    let thumbnail = image.thumbnail(max_edge, max_edge).to_rgba8();
    let (width, height) = thumbnail.dimensions();

    Ok(Thumbnail {
        data: thumbnail.into_raw(),
        width,
        height,
    })
}

/// Converts thumbnail pixels into a Slint image. Must run on the UI thread.
pub fn create_slint_image(thumbnail: &Thumbnail) -> Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
        &thumbnail.data,
        thumbnail.width,
        thumbnail.height,
    );
    Image::from_rgba8(buffer)
}
