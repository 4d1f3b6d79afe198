use crate::thumbnails::consts::{
    ALLOWED_EXTENSIONS, MAX_THUMBNAIL_HEIGHT, MAX_THUMBNAIL_WIDTH,
};
use image::imageops::FilterType;
use image::{GenericImageView, ImageFormat, ImageReader};
use std::io::Cursor;
use thiserror::Error;

pub mod consts;

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("Failed to probe the image format: {0}")]
    Probe(#[from] std::io::Error),
    #[error("The object content isn't a recognized image format.")]
    UnrecognizedFormat,
    #[error("Failed to decode the image: {0}")]
    Decode(image::ImageError),
    #[error("Failed to encode the thumbnail: {0}")]
    Encode(image::ImageError),
}

#[derive(Debug)]
pub struct Thumbnail {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
}

impl Thumbnail {
    pub fn content_type(&self) -> &'static str {
        self.format.to_mime_type()
    }
}

/// Checks the object key against the extension allow-list. The format used
/// for decoding is still sniffed from the content, never from the key.
pub fn is_supported(key: &str) -> bool {
    let key = key.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| key.ends_with(ext))
}

/// Downscales the image so that neither dimension exceeds the thumbnail
/// bounds, keeping the aspect ratio, and re-encodes it in the format it was
/// decoded from. Images already within bounds keep their dimensions.
pub fn shrink_to_bounds(image_bytes: &[u8]) -> Result<Thumbnail, ThumbnailError> {
    let reader = ImageReader::new(Cursor::new(image_bytes)).with_guessed_format()?;
    let format = reader.format().ok_or(ThumbnailError::UnrecognizedFormat)?;
    let image = reader.decode().map_err(ThumbnailError::Decode)?;

    let (width, height) = image.dimensions();
    let resized = if width > MAX_THUMBNAIL_WIDTH || height > MAX_THUMBNAIL_HEIGHT {
        image.resize(MAX_THUMBNAIL_WIDTH, MAX_THUMBNAIL_HEIGHT, FilterType::Lanczos3)
    } else {
        image
    };

    // For a rough estimate, assume 4 bytes per pixel (RGBA).
    let (width, height) = resized.dimensions();
    let estimated_size = (width as usize) * (height as usize) * 4;
    let mut buffer = Cursor::new(Vec::with_capacity(estimated_size));
    resized
        .write_to(&mut buffer, format)
        .map_err(ThumbnailError::Encode)?;

    Ok(Thumbnail {
        bytes: buffer.into_inner(),
        format,
    })
}
