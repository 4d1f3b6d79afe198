use crate::storage::StorageError;
use crate::thumbnails::ThumbnailError;
use thiserror::Error;

/// Everything that can end one record's processing. The display strings
/// double as the operational log lines, so they carry the bucket/key
/// context in full.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Error downloading `{key}` from `{bucket}`: {source}")]
    Download {
        bucket: String,
        key: String,
        source: StorageError,
    },
    #[error("Error creating a thumbnail for `{key}`: {source}")]
    Thumbnail { key: String, source: ThumbnailError },
    #[error("Error uploading `{key}` to `{bucket}`: {source}")]
    Upload {
        bucket: String,
        key: String,
        source: StorageError,
    },
}
