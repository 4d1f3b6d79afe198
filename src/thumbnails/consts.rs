pub const MAX_THUMBNAIL_WIDTH: u32 = 200;
pub const MAX_THUMBNAIL_HEIGHT: u32 = 200;

/// Extensions the pipeline accepts, matched case-insensitively against the
/// end of the object key.
pub const ALLOWED_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff"];
