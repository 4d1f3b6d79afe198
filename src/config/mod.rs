use std::env;

#[cfg(test)]
pub mod tests;

pub const OUTPUT_BUCKET_NAME: &str = "OUTPUT_BUCKET_NAME";

const DEFAULT_OUTPUT_BUCKET: &str = "output-bucket";

#[derive(Debug, Clone)]
pub struct Settings {
    pub output_bucket: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let output_bucket = match env::var(OUTPUT_BUCKET_NAME) {
            Ok(bucket) => bucket,
            Err(_) => {
                tracing::warn!(
                    "The `{}` environment variable isn't set. Falling back to `{}`.",
                    OUTPUT_BUCKET_NAME,
                    DEFAULT_OUTPUT_BUCKET,
                );
                DEFAULT_OUTPUT_BUCKET.to_string()
            }
        };
        Self { output_bucket }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self {
            output_bucket: String::from(DEFAULT_OUTPUT_BUCKET),
        }
    }
}
