use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::put_object::{PutObjectError, PutObjectOutput};
use aws_sdk_s3::primitives::{ByteStream, ByteStreamError};
use aws_sdk_s3::Client;
use thiserror::Error;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Get(#[from] SdkError<GetObjectError, HttpResponse>),
    #[error(transparent)]
    Put(#[from] SdkError<PutObjectError, HttpResponse>),
    #[error("Failed to read the object body: {0}")]
    Body(#[from] ByteStreamError),
}

/// Thin wrapper over the S3 client. Retries stay within the retry budget
/// configured on the client; nothing is retried here.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    client: Client,
}

impl ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn download(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;
        let body = response.body.collect().await?;
        Ok(body.into_bytes().to_vec())
    }

    pub async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<PutObjectOutput, StorageError> {
        let size = bytes.len() as i64;
        let output = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .content_length(size)
            .send()
            .await?;
        Ok(output)
    }
}
