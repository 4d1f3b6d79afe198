use crate::config::Settings;
use crate::error::ProcessingError;
use crate::storage::ObjectStore;
use crate::thumbnails;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};


pub async fn function_handler(
    event: LambdaEvent<S3Event>,
    store: &ObjectStore,
    settings: &Settings,
) -> Result<(), Error> {
    let records = event.payload.records;
    if records.is_empty() {
        tracing::warn!("No records found in the S3 event.");
        return Ok(());
    }
    for record in &records {
        let source_bucket = record.s3.bucket.name.clone().unwrap_or_default();
        // Keys arrive URL-encoded in notifications; map `+` back to a space.
        let source_key = record
            .s3
            .object
            .key
            .clone()
            .unwrap_or_default()
            .replace('+', " ");
        if !thumbnails::is_supported(&source_key) {
            tracing::warn!("Skipping `{}`: not a supported image format.", source_key);
            continue;
        }
        match process_record(&source_bucket, &source_key, store, settings).await {
            Ok(()) => tracing::info!("Created a thumbnail for `{}`.", source_key),
            // One error line per failed record; the rest of the batch still runs.
            Err(err) => tracing::error!("{}", err),
        }
    }
    Ok(())
}

async fn process_record(
    bucket: &str,
    key: &str,
    store: &ObjectStore,
    settings: &Settings,
) -> Result<(), ProcessingError> {
    let image_bytes =
        store
            .download(bucket, key)
            .await
            .map_err(|source| ProcessingError::Download {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source,
            })?;
    let thumbnail =
        thumbnails::shrink_to_bounds(&image_bytes).map_err(|source| ProcessingError::Thumbnail {
            key: key.to_string(),
            source,
        })?;
    let content_type = thumbnail.content_type();
    store
        .upload(&settings.output_bucket, key, thumbnail.bytes, content_type)
        .await
        .map_err(|source| ProcessingError::Upload {
            bucket: settings.output_bucket.clone(),
            key: key.to_string(),
            source,
        })?;
    Ok(())
}
