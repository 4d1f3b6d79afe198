use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{run, service_fn, Error};

mod config;
mod error;
mod handler;
mod logging;
mod storage;
mod thumbnails;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();
    let settings = config::Settings::from_env();
    let shared_config = aws_config::defaults(BehaviorVersion::latest())
        .retry_config(RetryConfig::standard().with_max_attempts(2))
        .load()
        .await;
    let store = storage::ObjectStore::new(S3Client::new(&shared_config));
    run(service_fn(|event| {
        handler::function_handler(event, &store, &settings)
    }))
    .await
}
