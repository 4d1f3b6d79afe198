use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("thumbnailer=info"));
    // CloudWatch stamps every line on ingestion; no formatter timestamps.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().without_time())
        .init();
}
