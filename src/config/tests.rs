use crate::config::{Settings, OUTPUT_BUCKET_NAME};
use std::env;

#[test]
fn test_output_bucket_from_env() {
    // Set and unset within one test so that the two assertions can't race
    // against each other under the parallel test runner.
    env::set_var(OUTPUT_BUCKET_NAME, "custom-thumbnails");
    assert_eq!(Settings::from_env().output_bucket, "custom-thumbnails");

    env::remove_var(OUTPUT_BUCKET_NAME);
    assert_eq!(Settings::from_env().output_bucket, "output-bucket");
}
