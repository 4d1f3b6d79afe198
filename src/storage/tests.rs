use crate::storage::ObjectStore;
use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_sdk_s3::primitives::ByteStream;
use aws_smithy_mocks::{mock, mock_client, RuleMode};

#[tokio::test]
async fn test_download_collects_the_object_body() {
    let get_rule = mock!(aws_sdk_s3::Client::get_object)
        .match_requests(|input| {
            input.bucket() == Some("input-bucket") && input.key() == Some("photo.png")
        })
        .then_output(|| {
            GetObjectOutput::builder()
                .body(ByteStream::from_static(b"image bytes"))
                .build()
        });
    let client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, [&get_rule]);
    let store = ObjectStore::new(client);

    let bytes = store
        .download("input-bucket", "photo.png")
        .await
        .expect("Failed to download the mocked object.");

    assert_eq!(bytes, b"image bytes");
    assert_eq!(get_rule.num_calls(), 1);
}

#[tokio::test]
async fn test_upload_sets_content_type_and_length() {
    let put_rule = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|input| {
            input.bucket() == Some("output-bucket")
                && input.key() == Some("photo.png")
                && input.content_type() == Some("image/png")
                && input.content_length() == Some(11)
        })
        .then_output(|| PutObjectOutput::builder().build());
    let client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, [&put_rule]);
    let store = ObjectStore::new(client);

    store
        .upload("output-bucket", "photo.png", b"image bytes".to_vec(), "image/png")
        .await
        .expect("Failed to upload the mocked object.");

    assert_eq!(put_rule.num_calls(), 1);
}
