use assert_matches::assert_matches;
use rstest::rstest;

use crate::{InvalidObjectKey, ObjectKey, StorageArgs, AWSS3};

#[rstest]
#[case::simple("a")]
#[case::nested("notes/1.txt")]
#[case::deep("year=2024/month=01/part-0000.parquet")]
#[case::trailing_slash("prefix/dir/")]
#[case::spaces("with space.txt")]
fn test_valid_object_keys(#[case] raw: &str) {
    let key = ObjectKey::new(raw).expect("key should be accepted");
    assert_eq!(key.as_str(), raw);
    assert_eq!(key.to_string(), raw);
}

#[rstest]
#[case::empty("", InvalidObjectKey::Empty)]
#[case::leading_slash("/leading.txt", InvalidObjectKey::LeadingSlash("/leading.txt".to_string()))]
#[case::nul("bad\0key", InvalidObjectKey::NulByte)]
fn test_invalid_object_keys(#[case] raw: &str, #[case] expected: InvalidObjectKey) {
    assert_eq!(ObjectKey::new(raw).unwrap_err(), expected);
}

/// Keys are opaque: dot segments survive verbatim, nothing is
/// normalized away.
#[rstest]
fn test_object_key_is_not_normalized() {
    let key = ObjectKey::new("a/../b/./c").expect("key should be accepted");
    assert_eq!(key.as_str(), "a/../b/./c");
}

#[rstest]
fn test_object_key_parses_from_str() {
    let key: ObjectKey = "notes/1.txt".parse().expect("key should parse");
    assert_eq!(key.as_ref(), "notes/1.txt");
    assert_matches!("".parse::<ObjectKey>(), Err(InvalidObjectKey::Empty));
}

#[rstest]
#[case::plain_name("my-bucket", "my-bucket", None)]
#[case::global_arn("arn:aws:s3:::my-bucket", "my-bucket", None)]
#[case::regional_arn(
    "arn:aws:s3:us-west-2:123456789012:bucket/my-bucket",
    "my-bucket",
    Some("us-west-2")
)]
#[case::regional_arn_plain_resource(
    "arn:aws:s3:eu-central-1:123456789012:my-bucket",
    "my-bucket",
    Some("eu-central-1")
)]
fn test_parse_bucket_identifier(
    #[case] identifier: &str,
    #[case] expected_bucket: &str,
    #[case] expected_region: Option<&str>,
) {
    let (bucket, region) = AWSS3::parse_bucket_identifier(identifier);
    assert_eq!(bucket, expected_bucket);
    assert_eq!(region.as_deref(), expected_region);
}

#[rstest]
fn test_storage_args_builder() {
    let args = StorageArgs::new("my-bucket").with_page_size(100);
    assert_eq!(args.bucket_identifier, "my-bucket");
    assert_eq!(args.page_size, Some(100));

    let args = StorageArgs::new("my-bucket");
    assert_eq!(args.page_size, None);
}
