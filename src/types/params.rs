/// StorageArgs - Arguments used to set up the storage client
///
/// `bucket_identifier` accepts a plain bucket name or an S3 ARN; the
/// bucket must already be provisioned, binding it here has no
/// side effect. `page_size` caps keys-per-page on list requests, `None`
/// leaves the backend default in place.
#[derive(Debug, Clone)]
pub struct StorageArgs {
    pub bucket_identifier: String,
    pub page_size: Option<i32>,
}

impl StorageArgs {
    pub fn new(bucket_identifier: impl Into<String>) -> Self {
        Self { bucket_identifier: bucket_identifier.into(), page_size: None }
    }

    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}
