use crate::core::client::storage::{StorageClient, StorageError};
use crate::types::key::ObjectKey;
use crate::types::params::StorageArgs;

use async_trait::async_trait;
use aws_config::Region;
use aws_config::SdkConfig;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::head_object::HeadObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use std::sync::Arc;

/// S3-backed storage client bound to a single bucket.
///
/// The SDK client is injected pre-authenticated; this type never
/// resolves credentials, creates buckets, or retries. Request signing,
/// connection pooling, timeouts and retry policy all live in the
/// injected client's configuration.
#[derive(Clone, Debug)]
pub struct AWSS3 {
    client: Arc<Client>,
    bucket_name: String,
    page_size: Option<i32>,
}

impl AWSS3 {
    /// Creates a new instance of AWSS3 around an already-configured SDK
    /// client.
    ///
    /// # Arguments
    /// * `client` - The pre-authenticated S3 client.
    /// * `args` - The storage arguments with bucket_identifier (name or ARN).
    pub fn new(client: Client, args: &StorageArgs) -> Self {
        let (bucket_name, _) = Self::parse_bucket_identifier(&args.bucket_identifier);
        Self { client: Arc::new(client), bucket_name, page_size: args.page_size }
    }

    /// Builds the SDK client from an AWS configuration, then binds it.
    ///
    /// Applies path-style addressing and, when the bucket identifier is
    /// an ARN carrying a region, overrides the client region with it.
    pub fn from_sdk_config(aws_config: &SdkConfig, args: &StorageArgs) -> Self {
        let (_, region) = Self::parse_bucket_identifier(&args.bucket_identifier);

        let mut s3_config_builder = aws_sdk_s3::config::Builder::from(aws_config);
        if let Some(region) = &region {
            // Only override region if it was explicitly provided in the ARN
            s3_config_builder = s3_config_builder.region(Region::new(region.clone()));
        }
        s3_config_builder = s3_config_builder.use_arn_region(true).force_path_style(true);

        Self::new(Client::from_conf(s3_config_builder.build()), args)
    }

    /// Parse a bucket identifier (name or ARN) into bucket name and optional region
    pub(crate) fn parse_bucket_identifier(identifier: &str) -> (String, Option<String>) {
        if identifier.starts_with("arn:aws:s3:") {
            let parts: Vec<&str> = identifier.split(':').collect();

            if parts.len() >= 6 {
                let region = if !parts[3].is_empty() { Some(parts[3].to_string()) } else { None };

                // Handle different ARN formats
                let bucket_name = if parts[5].contains('/') {
                    // Format: arn:aws:s3:region:account-id:bucket/bucket-name
                    let resource_parts: Vec<&str> = parts[5].split('/').collect();
                    if resource_parts[0] == "bucket" && resource_parts.len() > 1 {
                        resource_parts[1].to_string()
                    } else {
                        parts[5].to_string()
                    }
                } else {
                    // Format: arn:aws:s3:::bucket-name
                    parts[5].to_string()
                };

                return (bucket_name, region);
            }
        }

        // If not an ARN or parsing failed, just use the identifier as the bucket name
        (identifier.to_string(), None)
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
}

#[async_trait]
impl StorageClient for AWSS3 {
    /// Get the data from the bucket with the specified key.
    async fn get_data(&self, key: &ObjectKey) -> Result<Bytes, StorageError> {
        let output =
            self.client.get_object().bucket(&self.bucket_name).key(key.as_str()).send().await.map_err(|err| {
                if err.as_service_error().is_some_and(GetObjectError::is_no_such_key) {
                    StorageError::NotFound(key.to_string())
                } else {
                    StorageError::from_sdk_error(key.as_str(), err)
                }
            })?;

        // Body interruption after a successful response is a transport failure.
        let data = output.body.collect().await.map_err(|err| StorageError::Unavailable(err.to_string()))?;

        let data_bytes = data.into_bytes();
        tracing::debug!(bucket = %self.bucket_name, key = %key, bytes = data_bytes.len(), "fetched object");
        Ok(data_bytes)
    }

    /// Put the data into the bucket with the specified key.
    async fn put_data(&self, data: Bytes, key: &ObjectKey) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key.as_str())
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|err| StorageError::from_sdk_error(key.as_str(), err))?;

        tracing::debug!(bucket = %self.bucket_name, key = %key, "stored object");
        Ok(())
    }

    /// Delete the data from the bucket with the specified key.
    ///
    /// S3 reports success for deletes of absent keys, so a `HeadObject`
    /// probe runs first to surface `NotFound`. Probe and delete are
    /// separate requests; a concurrent writer can land between them.
    async fn delete_data(&self, key: &ObjectKey) -> Result<(), StorageError> {
        if !self.exists(key).await? {
            return Err(StorageError::NotFound(key.to_string()));
        }

        self.client
            .delete_object()
            .bucket(&self.bucket_name)
            .key(key.as_str())
            .send()
            .await
            .map_err(|err| StorageError::from_sdk_error(key.as_str(), err))?;

        tracing::debug!(bucket = %self.bucket_name, key = %key, "deleted object");
        Ok(())
    }

    async fn exists(&self, key: &ObjectKey) -> Result<bool, StorageError> {
        match self.client.head_object().bucket(&self.bucket_name).key(key.as_str()).send().await {
            Ok(_) => Ok(true),
            // HeadObject carries no error body, so the 404 arrives as the
            // modeled NotFound variant rather than an error code.
            Err(err) if err.as_service_error().is_some_and(HeadObjectError::is_not_found) => Ok(false),
            Err(err) => Err(StorageError::from_sdk_error(key.as_str(), err)),
        }
    }

    /// List every key in the bucket, following continuation tokens until
    /// the enumeration is complete.
    async fn list_keys(&self) -> Result<Vec<ObjectKey>, StorageError> {
        let mut keys = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let mut request = self.client.list_objects_v2().bucket(&self.bucket_name);
            if let Some(page_size) = self.page_size {
                request = request.max_keys(page_size);
            }
            if let Some(token) = continuation_token {
                request = request.continuation_token(token);
            }

            let response =
                request.send().await.map_err(|err| StorageError::from_sdk_error(&self.bucket_name, err))?;

            for object in response.contents() {
                if let Some(key) = object.key() {
                    let key = ObjectKey::new(key)
                        .map_err(|err| StorageError::Other(format!("backend returned invalid key: {}", err)))?;
                    keys.push(key);
                }
            }

            continuation_token = response.next_continuation_token().map(ToString::to_string);
            if continuation_token.is_none() {
                break;
            }
        }

        tracing::debug!(bucket = %self.bucket_name, keys = keys.len(), "listed bucket");
        Ok(keys)
    }
}
