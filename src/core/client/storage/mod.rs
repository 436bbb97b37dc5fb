pub mod error;
pub mod memory;
pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;
pub use error::StorageError;

use crate::types::key::ObjectKey;

/// Trait defining object storage operations against a single bucket.
///
/// Implementations hold no per-call mutable state and may be shared
/// across tasks. Concurrent writes to the same key resolve by the
/// backend's last-writer-wins semantics; no operation retries
/// internally.
///
/// Every operation is a plain future: dropping it abandons the request,
/// and timeout policy belongs to the backend client's configuration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Fetch the object stored under `key`, bytes exactly as stored.
    ///
    /// A missing object is `StorageError::NotFound`, never an empty
    /// success: callers branch on the variant to tell "missing" from
    /// "failed".
    async fn get_data(&self, key: &ObjectKey) -> Result<Bytes, StorageError>;

    /// Store `data` under `key`, overwriting any existing object.
    async fn put_data(&self, data: Bytes, key: &ObjectKey) -> Result<(), StorageError>;

    /// Remove the object stored under `key`.
    ///
    /// Deleting an absent key is reported as `StorageError::NotFound`,
    /// not silently ignored.
    async fn delete_data(&self, key: &ObjectKey) -> Result<(), StorageError>;

    /// Whether an object currently exists under `key`.
    async fn exists(&self, key: &ObjectKey) -> Result<bool, StorageError>;

    /// Enumerate every key in the bucket as one logical sequence.
    ///
    /// Backend pagination is drained inside the call; each call starts a
    /// fresh enumeration with no shared cursor. Ordering is whatever the
    /// backend returns.
    async fn list_keys(&self) -> Result<Vec<ObjectKey>, StorageError>;

    /// Fetch an object that may legitimately be absent.
    ///
    /// Maps `NotFound` to `None`; every other failure passes through.
    async fn get_data_opt(&self, key: &ObjectKey) -> Result<Option<Bytes>, StorageError> {
        match self.get_data(key).await {
            Ok(data) => Ok(Some(data)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Store UTF-8 text under `key`.
    async fn put_text(&self, text: &str, key: &ObjectKey) -> Result<(), StorageError> {
        self.put_data(Bytes::copy_from_slice(text.as_bytes()), key).await
    }

    /// Fetch the object under `key` and decode it as UTF-8.
    async fn get_text(&self, key: &ObjectKey) -> Result<String, StorageError> {
        let data = self.get_data(key).await?;
        String::from_utf8(data.to_vec())
            .map_err(|err| StorageError::Other(format!("object {} is not valid UTF-8: {}", key, err)))
    }
}
