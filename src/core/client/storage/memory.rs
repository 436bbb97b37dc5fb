use std::collections::BTreeMap;
use std::ops::Bound;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::core::client::storage::{StorageClient, StorageError};
use crate::types::key::ObjectKey;

/// In-memory storage client backed by a keyed byte map.
///
/// Substitutes for the S3 backend in tests and embeddings that need
/// storage semantics without a network. Listing reassembles its result
/// from fixed-size pages so callers exercise the same multi-page path
/// the S3 backend takes.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    objects: RwLock<BTreeMap<String, Bytes>>,
    page_size: Option<usize>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of keys produced per internal list page.
    pub fn with_page_size(page_size: usize) -> Self {
        Self { objects: RwLock::new(BTreeMap::new()), page_size: Some(page_size) }
    }

    /// Number of objects currently stored.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl StorageClient for InMemoryStorage {
    async fn get_data(&self, key: &ObjectKey) -> Result<Bytes, StorageError> {
        self.objects
            .read()
            .await
            .get(key.as_str())
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn put_data(&self, data: Bytes, key: &ObjectKey) -> Result<(), StorageError> {
        self.objects.write().await.insert(key.to_string(), data);
        Ok(())
    }

    async fn delete_data(&self, key: &ObjectKey) -> Result<(), StorageError> {
        match self.objects.write().await.remove(key.as_str()) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound(key.to_string())),
        }
    }

    async fn exists(&self, key: &ObjectKey) -> Result<bool, StorageError> {
        Ok(self.objects.read().await.contains_key(key.as_str()))
    }

    async fn list_keys(&self) -> Result<Vec<ObjectKey>, StorageError> {
        let objects = self.objects.read().await;
        let page_size = self.page_size.unwrap_or(1000);

        let mut keys = Vec::with_capacity(objects.len());
        let mut cursor: Option<String> = None;

        loop {
            let page: Vec<String> = match cursor.as_deref() {
                Some(last) => objects
                    .range::<str, _>((Bound::Excluded(last), Bound::Unbounded))
                    .take(page_size)
                    .map(|(key, _)| key.clone())
                    .collect(),
                None => objects.keys().take(page_size).cloned().collect(),
            };

            let page_len = page.len();
            cursor = page.last().cloned();
            for key in page {
                keys.push(ObjectKey::new(key).map_err(|err| StorageError::Other(err.to_string()))?);
            }

            if page_len < page_size {
                break;
            }
        }

        Ok(keys)
    }
}
