pub mod core;
pub mod types;

#[cfg(test)]
pub mod tests;

// Re-export commonly used items
pub use crate::core::client::storage::memory::InMemoryStorage;
pub use crate::core::client::storage::s3::AWSS3;
pub use crate::core::client::storage::{StorageClient, StorageError};
pub use crate::types::key::{InvalidObjectKey, ObjectKey};
pub use crate::types::params::StorageArgs;
