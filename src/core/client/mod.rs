// Client abstractions module - contains all client interface traits

pub mod storage;

// Re-export commonly used types
pub use storage::{memory::InMemoryStorage, s3::AWSS3, StorageClient};
