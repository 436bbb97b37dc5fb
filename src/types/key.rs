use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Reasons an object key is rejected at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidObjectKey {
    #[error("object key is empty")]
    Empty,
    #[error("object key starts with '/': {0}")]
    LeadingSlash(String),
    #[error("object key contains a NUL byte")]
    NulByte,
}

/// Opaque key naming one object inside a bucket.
///
/// Keys look path-like but carry no filesystem semantics: `.` and `..`
/// segments are stored verbatim, separators are never rewritten.
/// Invariants (non-empty, no leading `/`, no NUL) hold by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn new(key: impl Into<String>) -> Result<Self, InvalidObjectKey> {
        let key = key.into();
        if key.is_empty() {
            return Err(InvalidObjectKey::Empty);
        }
        if key.starts_with('/') {
            return Err(InvalidObjectKey::LeadingSlash(key));
        }
        if key.contains('\0') {
            return Err(InvalidObjectKey::NulByte);
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for ObjectKey {
    type Err = InvalidObjectKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
