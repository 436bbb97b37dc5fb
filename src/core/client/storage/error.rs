use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Backend error codes that mean the caller's credentials or
/// permissions were rejected.
const UNAUTHORIZED_CODES: &[&str] = &[
    "AccessDenied",
    "AccountProblem",
    "InvalidAccessKeyId",
    "SignatureDoesNotMatch",
    "ExpiredToken",
    "TokenRefreshRequired",
];

/// Backend error codes for transient conditions that may clear on replay.
const UNAVAILABLE_CODES: &[&str] = &["SlowDown", "ServiceUnavailable", "InternalError", "RequestTimeout"];

/// Backend error codes that mean the addressed object does not exist.
const NOT_FOUND_CODES: &[&str] = &["NoSuchKey", "NotFound"];

#[derive(Error, Debug)]
pub enum StorageError {
    /// No object exists under the requested key.
    #[error("object not found: {0}")]
    NotFound(String),

    /// The backend rejected the caller's credentials or permissions.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The backend or the network path to it failed transiently.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    /// Any backend failure outside the classified taxonomy. Carries the
    /// raw detail for diagnostics.
    #[error("storage backend error: {0}")]
    Other(String),
}

impl StorageError {
    /// Maps an SDK failure onto the public taxonomy. `subject` names
    /// what the operation addressed: the object key, or the bucket for
    /// listings.
    ///
    /// Transport-level failures never reach the service, so they are
    /// `Unavailable` regardless of operation. Service errors classify by
    /// the backend-reported error code.
    pub(crate) fn from_sdk_error<E, R>(subject: &str, err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
        R: std::fmt::Debug + Send + Sync + 'static,
    {
        let detail = DisplayErrorContext(&err).to_string();
        match &err {
            SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
                Self::Unavailable(detail)
            }
            SdkError::ServiceError(_) => Self::classify_service_code(err.code(), subject, detail),
            _ => Self::Other(detail),
        }
    }

    /// Classification over the backend-reported error code alone, kept
    /// free of SDK types so the code table is unit testable.
    pub(crate) fn classify_service_code(code: Option<&str>, subject: &str, detail: String) -> Self {
        match code {
            Some(code) if NOT_FOUND_CODES.contains(&code) => Self::NotFound(subject.to_string()),
            Some(code) if UNAUTHORIZED_CODES.contains(&code) => Self::Unauthorized(detail),
            Some(code) if UNAVAILABLE_CODES.contains(&code) => Self::Unavailable(detail),
            _ => Self::Other(detail),
        }
    }
}
