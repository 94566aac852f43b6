use thiserror::Error;

/// Result type alias using RespinError
pub type Result<T> = std::result::Result<T, RespinError>;

/// Error taxonomy for respin core operations
///
/// The core accepts all text inputs unconditionally, so the only failure a
/// caller can provoke is a lookup miss. Serialization covers JSON encoding
/// of diff output; Internal is reserved for assertion-style failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RespinError {
    /// Version not found in store
    #[error("Version not found: {version_id}")]
    VersionNotFound { version_id: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from serde_json::Error to RespinError
impl From<serde_json::Error> for RespinError {
    fn from(err: serde_json::Error) -> Self {
        RespinError::Serialization {
            message: err.to_string(),
        }
    }
}
