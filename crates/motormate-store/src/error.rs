//! Store error types

use motormate_client::ApiError;

/// Reasons a stored bearer token cannot be used
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(String),
}

/// Error type for slice, account and storage operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("failed to serialize stored state: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("no user is signed in")]
    NotSignedIn,

    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),
}

impl StoreError {
    /// The API error underneath, if the failure came from the backend or transport
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            StoreError::Api(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        self.api().and_then(ApiError::status)
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
