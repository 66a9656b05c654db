//! Client error types for the MotorMate SDK

use std::fmt::{Display, Formatter};

use serde_json::Value;

/// Error type for HTTP and resource API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed: {0}")]
    Status(ErrorResponse),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid x-pagination header: {0}")]
    InvalidPagination(String),

    #[error("operation '{0}' is not supported by this resource")]
    Unsupported(&'static str),

    #[error("resource requires a scope (user id) to be listed")]
    MissingScope,

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// The failed response, when the server answered with a non-2xx status
    pub fn response(&self) -> Option<&ErrorResponse> {
        match self {
            ApiError::Status(response) => Some(response),
            _ => None,
        }
    }

    /// HTTP status code of the failed response, if any
    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Classification of a failed response by status code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    ServerFault,
    Other,
}

/// Raw failed response: status plus the decoded body.
///
/// Bodies that are not JSON are kept as a JSON string.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub status: u16,
    pub body: Value,
}

impl ErrorResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.status {
            400 => ErrorKind::Validation,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            500 => ErrorKind::ServerFault,
            _ => ErrorKind::Other,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.body.get("title").and_then(Value::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Every validation message in the `errors` field, flattened in order.
    ///
    /// Accepts a field map (`{"Name": ["required"]}`) as well as a list of
    /// `{ "description": ... }` objects.
    pub fn validation_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if let Some(errors) = self.body.get("errors") {
            collect_messages(errors, &mut messages);
        }
        messages
    }
}

fn collect_messages(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|item| collect_messages(item, out)),
        Value::Object(map) => {
            if let Some(description) = map.get("description").and_then(Value::as_str) {
                out.push(description.to_string());
            } else {
                map.values().for_each(|item| collect_messages(item, out));
            }
        }
        other => out.push(other.to_string()),
    }
}

impl Display for ErrorResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let detail = self
            .message()
            .or_else(|| self.title())
            .map(str::to_string)
            .unwrap_or_else(|| self.body.to_string());
        write!(f, "status {}: {}", self.status, detail)
    }
}
