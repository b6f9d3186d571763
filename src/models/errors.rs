//! Centralized Error Handling Module
//!
//! Every failure surfaced by the SDK carries a machine-readable code plus a
//! human-readable message, so callers can branch on the code and log the
//! message as-is.
//!
//! Two families, kept deliberately separate:
//! - [`SdkError`]: validation and backend failures (the structured taxonomy)
//! - [`UsageError`]: SDK misuse (init not called, missing config fields)

use std::fmt;

/// Fallback message when a transport failure carries no message of its own.
pub const NETWORK_ERROR_MESSAGE: &str = "A network error occurred.";

/// Structured error codes for feedback submission failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed local input, or payload rejected by the server (HTTP 400)
    InvalidData,
    /// Token request rejected (HTTP 401)
    Unauthorized,
    /// Duplicate submission (HTTP 409)
    SubmissionConflict,
    /// Any other non-success status, or a transport failure
    ServerError,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidData => "INVALID_DATA",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::SubmissionConflict => "SUBMISSION_CONFLICT",
            Self::ServerError => "SERVER_ERROR",
        }
    }

    /// Map an HTTP status to an error code
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidData,
            401 => Self::Unauthorized,
            409 => Self::SubmissionConflict,
            _ => Self::ServerError,
        }
    }
}

/// Structured error: the only rejection shape the submission path surfaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkError {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl SdkError {
    /// Create a new SdkError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Local validation failure
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidData, message)
    }

    /// Transport-level failure
    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServerError, message)
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    /// Build a structured error from a non-success HTTP response.
    ///
    /// Uses the body's `message` field when present and non-empty,
    /// otherwise falls back to `"Request failed with status N"`. An
    /// unparsable body is treated as an empty object. Never fails.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body: serde_json::Value = response
            .json()
            .await
            .unwrap_or_else(|_| serde_json::json!({}));

        let message = body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        Self::new(ErrorCode::from_status(status), message)
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for SdkError {}

impl From<reqwest::Error> for SdkError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            Self::server_error(NETWORK_ERROR_MESSAGE)
        } else {
            Self::server_error(message)
        }
    }
}

/// SDK misuse: a programmer error, not a runtime data failure.
///
/// Raised when `init` is given incomplete configuration or `submit` runs
/// before `init`. Deliberately outside the [`ErrorCode`] taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError {
    pub message: String,
}

impl UsageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UsageError {}

/// Rejection type of `FeedbackSdk::submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// SDK misused (submit before init)
    Usage(UsageError),
    /// Validation or backend failure
    Sdk(SdkError),
}

impl SubmitError {
    /// Structured code, if this is a structured failure
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Usage(_) => None,
            Self::Sdk(err) => Some(err.code),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(err) => write!(f, "{}", err),
            Self::Sdk(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Usage(err) => Some(err),
            Self::Sdk(err) => Some(err),
        }
    }
}

impl From<UsageError> for SubmitError {
    fn from(err: UsageError) -> Self {
        Self::Usage(err)
    }
}

impl From<SdkError> for SubmitError {
    fn from(err: SdkError) -> Self {
        Self::Sdk(err)
    }
}

/// SDK Result type for the submission path
pub type SdkResult<T> = Result<T, SdkError>;
