//! Configuration module for the Feedback SDK
//! Holds the per-service identity and the base URL the endpoints resolve under

use crate::models::UsageError;

/// SDK configuration
///
/// `dsn` is the base URL under which `/token` and `/feedback` are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// Service ID issued by the organization
    pub service_id: String,
    /// Base URL for the API endpoints
    pub dsn: String,
}

impl SdkConfig {
    pub fn new(service_id: impl Into<String>, dsn: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            dsn: dsn.into(),
        }
    }

    /// Load configuration from `FEEDBACK_SERVICE_ID` / `FEEDBACK_DSN`.
    ///
    /// Returns `None` when either variable is unset or empty.
    pub fn from_env() -> Option<Self> {
        let service_id = std::env::var("FEEDBACK_SERVICE_ID").ok()?;
        let dsn = std::env::var("FEEDBACK_DSN").ok()?;
        if service_id.is_empty() || dsn.is_empty() {
            return None;
        }
        Some(Self { service_id, dsn })
    }

    /// Check required fields and strip exactly one trailing slash from the dsn.
    ///
    /// The field checks run before any mutation, so a rejected config leaves
    /// the caller's state untouched.
    pub fn validated(mut self) -> Result<Self, UsageError> {
        if self.service_id.is_empty() {
            return Err(UsageError::new(
                "FeedbackSdk::init requires a config object with a serviceId property",
            ));
        }
        if self.dsn.is_empty() {
            return Err(UsageError::new(
                "FeedbackSdk::init requires a config object with a dsn property",
            ));
        }
        if let Some(stripped) = self.dsn.strip_suffix('/') {
            self.dsn = stripped.to_string();
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = SdkConfig::new("svc", "https://api.example.com/")
            .validated()
            .unwrap();
        assert_eq!(config.dsn, "https://api.example.com");
    }

    #[test]
    fn test_dsn_without_slash_is_unchanged() {
        let config = SdkConfig::new("svc", "https://api.example.com")
            .validated()
            .unwrap();
        assert_eq!(config.dsn, "https://api.example.com");
    }

    #[test]
    fn test_only_one_slash_is_stripped() {
        let config = SdkConfig::new("svc", "https://api.example.com//")
            .validated()
            .unwrap();
        assert_eq!(config.dsn, "https://api.example.com/");
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let err = SdkConfig::new("", "https://api.example.com")
            .validated()
            .unwrap_err();
        assert!(err.message.contains("serviceId property"));

        let err = SdkConfig::new("svc", "").validated().unwrap_err();
        assert!(err.message.contains("dsn property"));
    }
}
