//! SDK Facade
//!
//! `FeedbackSdk` is an explicit, constructible component rather than a
//! module-level singleton, so each consumer (and each test) owns its state.
//! Two states: uninitialized after `new`, ready after a successful `init`.
//! Repeated `init` calls simply replace the configuration.

use serde_json::Value;
use tracing::{debug, info};

use crate::api::FeedbackApi;
use crate::config::SdkConfig;
use crate::models::{FeedbackData, SubmitError, UsageError};
use crate::validation::validate;

/// Feedback SDK entry point
#[derive(Debug, Clone, Default)]
pub struct FeedbackSdk {
    config: Option<SdkConfig>,
    api: FeedbackApi,
}

impl FeedbackSdk {
    /// Create an uninitialized SDK; call [`init`](Self::init) before submitting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an uninitialized SDK on a caller-provided HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            config: None,
            api: FeedbackApi::with_client(client),
        }
    }

    /// Store the configuration and transition to ready.
    ///
    /// Fails on an empty `service_id` or `dsn` before any state change, so a
    /// rejected call leaves prior configuration intact. The dsn is stored
    /// with exactly one trailing slash stripped.
    pub fn init(&mut self, config: SdkConfig) -> Result<(), UsageError> {
        let config = config.validated()?;
        info!("feedback SDK initialized for service {}", config.service_id);
        self.config = Some(config);
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.config.is_some()
    }

    /// Currently stored configuration, if initialized
    pub fn config(&self) -> Option<&SdkConfig> {
        self.config.as_ref()
    }

    /// Validate and submit an untyped feedback record.
    ///
    /// Resolves with the feedback endpoint's response body. Fails with a
    /// usage error before `init`, with `INVALID_DATA` on a record that fails
    /// local validation (no network call is made), and otherwise passes the
    /// pipeline's outcome through unchanged.
    pub async fn submit(&self, feedback: &Value) -> Result<Value, SubmitError> {
        let config = self.config.as_ref().ok_or_else(|| {
            UsageError::new("FeedbackSdk::submit called before init(). Call init() first.")
        })?;

        let data = validate(feedback)?;
        debug!("feedback record validated ({})", data.feedback_rating.as_str());

        let result = self
            .api
            .perform_submission(&config.dsn, &config.service_id, &data)
            .await?;
        info!("feedback submitted ({})", data.feedback_rating.as_str());
        Ok(result)
    }

    /// Submit an already-typed record.
    ///
    /// Funnels through the same validator as [`submit`](Self::submit), so
    /// the no-invalid-record-on-the-wire invariant holds on this path too.
    pub async fn submit_data(&self, feedback: &FeedbackData) -> Result<Value, SubmitError> {
        let value = serde_json::to_value(feedback)
            .map_err(|e| SubmitError::Sdk(crate::models::SdkError::server_error(e.to_string())))?;
        self.submit(&value).await
    }
}
