//! Two-stage submission pipeline
//!
//! Stage 1 exchanges the service ID for a short-lived bearer token at
//! `{dsn}/token`; stage 2 posts the feedback record to `{dsn}/feedback`
//! with that token. Strictly sequential: a stage-1 failure means stage 2
//! never runs. No retries, a single failure terminates the operation.

use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{FeedbackData, SdkError, SdkResult, TokenRequest, TokenResponse};

/// HTTP client for the token and feedback endpoints
#[derive(Debug, Clone)]
pub struct FeedbackApi {
    client: reqwest::Client,
}

impl Default for FeedbackApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackApi {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Build the pipeline on a caller-provided client.
    ///
    /// The SDK sets no timeout of its own; timeouts and cancellation are
    /// governed by the client configured here.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Run the full token-then-feedback submission.
    ///
    /// Resolves with the feedback endpoint's parsed response body (an empty
    /// object when the body is absent or unparsable). Every failure is a
    /// fully-populated [`SdkError`]: non-success statuses are normalized
    /// from the response, transport failures become `SERVER_ERROR`.
    pub async fn perform_submission(
        &self,
        dsn: &str,
        service_id: &str,
        feedback: &FeedbackData,
    ) -> SdkResult<Value> {
        let token = self.request_token(dsn, service_id).await?;
        self.submit_feedback(dsn, &token, feedback).await
    }

    /// Stage 1: obtain a single-use bearer token
    async fn request_token(&self, dsn: &str, service_id: &str) -> SdkResult<String> {
        let url = format!("{}/token", dsn);
        debug!("requesting submission token from {}", url);

        let response = self
            .client
            .post(&url)
            .json(&TokenRequest { service_id })
            .send()
            .await?;

        if !response.status().is_success() {
            let err = SdkError::from_response(response).await;
            warn!("token request rejected: {}", err);
            return Err(err);
        }

        let body: TokenResponse = response.json().await?;
        Ok(body.token)
    }

    /// Stage 2: submit the feedback record with the bearer token
    async fn submit_feedback(
        &self,
        dsn: &str,
        token: &str,
        feedback: &FeedbackData,
    ) -> SdkResult<Value> {
        let url = format!("{}/feedback", dsn);
        debug!("submitting feedback to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(feedback)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = SdkError::from_response(response).await;
            warn!("feedback submission rejected: {}", err);
            return Err(err);
        }

        // An absent or unparsable body on success is benign: resolve with an
        // empty object, never an error.
        let body = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(_) => return Ok(serde_json::json!({})),
        };
        Ok(serde_json::from_slice(&body).unwrap_or_else(|_| serde_json::json!({})))
    }
}
