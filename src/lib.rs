//! Feedback SDK
//!
//! Client library for collecting a user satisfaction rating plus optional
//! comment/duration and submitting it through a two-stage protocol:
//! - exchange the service ID for a short-lived bearer token (`POST /token`)
//! - submit the validated record with that token (`POST /feedback`)
//!
//! Records are validated locally before any network activity, and every
//! remote failure is normalized to a structured error code.

pub mod api;
pub mod config;
pub mod models;
pub mod sdk;
pub mod validation;

pub use api::FeedbackApi;
pub use config::SdkConfig;
pub use models::{
    ErrorCode, FeedbackData, Rating, SdkError, SdkResult, SubmitError, UsageError,
    NETWORK_ERROR_MESSAGE,
};
pub use sdk::FeedbackSdk;
pub use validation::{validate, MAX_COMMENT_LENGTH};
