//! Type definitions for the Feedback SDK
//! Wire-format data structures for the token and feedback endpoints

use serde::{Deserialize, Serialize};

/// User satisfaction rating
///
/// Serialized lowercase on the wire; parsing is case-sensitive, no coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Good,
    Normal,
    Bad,
}

impl Rating {
    /// All accepted ratings, in display order
    pub const ALL: [Rating; 3] = [Rating::Good, Rating::Normal, Rating::Bad];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Good => "good",
            Rating::Normal => "normal",
            Rating::Bad => "bad",
        }
    }

    /// Parse an exact rating string ("good" | "normal" | "bad")
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "good" => Some(Rating::Good),
            "normal" => Some(Rating::Normal),
            "bad" => Some(Rating::Bad),
            _ => None,
        }
    }
}

/// A validated feedback record, ready for transport
///
/// Wire names are camelCase (`feedbackRating`, `feedbackComment`,
/// `durationSec`); absent optionals are omitted from the JSON body.
/// Not retained by the SDK after submission completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackData {
    /// Required satisfaction signal
    pub feedback_rating: Rating,
    /// Optional user comment, max 500 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_comment: Option<String>,
    /// Optional duration in seconds, non-negative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<f64>,
}

impl FeedbackData {
    pub fn new(rating: Rating) -> Self {
        Self {
            feedback_rating: rating,
            feedback_comment: None,
            duration_sec: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.feedback_comment = Some(comment.into());
        self
    }

    pub fn with_duration_sec(mut self, seconds: f64) -> Self {
        self.duration_sec = Some(seconds);
        self
    }
}

/// Request body for the token endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest<'a> {
    pub service_id: &'a str,
}

/// Success body of the token endpoint
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
