//! Local validation of untyped feedback records
//!
//! Runs before any network activity: a record that fails here never produces
//! an HTTP request. Checks run in a fixed order and short-circuit on the
//! first failure, so the reported message is deterministic even when several
//! fields are invalid.

use serde_json::Value;

use crate::models::{FeedbackData, Rating, SdkError};

/// Maximum accepted comment length, in characters
pub const MAX_COMMENT_LENGTH: usize = 500;

/// Validate an untyped feedback record into a typed [`FeedbackData`].
///
/// Pure and synchronous. Field rules:
/// - the record must be a JSON object (not null, not an array)
/// - `feedbackRating` is required: exactly `good`, `normal`, or `bad`
/// - `feedbackComment` is optional: a string of at most 500 characters
/// - `durationSec` is optional: a non-negative number (zero is valid)
pub fn validate(feedback: &Value) -> Result<FeedbackData, SdkError> {
    let record = match feedback.as_object() {
        Some(record) => record,
        None => return Err(SdkError::invalid_data("feedbackData must be an object.")),
    };

    let feedback_rating = match record
        .get("feedbackRating")
        .and_then(Value::as_str)
        .and_then(Rating::parse)
    {
        Some(rating) => rating,
        None => {
            return Err(SdkError::invalid_data(format!(
                "feedbackRating is required and must be one of: {}.",
                Rating::ALL.map(|r| r.as_str()).join(", ")
            )))
        }
    };

    let feedback_comment = match record.get("feedbackComment") {
        None => None,
        Some(value) => match value.as_str() {
            Some(comment) if comment.chars().count() <= MAX_COMMENT_LENGTH => {
                Some(comment.to_string())
            }
            _ => {
                return Err(SdkError::invalid_data(format!(
                    "feedbackComment must be a string with a maximum length of {} characters.",
                    MAX_COMMENT_LENGTH
                )))
            }
        },
    };

    let duration_sec = match record.get("durationSec") {
        None => None,
        Some(value) => match value.as_f64() {
            Some(seconds) if seconds >= 0.0 => Some(seconds),
            _ => {
                return Err(SdkError::invalid_data(
                    "durationSec must be a non-negative number.",
                ))
            }
        },
    };

    Ok(FeedbackData {
        feedback_rating,
        feedback_comment,
        duration_sec,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorCode;
    use serde_json::json;

    fn message(value: Value) -> String {
        let err = validate(&value).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidData);
        err.message
    }

    #[test]
    fn test_accepts_minimal_record() {
        let data = validate(&json!({ "feedbackRating": "good" })).unwrap();
        assert_eq!(data.feedback_rating, Rating::Good);
        assert_eq!(data.feedback_comment, None);
        assert_eq!(data.duration_sec, None);
    }

    #[test]
    fn test_accepts_full_record() {
        let data = validate(&json!({
            "feedbackRating": "bad",
            "feedbackComment": "took too long",
            "durationSec": 42,
        }))
        .unwrap();
        assert_eq!(data.feedback_rating, Rating::Bad);
        assert_eq!(data.feedback_comment.as_deref(), Some("took too long"));
        assert_eq!(data.duration_sec, Some(42.0));
    }

    #[test]
    fn test_rejects_non_object_records() {
        for value in [json!(null), json!([]), json!("good"), json!(3)] {
            assert_eq!(message(value), "feedbackData must be an object.");
        }
    }

    #[test]
    fn test_rejects_missing_or_unknown_rating() {
        let expected = "feedbackRating is required and must be one of: good, normal, bad.";
        assert_eq!(message(json!({})), expected);
        assert_eq!(message(json!({ "feedbackRating": "excellent" })), expected);
        assert_eq!(message(json!({ "feedbackRating": 1 })), expected);
        assert_eq!(message(json!({ "feedbackRating": "" })), expected);
    }

    #[test]
    fn test_rating_is_case_sensitive() {
        let expected = "feedbackRating is required and must be one of: good, normal, bad.";
        assert_eq!(message(json!({ "feedbackRating": "Good" })), expected);
        assert_eq!(message(json!({ "feedbackRating": "NORMAL" })), expected);
    }

    #[test]
    fn test_comment_boundaries() {
        let at_limit = "x".repeat(MAX_COMMENT_LENGTH);
        let data = validate(&json!({ "feedbackRating": "good", "feedbackComment": at_limit }))
            .unwrap();
        assert_eq!(data.feedback_comment.unwrap().len(), MAX_COMMENT_LENGTH);

        let over_limit = "x".repeat(MAX_COMMENT_LENGTH + 1);
        assert_eq!(
            message(json!({ "feedbackRating": "good", "feedbackComment": over_limit })),
            "feedbackComment must be a string with a maximum length of 500 characters."
        );
    }

    #[test]
    fn test_empty_comment_is_valid() {
        let data = validate(&json!({ "feedbackRating": "good", "feedbackComment": "" })).unwrap();
        assert_eq!(data.feedback_comment.as_deref(), Some(""));
    }

    #[test]
    fn test_non_string_comment_is_rejected() {
        let expected = "feedbackComment must be a string with a maximum length of 500 characters.";
        assert_eq!(
            message(json!({ "feedbackRating": "good", "feedbackComment": 7 })),
            expected
        );
        // present-but-null is not a string
        assert_eq!(
            message(json!({ "feedbackRating": "good", "feedbackComment": null })),
            expected
        );
    }

    #[test]
    fn test_duration_boundaries() {
        let data = validate(&json!({ "feedbackRating": "normal", "durationSec": 0 })).unwrap();
        assert_eq!(data.duration_sec, Some(0.0));

        let expected = "durationSec must be a non-negative number.";
        assert_eq!(
            message(json!({ "feedbackRating": "normal", "durationSec": -1 })),
            expected
        );
        assert_eq!(
            message(json!({ "feedbackRating": "normal", "durationSec": "5" })),
            expected
        );
        assert_eq!(
            message(json!({ "feedbackRating": "normal", "durationSec": null })),
            expected
        );
    }

    #[test]
    fn test_rating_error_wins_when_multiple_fields_invalid() {
        // check order is fixed: rating is reported first
        assert_eq!(
            message(json!({ "feedbackComment": 7, "durationSec": -1 })),
            "feedbackRating is required and must be one of: good, normal, bad."
        );
    }
}
