use thiserror::Error;

use crate::model::EntryId;

/// Reasons a submission is refused or cannot be completed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("A review is already being analyzed")]
    Busy,
    #[error("Review text must not be empty")]
    EmptyReview,
    #[error("Rating {0} is outside the 1.0 to 5.0 range")]
    RatingOutOfRange(f64),
    #[error("Submission {0} is not the one in flight")]
    StaleSubmission(EntryId),
}

/// Transport-level failures talking to the classification service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("Failed to build request: {0}")]
    Request(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("predict_url must not be empty")]
    EmptyUrl,
    #[error("failure_message must not be empty")]
    EmptyFailureMessage,
    #[error("request_timeout_ms must be greater than zero")]
    ZeroTimeout,
}
