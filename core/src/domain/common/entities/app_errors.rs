use thiserror::Error;

use crate::domain::submission::value_objects::FieldErrors;

/// Shown when a remote failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "제출 중 오류가 발생했습니다.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Draft has {} invalid field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("The form is not accepting input")]
    NotEditing,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server rejected the request with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl CoreError {
    /// Text to surface to the user for a failed submission.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_message() {
        let error = CoreError::Rejected {
            status: 409,
            message: Some("duplicate entry".to_string()),
        };
        assert_eq!(error.user_message(), "duplicate entry");
    }

    #[test]
    fn test_user_message_falls_back_to_generic() {
        let rejected = CoreError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(rejected.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(CoreError::Timeout.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(
            CoreError::Network("connection refused".to_string()).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
    }
}
