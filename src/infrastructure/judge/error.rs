use thiserror::Error;

use crate::domain::execution::{ExecutionFailure, FailureKind};

#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("Quota of submissions exceeded for the day")]
    RateLimited,

    #[error("Judge request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Judge request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected judge response: {0}")]
    UnexpectedResponse(String),

    #[error("No terminal status after {attempts} polls")]
    Timeout { attempts: u32 },
}

impl JudgeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            JudgeError::RateLimited => FailureKind::RateLimited,
            JudgeError::Timeout { .. } => FailureKind::Timeout,
            JudgeError::Http { .. }
            | JudgeError::Request(_)
            | JudgeError::UnexpectedResponse(_) => FailureKind::Network,
        }
    }
}

impl From<&JudgeError> for ExecutionFailure {
    fn from(error: &JudgeError) -> Self {
        ExecutionFailure::new(error.kind(), error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_classification() {
        assert_eq!(JudgeError::RateLimited.kind(), FailureKind::RateLimited);
        assert_eq!(
            JudgeError::Http {
                status: 500,
                body: "oops".to_string()
            }
            .kind(),
            FailureKind::Network
        );
        assert_eq!(
            JudgeError::UnexpectedResponse("no token".to_string()).kind(),
            FailureKind::Network
        );
        assert_eq!(JudgeError::Timeout { attempts: 3 }.kind(), FailureKind::Timeout);
    }

    #[test]
    fn test_failure_carries_message() {
        let failure = ExecutionFailure::from(&JudgeError::Http {
            status: 503,
            body: "unavailable".to_string(),
        });
        assert_eq!(failure.kind, FailureKind::Network);
        assert_eq!(
            failure.detail,
            "Judge request failed with status 503: unavailable"
        );
    }
}
