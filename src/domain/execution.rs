//! Execution domain types shared by the judge client, the state container and the renderer

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64_ENGINE, Engine as _};
use serde::{Deserialize, Serialize};

/// Status ids the client gives a meaning to. The judge owns the full id space;
/// anything not listed here is still a valid terminal status.
pub mod status_id {
    pub const IN_QUEUE: u32 = 1;
    pub const PROCESSING: u32 = 2;
    pub const ACCEPTED: u32 = 3;
    pub const TIME_LIMIT_EXCEEDED: u32 = 5;
    pub const COMPILATION_ERROR: u32 = 6;
    /// Used when the judge response carries no status object at all.
    pub const UNKNOWN: u32 = 0;
}

/// Source code and language for a single run. The wire form is produced at
/// send time by [`SubmissionRequest::encoded_source`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub language_id: u32,
    pub source_code: String,
}

impl SubmissionRequest {
    pub fn new(language_id: u32, source_code: impl Into<String>) -> Self {
        Self {
            language_id,
            source_code: source_code.into(),
        }
    }

    pub fn encoded_source(&self) -> String {
        BASE64_ENGINE.encode(self.source_code.as_bytes())
    }
}

/// Opaque identifier of a pending job on the judge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionToken(String);

impl SubmissionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStatus {
    pub id: u32,
    pub description: String,
}

impl ExecutionStatus {
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }

    pub fn unknown() -> Self {
        Self::new(status_id::UNKNOWN, "Unknown")
    }

    /// Queued or processing. Every other id is terminal.
    pub fn is_in_progress(&self) -> bool {
        matches!(self.id, status_id::IN_QUEUE | status_id::PROCESSING)
    }
}

/// Judge result with every text field already decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub message: Option<String>,
    pub time: Option<String>,
    pub memory: Option<u64>,
}

impl ExecutionResult {
    pub fn with_status(status: ExecutionStatus) -> Self {
        Self {
            status,
            stdout: None,
            stderr: None,
            compile_output: None,
            message: None,
            time: None,
            memory: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !self.status.is_in_progress()
    }
}

/// How a run failed before a terminal result was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// Daily quota exhausted (HTTP 429 on submit)
    RateLimited,
    /// Any other HTTP or transport failure
    Network,
    /// Poll budget exhausted without a terminal status
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionFailure {
    pub kind: FailureKind,
    pub detail: String,
}

impl ExecutionFailure {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, true)]
    #[case(2, true)]
    #[case(0, false)]
    #[case(3, false)]
    #[case(6, false)]
    #[case(11, false)]
    #[case(14, false)]
    #[case(42, false)]
    fn test_status_in_progress(#[case] id: u32, #[case] in_progress: bool) {
        let status = ExecutionStatus::new(id, "whatever");
        assert_eq!(status.is_in_progress(), in_progress);
        assert_eq!(ExecutionResult::with_status(status).is_terminal(), !in_progress);
    }

    #[rstest]
    #[case("console.log(1)")]
    #[case("")]
    #[case("print('héllo, wörld') # ünïcödé")]
    #[case("fn main() {\n\tprintln!(\"🦀\");\n}\n")]
    #[case("~!@#$%^&*()_+`-=[]{}|;':\",./<>?")]
    fn test_encoded_source_round_trips(#[case] source: &str) {
        let request = SubmissionRequest::new(63, source);
        let decoded = BASE64_ENGINE
            .decode(request.encoded_source())
            .expect("valid base64");
        assert_eq!(String::from_utf8(decoded).expect("utf-8"), source);
    }

    #[test]
    fn test_encoded_source_uses_padded_standard_alphabet() {
        let request = SubmissionRequest::new(63, "console.log(1)");
        assert_eq!(request.encoded_source(), "Y29uc29sZS5sb2coMSk=");
    }

    #[test]
    fn test_token_is_transparent_in_json() -> serde_json::Result<()> {
        let token = SubmissionToken::new("abc");
        assert_eq!(serde_json::to_string(&token)?, "\"abc\"");
        assert_eq!(token.to_string(), "abc");
        Ok(())
    }
}
