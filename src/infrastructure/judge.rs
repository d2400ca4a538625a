//! Judge backend access
//!
//! Talks to a Judge0-compatible HTTP API: submit a program, get a token,
//! fetch its status until it is terminal.

pub mod client;
pub mod error;
pub mod poller;
pub mod wire;

use async_trait::async_trait;

pub use client::JudgeClient;
pub use error::JudgeError;
pub use poller::{wait_for_result, PollPolicy};

use crate::domain::execution::{ExecutionResult, SubmissionRequest, SubmissionToken};

/// The two requests the judge protocol consists of.
#[async_trait]
pub trait JudgeApi: Send + Sync {
    /// Submit source code for execution and return the job token.
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionToken, JudgeError>;

    /// Fetch the current state of a job. A result whose status is still
    /// in progress is returned as-is; the caller decides whether to poll again.
    async fn fetch_status(&self, token: &SubmissionToken) -> Result<ExecutionResult, JudgeError>;
}
