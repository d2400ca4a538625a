use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::{error::JudgeError, JudgeApi};
use crate::{
    domain::execution::{ExecutionResult, ExecutionStatus, SubmissionToken},
    infrastructure::config::JudgeConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay between a non-terminal response and the next fetch
    pub interval: Duration,
    /// Total number of fetches before giving up with [`JudgeError::Timeout`]
    pub max_polls: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(2000),
            max_polls: 60,
        }
    }
}

impl From<&JudgeConfig> for PollPolicy {
    fn from(config: &JudgeConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.poll_interval_ms),
            max_polls: config.max_polls.max(1),
        }
    }
}

/// Poll `token` until the judge reports a terminal status.
///
/// Fetches are strictly sequential: the next one is issued only after the
/// previous response came back in progress and `policy.interval` elapsed.
/// A transport error ends the loop without retrying. `on_progress` sees every
/// non-terminal status together with its 1-based attempt number.
///
/// Returns `None` when `cancel` fires before the loop completes.
pub async fn wait_for_result<F>(
    api: &dyn JudgeApi,
    token: &SubmissionToken,
    policy: PollPolicy,
    cancel: &CancellationToken,
    mut on_progress: F,
) -> Option<Result<ExecutionResult, JudgeError>>
where
    F: FnMut(u32, &ExecutionStatus),
{
    let mut attempt = 0;
    loop {
        attempt += 1;

        let fetched = tokio::select! {
            _ = cancel.cancelled() => return None,
            fetched = api.fetch_status(token) => fetched,
        };

        let result = match fetched {
            Ok(result) => result,
            Err(e) => {
                log::error!("Polling {token} failed on attempt {attempt}: {e}");
                return Some(Err(e));
            }
        };

        if result.is_terminal() {
            log::info!(
                "Submission {token} finished with status {} ({}) after {attempt} polls",
                result.status.id,
                result.status.description
            );
            return Some(Ok(result));
        }

        on_progress(attempt, &result.status);

        if attempt >= policy.max_polls {
            log::warn!("Giving up on {token} after {attempt} polls");
            return Some(Err(JudgeError::Timeout { attempts: attempt }));
        }

        log::debug!(
            "Submission {token} is {}; polling again in {:?}",
            result.status.description,
            policy.interval
        );

        tokio::select! {
            _ = cancel.cancelled() => return None,
            _ = tokio::time::sleep(policy.interval) => {}
        }
    }
}
