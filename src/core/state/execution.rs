use crate::core::{cmd::Cmd, msg::execution::ExecutionMsg};
use crate::domain::execution::{
    ExecutionResult, ExecutionStatus, SubmissionRequest, SubmissionToken,
};

/// Submission lifecycle: what is pending and what was last shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionState {
    /// Last terminal result; kept until the next one arrives or it is cleared
    pub output_details: Option<ExecutionResult>,
    pub processing: bool,
    /// Generation of the newest submission; feedback tagged otherwise is stale
    pub epoch: u64,
    pub token: Option<SubmissionToken>,
    pub polls: u32,
    pub last_status: Option<ExecutionStatus>,
}

impl ExecutionState {
    /// Whether feedback tagged with `epoch` belongs to the newest submission
    pub fn is_current(&self, epoch: u64) -> bool {
        self.processing && self.epoch == epoch
    }

    /// Execution-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: ExecutionMsg) -> Vec<Cmd> {
        match msg {
            ExecutionMsg::RunRequested {
                source,
                language_id,
            } => {
                self.epoch += 1;
                self.processing = true;
                self.token = None;
                self.polls = 0;
                self.last_status = None;
                vec![Cmd::RunCode {
                    epoch: self.epoch,
                    request: SubmissionRequest::new(language_id, source),
                }]
            }

            ExecutionMsg::Cancel => {
                if !self.processing {
                    return vec![];
                }
                // Bump so late feedback from the cancelled loop is ignored
                self.epoch += 1;
                self.processing = false;
                self.token = None;
                self.last_status = None;
                vec![Cmd::CancelRun]
            }

            ExecutionMsg::ClearOutput => {
                self.output_details = None;
                vec![]
            }

            ExecutionMsg::Submitted { token, .. } => {
                self.token = Some(token);
                vec![]
            }

            ExecutionMsg::Progress {
                attempt, status, ..
            } => {
                self.polls = attempt;
                self.last_status = Some(status);
                vec![]
            }

            ExecutionMsg::Finished { result, .. } => {
                self.processing = false;
                self.last_status = Some(result.status.clone());
                self.output_details = Some(result);
                vec![]
            }

            ExecutionMsg::Failed { failure, .. } => {
                self.processing = false;
                vec![Cmd::LogError {
                    message: format!("Execution failed ({:?}): {}", failure.kind, failure.detail),
                }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::execution::{ExecutionFailure, FailureKind};

    fn run(state: &mut ExecutionState) -> Vec<Cmd> {
        state.update(ExecutionMsg::RunRequested {
            source: "console.log(1)".into(),
            language_id: 63,
        })
    }

    #[test]
    fn test_run_requested_starts_new_generation() {
        let mut state = ExecutionState::default();
        let cmds = run(&mut state);

        assert!(state.processing);
        assert_eq!(state.epoch, 1);
        assert_eq!(
            cmds,
            vec![Cmd::RunCode {
                epoch: 1,
                request: SubmissionRequest::new(63, "console.log(1)"),
            }]
        );
    }

    #[test]
    fn test_run_keeps_previous_output_until_replaced() {
        let mut state = ExecutionState {
            output_details: Some(ExecutionResult::with_status(ExecutionStatus::new(3, "Accepted"))),
            ..Default::default()
        };
        run(&mut state);
        assert!(state.output_details.is_some());
    }

    #[test]
    fn test_second_run_supersedes_first() {
        let mut state = ExecutionState::default();
        run(&mut state);
        run(&mut state);

        assert_eq!(state.epoch, 2);
        assert!(!state.is_current(1));
        assert!(state.is_current(2));
    }

    #[test]
    fn test_finished_stores_result_and_clears_processing() {
        let mut state = ExecutionState::default();
        run(&mut state);
        let result = ExecutionResult::with_status(ExecutionStatus::new(6, "Compilation Error"));
        state.update(ExecutionMsg::Finished {
            epoch: 1,
            result: result.clone(),
        });

        assert!(!state.processing);
        assert_eq!(state.output_details, Some(result));
        assert!(!state.is_current(1));
    }

    #[test]
    fn test_failed_clears_processing_and_keeps_output() {
        let previous = ExecutionResult::with_status(ExecutionStatus::new(3, "Accepted"));
        let mut state = ExecutionState {
            output_details: Some(previous.clone()),
            ..Default::default()
        };
        run(&mut state);
        let cmds = state.update(ExecutionMsg::Failed {
            epoch: 1,
            failure: ExecutionFailure::new(FailureKind::Network, "connection refused"),
        });

        assert!(!state.processing);
        assert_eq!(state.output_details, Some(previous));
        assert!(matches!(cmds.as_slice(), [Cmd::LogError { .. }]));
    }

    #[test]
    fn test_progress_tracks_polls() {
        let mut state = ExecutionState::default();
        run(&mut state);
        state.update(ExecutionMsg::Submitted {
            epoch: 1,
            token: SubmissionToken::new("abc"),
        });
        state.update(ExecutionMsg::Progress {
            epoch: 1,
            attempt: 2,
            status: ExecutionStatus::new(2, "Processing"),
        });

        assert_eq!(state.token, Some(SubmissionToken::new("abc")));
        assert_eq!(state.polls, 2);
        assert_eq!(state.last_status.map(|s| s.id), Some(2));
    }

    #[test]
    fn test_cancel_only_when_processing() {
        let mut state = ExecutionState::default();
        assert!(state.update(ExecutionMsg::Cancel).is_empty());

        run(&mut state);
        let cmds = state.update(ExecutionMsg::Cancel);
        assert_eq!(cmds, vec![Cmd::CancelRun]);
        assert!(!state.processing);
        assert!(!state.is_current(1));
    }

    #[test]
    fn test_clear_output() {
        let mut state = ExecutionState {
            output_details: Some(ExecutionResult::with_status(ExecutionStatus::new(3, "Accepted"))),
            ..Default::default()
        };
        state.update(ExecutionMsg::ClearOutput);
        assert_eq!(state.output_details, None);
    }
}
