use crate::domain::execution::{
    ExecutionFailure, ExecutionResult, ExecutionStatus, SubmissionToken,
};

/// Messages specific to ExecutionState
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMsg {
    /// Start a new submission, superseding any pending one
    RunRequested { source: String, language_id: u32 },
    /// Stop tracking the pending submission
    Cancel,
    ClearOutput,

    // Judge service feedback, tagged with the submission generation
    Submitted {
        epoch: u64,
        token: SubmissionToken,
    },
    Progress {
        epoch: u64,
        attempt: u32,
        status: ExecutionStatus,
    },
    Finished {
        epoch: u64,
        result: ExecutionResult,
    },
    Failed {
        epoch: u64,
        failure: ExecutionFailure,
    },
}

impl ExecutionMsg {
    /// Generation tag for messages coming back from the judge service
    pub fn epoch(&self) -> Option<u64> {
        match self {
            ExecutionMsg::Submitted { epoch, .. }
            | ExecutionMsg::Progress { epoch, .. }
            | ExecutionMsg::Finished { epoch, .. }
            | ExecutionMsg::Failed { epoch, .. } => Some(*epoch),
            ExecutionMsg::RunRequested { .. } | ExecutionMsg::Cancel | ExecutionMsg::ClearOutput => {
                None
            }
        }
    }
}
