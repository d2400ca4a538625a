use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::domain::execution::{
    ExecutionFailure, ExecutionResult, ExecutionStatus, SubmissionToken,
};

/// Events reported by the judge service for one submission generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JudgeEvent {
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

impl JudgeEvent {
    pub fn epoch(&self) -> u64 {
        match self {
            JudgeEvent::Submitted { epoch, .. }
            | JudgeEvent::Progress { epoch, .. }
            | JudgeEvent::Finished { epoch, .. }
            | JudgeEvent::Failed { epoch, .. } => *epoch,
        }
    }
}

/// Raw messages from external sources (input, network, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq)]
pub enum RawMsg {
    // System events
    Tick(Instant),
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // Judge service events
    Judge(JudgeEvent),

    // System status
    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick(_) | RawMsg::Render)
    }
}
