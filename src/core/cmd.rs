use serde::{Deserialize, Serialize};

use crate::domain::execution::SubmissionRequest;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated by AppRunner; requests arrive via Cmd::RequestRender.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network communication, terminal I/O, logging)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Judge-related commands
    RunCode {
        epoch: u64,
        request: SubmissionRequest,
    },
    CancelRun,

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; AppRunner drains these before drawing
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::RunCode { .. } => "RunCode",
            Cmd::CancelRun => "CancelRun",
            Cmd::Tui(..) => "Tui",
            Cmd::RequestRender => "RequestRender",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
            Cmd::Batch(..) => "Batch",
            Cmd::None => "None",
        }
    }
}
