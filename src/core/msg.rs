pub mod editor;
pub mod execution;
pub mod system;

use editor::EditorMsg;
use execution::ExecutionMsg;
use system::SystemMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Buffer, language and theme (delegated to EditorState)
    Editor(EditorMsg),

    // Submission lifecycle (delegated to ExecutionState)
    Execution(ExecutionMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Editor(_) | Msg::Execution(_) => false,
        }
    }
}
