pub mod editor;
pub mod execution;
pub mod system;

use crate::infrastructure::config::Config;

pub use editor::{EditorState, PickerState, TextAreaState};
pub use execution::ExecutionState;
pub use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub editor: EditorState,
    pub execution: ExecutionState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn with_editor(mut self, editor: EditorState) -> Self {
        self.editor = editor;
        self
    }

    /// True while a submission is in flight, i.e. the "Processing..." state
    pub fn is_processing(&self) -> bool {
        self.execution.processing
    }
}
