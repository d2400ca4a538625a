//! Component collection and layout
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod editor;
pub mod output;
pub mod picker;
pub mod status_bar;
pub mod toolbar;

pub use editor::EditorComponent;
pub use output::OutputComponent;
pub use picker::PickerComponent;
pub use status_bar::StatusBarComponent;
pub use toolbar::ToolbarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub toolbar: ToolbarComponent,
    pub editor: EditorComponent,
    pub output: OutputComponent,
    pub picker: PickerComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the whole screen
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        // [toolbar, main area, status bar]
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        // editor on the left, output on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        self.toolbar.view(state, frame, rows[0]);
        self.editor.view(state, frame, columns[0]);
        self.output.view(state, frame, columns[1]);
        self.status_bar.view(state, frame, rows[2]);

        // popup last so it sits on top
        self.picker.view(state, frame, rows[1]);
    }
}
