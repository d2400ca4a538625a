//! Code editor pane
//!
//! Hydrates a tui-textarea from the editor snapshot on every frame and
//! paints it with the selected theme's palette.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, infrastructure::tui::textarea_engine::TuiTextAreaEngine};

#[derive(Debug, Clone)]
pub struct EditorComponent;

impl EditorComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let palette = state.editor.theme().palette;
        let base = Style::default().fg(palette.foreground).bg(palette.background);

        let mut textarea = TuiTextAreaEngine::hydrate(&state.editor.textarea);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(format!(" {} ", state.editor.language().display_name))
                .style(base),
        );
        textarea.set_style(base);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_line_number_style(Style::default().fg(palette.muted));
        if state.editor.is_picking() {
            // the popup owns the keyboard; do not draw a live cursor under it
            textarea.set_cursor_style(Style::default());
        }

        frame.render_widget(&textarea, area);
    }
}

impl Default for EditorComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::core::state::EditorState;

    fn render(state: &AppState) -> color_eyre::Result<Buffer> {
        let mut terminal = Terminal::new(TestBackend::new(40, 6))?;
        terminal.draw(|frame| EditorComponent::new().view(state, frame, frame.area()))?;
        Ok(terminal.backend().buffer().clone())
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_title_is_language_and_code_is_visible() -> color_eyre::Result<()> {
        let state = AppState::default().with_editor(EditorState::new("puts 42", 9, 0));
        let buffer = render(&state)?;

        assert!(row(&buffer, 0).contains("Ruby (2.7.0)"));
        assert!(row(&buffer, 1).contains("puts 42"));
        Ok(())
    }

    #[test]
    fn test_palette_background_is_applied() -> color_eyre::Result<()> {
        let state = AppState::default().with_editor(EditorState::new("x", 0, 4));
        let buffer = render(&state)?;
        let palette = state.editor.theme().palette;

        let cell = buffer.cell((20, 3)).map(|c| c.bg);
        assert_eq!(cell, Some(palette.background));
        Ok(())
    }
}
