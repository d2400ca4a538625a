//! Top bar: language, theme and the run indicator

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::config::keybindings::Action};

#[derive(Debug, Clone)]
pub struct ToolbarComponent;

impl ToolbarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let palette = state.editor.theme().palette;
        let bar = Style::default().fg(palette.foreground).bg(palette.background);

        let left = Line::from(vec![
            Span::styled(format!(" {} ", env!("CARGO_PKG_NAME")), bar.bold()),
            Span::styled("Language: ", Style::default().fg(palette.muted)),
            Span::raw(state.editor.language().display_name),
            Span::raw("  "),
            Span::styled("Theme: ", Style::default().fg(palette.muted)),
            Span::raw(state.editor.theme().label),
        ]);
        frame.render_widget(Paragraph::new(left).style(bar), area);

        let run = Self::run_label(state);
        let run_style = if state.is_processing() {
            state
                .config
                .config
                .styles
                .get_or("processing", Style::default().fg(Color::Yellow).bold())
        } else {
            Style::default().fg(palette.accent).bold()
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(run, run_style)).right_aligned()),
            area,
        );
    }

    /// "Processing..." while a run is in flight, otherwise the run key hint
    pub fn run_label(state: &AppState) -> String {
        if state.is_processing() {
            return "Processing... ".to_string();
        }
        match state.config.config.keybindings.hint_for(Action::Run) {
            Some(hint) => format!("Run {hint} "),
            None => "Run ".to_string(),
        }
    }
}

impl Default for ToolbarComponent {
    fn default() -> Self {
        Self::new()
    }
}
