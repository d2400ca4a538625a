//! Output panes: program output or compile diagnostics, plus run metadata

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{
        output::{OutputView, Tone},
        theme::Palette,
    },
};

const PLACEHOLDER: &str = "Run your code to see the output here";

#[derive(Debug, Clone)]
pub struct OutputComponent;

impl OutputComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let palette = state.editor.theme().palette;
        let view = OutputView::from_result(state.execution.output_details.as_ref());

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(5)])
            .split(area);

        frame.render_widget(Self::output_pane(&view, state, &palette), layout[0]);
        frame.render_widget(Self::details_pane(&view, &palette), layout[1]);
    }

    fn output_pane<'a>(view: &'a OutputView, state: &AppState, palette: &Palette) -> Paragraph<'a> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(" Output ")
            .style(Style::default().fg(palette.foreground).bg(palette.background));

        let text = if let Some(compile_output) = &view.compile_output {
            Text::styled(compile_output.as_str(), Style::default().fg(palette.error))
        } else if let Some(pane) = &view.program_output {
            let color = match pane.tone {
                Tone::Success => palette.success,
                Tone::Error => palette.error,
            };
            Text::styled(pane.text.as_str(), Style::default().fg(color))
        } else if state.is_processing() {
            Text::styled("Processing...", Style::default().fg(palette.muted).italic())
        } else {
            Text::styled(PLACEHOLDER, Style::default().fg(palette.muted))
        };

        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
    }

    fn details_pane<'a>(view: &'a OutputView, palette: &Palette) -> Paragraph<'a> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .title(" Details ")
            .style(Style::default().fg(palette.foreground).bg(palette.background));

        let Some(details) = &view.details else {
            return Paragraph::new("").block(block);
        };

        let field = |label: &'static str, value: Option<&'a str>| {
            Line::from(vec![
                Span::styled(label, Style::default().fg(palette.muted)),
                Span::raw(value.unwrap_or("-")),
            ])
        };
        Paragraph::new(vec![
            field("Status: ", Some(details.status.as_str())),
            field("Memory: ", details.memory.as_deref()),
            field("Time: ", details.time.as_deref()),
        ])
        .block(block)
    }
}

impl Default for OutputComponent {
    fn default() -> Self {
        Self::new()
    }
}
