//! Language / theme dropdown, drawn as a centered popup over the editor

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{core::state::AppState, domain::ui::PickerKind};

#[derive(Debug, Clone)]
pub struct PickerComponent;

impl PickerComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(picker) = state.editor.picker else {
            return;
        };
        let palette = state.editor.theme().palette;

        let title = match picker.kind {
            PickerKind::Language => " Language ",
            PickerKind::Theme => " Theme ",
        };
        let labels = picker.labels();
        let width = labels.iter().map(|l| l.width()).max().unwrap_or(0) as u16 + 6;
        let height = labels.len() as u16 + 2;
        let popup = centered(area, width, height);

        let list = List::new(labels)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.accent))
                    .title(title),
            )
            .style(Style::default().fg(palette.foreground).bg(palette.background))
            .highlight_style(
                Style::default()
                    .fg(palette.background)
                    .bg(palette.accent)
                    .bold(),
            )
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(Some(picker.selected));

        frame.render_widget(Clear, popup);
        frame.render_stateful_widget(list, popup, &mut list_state);
    }
}

impl Default for PickerComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
