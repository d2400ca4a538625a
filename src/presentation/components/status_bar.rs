//! Status bar component
//!
//! One line at the bottom of the screen. A live notification wins over the
//! status message, which wins over the key hints.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::ui::NotificationKind,
    presentation::config::keybindings::Action,
};

#[derive(Debug, Clone)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        if let Some(notification) = &state.system.notification {
            let style = Self::notification_style(state, notification.kind);
            let line = Paragraph::new(format!(" {} ", notification.message)).style(style);
            frame.render_widget(line, area);
            return;
        }

        if let Some(message) = &state.system.status_message {
            frame.render_widget(Paragraph::new(message.as_str()), area);
            return;
        }

        let hints = Self::key_hints(state);
        frame.render_widget(Paragraph::new(Span::styled(hints, Style::default().dim())), area);
    }

    fn notification_style(state: &AppState, kind: NotificationKind) -> Style {
        let styles = &state.config.config.styles;
        match kind {
            NotificationKind::Success => styles.get_or(
                "notification.success",
                Style::default().fg(Color::Black).bg(Color::Green),
            ),
            NotificationKind::Error => styles.get_or(
                "notification.error",
                Style::default().fg(Color::White).bg(Color::Red),
            ),
            NotificationKind::RateLimit => styles.get_or(
                "notification.rate_limit",
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
            NotificationKind::Timeout => styles.get_or(
                "notification.timeout",
                Style::default().fg(Color::Black).bg(Color::Magenta),
            ),
        }
    }

    /// Bound keys for the main actions, e.g. "<ctrl-r> run  <ctrl-q> quit"
    pub fn key_hints(state: &AppState) -> String {
        let keybindings = &state.config.config.keybindings;
        [
            (Action::Run, "run"),
            (Action::CancelRun, "cancel"),
            (Action::OpenLanguagePicker, "language"),
            (Action::OpenThemePicker, "theme"),
            (Action::ClearOutput, "clear"),
            (Action::Quit, "quit"),
        ]
        .into_iter()
        .filter_map(|(action, label)| keybindings.hint_for(action).map(|h| format!("{h} {label}")))
        .collect::<Vec<_>>()
        .join("  ")
    }
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
