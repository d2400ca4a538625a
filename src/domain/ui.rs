use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Canonical cursor position type used across UI domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Text selection range within a text buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: CursorPosition,
    pub end: CursorPosition,
}

/// Which dropdown is open over the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickerKind {
    Language,
    Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    /// Quota exhaustion; shown longer than a regular error
    RateLimit,
    Timeout,
}

impl NotificationKind {
    pub fn default_duration(&self) -> Duration {
        match self {
            NotificationKind::Success | NotificationKind::Error => Duration::from_millis(1000),
            NotificationKind::Timeout => Duration::from_millis(5000),
            NotificationKind::RateLimit => Duration::from_millis(10000),
        }
    }
}

/// Transient message shown in the status line until it expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: Option<Instant>,
    pub duration: Duration,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: None,
            duration: kind.default_duration(),
        }
    }

    /// The clock starts at the first tick after the notification is raised.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.shown_at
            .is_some_and(|shown_at| now.saturating_duration_since(shown_at) >= self.duration)
    }
}
