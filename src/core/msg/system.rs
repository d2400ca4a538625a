use std::time::Instant;

use crate::domain::ui::Notification;

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq)]
pub enum SystemMsg {
    // System control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
    Tick(Instant),

    // Status management
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
    Notify(Notification),
    ClearNotification,
}

impl SystemMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Tick(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::NotificationKind;

    #[test]
    fn test_system_msg_frequent_detection() {
        assert!(SystemMsg::Tick(Instant::now()).is_frequent());
        assert!(!SystemMsg::Quit.is_frequent());
        assert!(!SystemMsg::ShowError("test".to_string()).is_frequent());
    }

    #[test]
    fn test_system_msg_equality() {
        assert_eq!(SystemMsg::Quit, SystemMsg::Quit);
        assert_ne!(SystemMsg::Quit, SystemMsg::Suspend);

        let n = Notification::new(NotificationKind::Success, "ok");
        assert_eq!(SystemMsg::Notify(n.clone()), SystemMsg::Notify(n));
    }
}
