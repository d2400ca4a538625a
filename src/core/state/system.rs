use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};
use crate::domain::ui::{Notification, NotificationKind};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    /// At most one notification is shown; a newer one replaces it
    pub notification: Option<Notification>,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::Tick(now) => {
                let Some(notification) = self.notification.as_mut() else {
                    return vec![];
                };
                if notification.shown_at.is_none() {
                    notification.shown_at = Some(now);
                    return vec![];
                }
                if notification.is_expired(now) {
                    self.notification = None;
                    return vec![Cmd::RequestRender];
                }
                vec![]
            }

            // Status management
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.notification = Some(Notification::new(
                    NotificationKind::Error,
                    format!("Error: {error}"),
                ));
                vec![]
            }

            SystemMsg::Notify(notification) => {
                self.notification = Some(notification);
                vec![]
            }

            SystemMsg::ClearNotification => {
                self.notification = None;
                vec![]
            }
        }
    }
}
