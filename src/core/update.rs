use crate::{
    core::{
        cmd::Cmd,
        msg::{execution::ExecutionMsg, system::SystemMsg, Msg},
        state::AppState,
        textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
    },
    domain::{
        execution::{ExecutionFailure, FailureKind},
        ui::{Notification, NotificationKind},
    },
};

pub const SUCCESS_MESSAGE: &str = "Compiled Successfully!";
pub const NETWORK_ERROR_MESSAGE: &str = "Something went wrong! Please try again.";
pub const RATE_LIMIT_MESSAGE: &str =
    "Quota of 100 requests exceeded for the Day! Point CODRUSH_JUDGE_URL at your own judge to keep going.";
pub const TIMEOUT_MESSAGE: &str = "The judge did not finish in time. Please try again.";
pub const EMPTY_SOURCE_MESSAGE: &str = "Nothing to run: the editor is empty";

/// Collaborators the pure update path needs but does not own
pub struct UpdateContext<'a> {
    pub textarea_engine: &'a dyn TextAreaEngine,
}

impl Default for UpdateContext<'static> {
    fn default() -> Self {
        Self {
            textarea_engine: &NoopTextAreaEngine,
        }
    }
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(msg, state, &UpdateContext::default())
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Editor messages (delegated to EditorState)
        Msg::Editor(editor_msg) => {
            let commands = state.editor.update(editor_msg, ctx.textarea_engine);
            (state, commands)
        }

        Msg::Execution(execution_msg) => update_execution(execution_msg, state),
    }
}

/// Coordinates ExecutionState with the notifications it triggers
fn update_execution(msg: ExecutionMsg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    if let Some(epoch) = msg.epoch() {
        if !state.execution.is_current(epoch) {
            log::debug!(
                "Dropping stale judge feedback for epoch {epoch} (current {})",
                state.execution.epoch
            );
            return (state, vec![]);
        }
    }

    let notification = match &msg {
        ExecutionMsg::RunRequested { source, .. } if source.trim().is_empty() => {
            let cmds = state
                .system
                .update(SystemMsg::UpdateStatusMessage(EMPTY_SOURCE_MESSAGE.to_string()));
            return (state, cmds);
        }
        // Backend verdicts, compile and runtime errors included, count as a completed run
        ExecutionMsg::Finished { .. } => Some(Notification::new(
            NotificationKind::Success,
            SUCCESS_MESSAGE,
        )),
        ExecutionMsg::Failed { failure, .. } => Some(failure_notification(failure)),
        _ => None,
    };

    let status_message = match &msg {
        ExecutionMsg::RunRequested { .. } => Some("Processing...".to_string()),
        ExecutionMsg::Progress { status, attempt, .. } => {
            Some(format!("{} (poll {attempt})", status.description))
        }
        ExecutionMsg::Cancel if state.execution.processing => Some("Run cancelled".to_string()),
        ExecutionMsg::Finished { result, .. } => Some(result.status.description.clone()),
        _ => None,
    };

    let mut cmds = state.execution.update(msg);

    if let Some(message) = status_message {
        cmds.extend(state.system.update(SystemMsg::UpdateStatusMessage(message)));
    }
    if let Some(notification) = notification {
        cmds.extend(state.system.update(SystemMsg::Notify(notification)));
    }

    (state, cmds)
}

fn failure_notification(failure: &ExecutionFailure) -> Notification {
    match failure.kind {
        FailureKind::RateLimited => Notification::new(NotificationKind::RateLimit, RATE_LIMIT_MESSAGE),
        FailureKind::Network => Notification::new(NotificationKind::Error, NETWORK_ERROR_MESSAGE),
        FailureKind::Timeout => Notification::new(NotificationKind::Timeout, TIMEOUT_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::execution::{
        ExecutionResult, ExecutionStatus, SubmissionRequest, SubmissionToken,
    };

    fn run_requested(source: &str) -> Msg {
        Msg::Execution(ExecutionMsg::RunRequested {
            source: source.to_string(),
            language_id: 71,
        })
    }

    fn started() -> AppState {
        let (state, _) = update(run_requested("print(1)"), AppState::default());
        state
    }

    #[test]
    fn test_update_quit() {
        let (new_state, cmds) = update(Msg::System(SystemMsg::Quit), AppState::default());

        assert!(new_state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_run_places_language_id_unmodified() {
        let (state, cmds) = update(run_requested("print(1)"), AppState::default());

        assert!(state.is_processing());
        assert_eq!(state.system.status_message.as_deref(), Some("Processing..."));
        assert_eq!(
            cmds,
            vec![Cmd::RunCode {
                epoch: 1,
                request: SubmissionRequest::new(71, "print(1)"),
            }]
        );
    }

    #[test]
    fn test_blank_source_is_not_submitted() {
        let (state, cmds) = update(run_requested("  \n\t"), AppState::default());

        assert!(!state.is_processing());
        assert_eq!(state.execution.epoch, 0);
        assert!(cmds.is_empty());
        assert_eq!(
            state.system.status_message.as_deref(),
            Some(EMPTY_SOURCE_MESSAGE)
        );
    }

    #[test]
    fn test_finished_shows_result_and_success_notification() {
        let mut result = ExecutionResult::with_status(ExecutionStatus::new(3, "Accepted"));
        result.stdout = Some("hello\n".into());

        let (state, cmds) = update(
            Msg::Execution(ExecutionMsg::Finished {
                epoch: 1,
                result: result.clone(),
            }),
            started(),
        );

        assert!(!state.is_processing());
        assert_eq!(state.execution.output_details, Some(result));
        let notification = state.system.notification.expect("notification");
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, SUCCESS_MESSAGE);
        assert_eq!(notification.duration, Duration::from_millis(1000));
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_compile_error_still_counts_as_completed() {
        let mut result = ExecutionResult::with_status(ExecutionStatus::new(6, "Compilation Error"));
        result.compile_output = Some("main.c:1: error".into());

        let (state, _) = update(
            Msg::Execution(ExecutionMsg::Finished {
                epoch: 1,
                result: result.clone(),
            }),
            started(),
        );

        assert_eq!(state.execution.output_details, Some(result));
        assert_eq!(
            state.system.notification.map(|n| n.kind),
            Some(NotificationKind::Success)
        );
    }

    #[test]
    fn test_rate_limit_failure_notification() {
        let (state, _) = update(
            Msg::Execution(ExecutionMsg::Failed {
                epoch: 1,
                failure: ExecutionFailure::new(FailureKind::RateLimited, "429"),
            }),
            started(),
        );

        assert!(!state.is_processing());
        assert!(state.execution.output_details.is_none());
        let notification = state.system.notification.expect("notification");
        assert_eq!(notification.kind, NotificationKind::RateLimit);
        assert_eq!(notification.message, RATE_LIMIT_MESSAGE);
        assert_eq!(notification.duration, Duration::from_secs(10));
    }

    #[test]
    fn test_network_failure_notification() {
        let (state, _) = update(
            Msg::Execution(ExecutionMsg::Failed {
                epoch: 1,
                failure: ExecutionFailure::new(FailureKind::Network, "connection reset"),
            }),
            started(),
        );

        let notification = state.system.notification.expect("notification");
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_timeout_failure_notification() {
        let (state, _) = update(
            Msg::Execution(ExecutionMsg::Failed {
                epoch: 1,
                failure: ExecutionFailure::new(FailureKind::Timeout, "60 polls"),
            }),
            started(),
        );

        assert_eq!(
            state.system.notification.map(|n| n.kind),
            Some(NotificationKind::Timeout)
        );
    }

    #[test]
    fn test_stale_feedback_is_ignored() {
        let state = started();
        let (state, _) = update(run_requested("print(2)"), state);
        assert_eq!(state.execution.epoch, 2);

        let (state, cmds) = update(
            Msg::Execution(ExecutionMsg::Finished {
                epoch: 1,
                result: ExecutionResult::with_status(ExecutionStatus::new(3, "Accepted")),
            }),
            state,
        );

        assert!(state.is_processing());
        assert!(state.execution.output_details.is_none());
        assert!(state.system.notification.is_none());
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_feedback_after_cancel_is_ignored() {
        let (state, cmds) = update(Msg::Execution(ExecutionMsg::Cancel), started());
        assert_eq!(cmds, vec![Cmd::CancelRun]);
        assert_eq!(state.system.status_message.as_deref(), Some("Run cancelled"));

        let (state, _) = update(
            Msg::Execution(ExecutionMsg::Failed {
                epoch: 1,
                failure: ExecutionFailure::new(FailureKind::Network, "late"),
            }),
            state,
        );
        assert!(state.system.notification.is_none());
    }

    #[test]
    fn test_progress_updates_status_line() {
        let state = started();
        let (state, _) = update(
            Msg::Execution(ExecutionMsg::Submitted {
                epoch: 1,
                token: SubmissionToken::new("tok"),
            }),
            state,
        );
        let (state, _) = update(
            Msg::Execution(ExecutionMsg::Progress {
                epoch: 1,
                attempt: 3,
                status: ExecutionStatus::new(2, "Processing"),
            }),
            state,
        );

        assert_eq!(state.execution.polls, 3);
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Processing (poll 3)")
        );
    }
}
