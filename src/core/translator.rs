use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{
    msg::{editor::EditorMsg, execution::ExecutionMsg, system::SystemMsg, Msg},
    raw_msg::{JudgeEvent, RawMsg},
    state::AppState,
};
use crate::domain::ui::PickerKind;
use crate::presentation::config::keybindings::Action;

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Tick(now) => vec![Msg::System(SystemMsg::Tick(now))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Judge(event) => vec![Msg::Execution(translate_judge_event(event))],

        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Render is handled by the runner
        RawMsg::Render => vec![],
    }
}

fn translate_judge_event(event: JudgeEvent) -> ExecutionMsg {
    match event {
        JudgeEvent::Submitted { epoch, token } => ExecutionMsg::Submitted { epoch, token },
        JudgeEvent::Progress {
            epoch,
            attempt,
            status,
        } => ExecutionMsg::Progress {
            epoch,
            attempt,
            status,
        },
        JudgeEvent::Finished { epoch, result } => ExecutionMsg::Finished { epoch, result },
        JudgeEvent::Failed { epoch, failure } => ExecutionMsg::Failed { epoch, failure },
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Configured bindings win over everything else
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(*action, state);
    }

    if state.editor.is_picking() {
        return translate_picker_keys(key);
    }

    // Everything else is text editing
    vec![Msg::Editor(EditorMsg::Input(key))]
}

/// Keys while a picker popup is open; unbound keys are swallowed
fn translate_picker_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => vec![Msg::Editor(EditorMsg::PickerUp)],
        KeyCode::Down | KeyCode::Char('j') => vec![Msg::Editor(EditorMsg::PickerDown)],
        KeyCode::Enter => vec![Msg::Editor(EditorMsg::PickerConfirm)],
        KeyCode::Esc => vec![Msg::Editor(EditorMsg::PickerCancel)],
        _ => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Run => translate_run(state),
        Action::CancelRun => vec![Msg::Execution(ExecutionMsg::Cancel)],
        Action::ClearOutput => vec![Msg::Execution(ExecutionMsg::ClearOutput)],
        Action::OpenLanguagePicker => toggle_picker(PickerKind::Language, state),
        Action::OpenThemePicker => toggle_picker(PickerKind::Theme, state),
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
    }
}

/// Snapshot the buffer and the selected language into a run request
fn translate_run(state: &AppState) -> Vec<Msg> {
    if state.editor.is_picking() {
        return vec![];
    }
    vec![Msg::Execution(ExecutionMsg::RunRequested {
        source: state.editor.code().to_string(),
        language_id: state.editor.language().execution_id,
    })]
}

fn toggle_picker(kind: PickerKind, state: &AppState) -> Vec<Msg> {
    match state.editor.picker {
        Some(picker) if picker.kind == kind => vec![Msg::Editor(EditorMsg::PickerCancel)],
        _ => vec![Msg::Editor(EditorMsg::OpenPicker(kind))],
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::core::state::{EditorState, PickerState};
    use crate::domain::execution::{ExecutionFailure, FailureKind, SubmissionToken};
    use crate::infrastructure::config::Config;
    use crate::presentation::config::KeyBindings;

    fn state_with_bindings(bindings: &[(KeyEvent, Action)]) -> AppState {
        let mut config = Config::default();
        config.keybindings = KeyBindings(
            bindings
                .iter()
                .map(|(key, action)| (vec![*key], *action))
                .collect(),
        );
        AppState::new_with_config(config)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_run_binding_snapshots_editor() {
        let state = state_with_bindings(&[(ctrl('r'), Action::Run)])
            .with_editor(EditorState::new("puts 42", 9, 0));

        let msgs = translate_raw_to_domain(RawMsg::Key(ctrl('r')), &state);

        assert_eq!(
            msgs,
            vec![Msg::Execution(ExecutionMsg::RunRequested {
                source: "puts 42".into(),
                language_id: 72,
            })]
        );
    }

    #[rstest]
    #[case(Action::CancelRun, Msg::Execution(ExecutionMsg::Cancel))]
    #[case(Action::ClearOutput, Msg::Execution(ExecutionMsg::ClearOutput))]
    #[case(Action::Quit, Msg::System(SystemMsg::Quit))]
    #[case(Action::Suspend, Msg::System(SystemMsg::Suspend))]
    #[case(
        Action::OpenLanguagePicker,
        Msg::Editor(EditorMsg::OpenPicker(PickerKind::Language))
    )]
    #[case(
        Action::OpenThemePicker,
        Msg::Editor(EditorMsg::OpenPicker(PickerKind::Theme))
    )]
    fn test_bound_actions(#[case] action: Action, #[case] expected: Msg) {
        let state = state_with_bindings(&[(ctrl('x'), action)]);
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(ctrl('x')), &state),
            vec![expected]
        );
    }

    #[test]
    fn test_unbound_keys_go_to_editor() {
        let state = state_with_bindings(&[(ctrl('r'), Action::Run)]);
        let typed = key(KeyCode::Char('r'));

        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(typed), &state),
            vec![Msg::Editor(EditorMsg::Input(typed))]
        );
    }

    #[test]
    fn test_picker_keys_when_open() {
        let mut state = state_with_bindings(&[]);
        state.editor.picker = Some(PickerState {
            kind: PickerKind::Language,
            selected: 0,
        });

        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Down)), &state),
            vec![Msg::Editor(EditorMsg::PickerDown)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Enter)), &state),
            vec![Msg::Editor(EditorMsg::PickerConfirm)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Esc)), &state),
            vec![Msg::Editor(EditorMsg::PickerCancel)]
        );
        // typing does not leak into the buffer behind the popup
        assert!(translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('x'))), &state).is_empty());
    }

    #[test]
    fn test_picker_binding_toggles() {
        let mut state = state_with_bindings(&[(ctrl('l'), Action::OpenLanguagePicker)]);
        state.editor.picker = Some(PickerState {
            kind: PickerKind::Language,
            selected: 3,
        });

        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(ctrl('l')), &state),
            vec![Msg::Editor(EditorMsg::PickerCancel)]
        );
    }

    #[test]
    fn test_run_ignored_while_picking() {
        let mut state = state_with_bindings(&[(ctrl('r'), Action::Run)]);
        state.editor.picker = Some(PickerState {
            kind: PickerKind::Theme,
            selected: 0,
        });
        assert!(translate_raw_to_domain(RawMsg::Key(ctrl('r')), &state).is_empty());
    }

    #[test]
    fn test_judge_events_map_to_execution_msgs() {
        let state = AppState::default();
        let failure = ExecutionFailure::new(FailureKind::RateLimited, "429");

        assert_eq!(
            translate_raw_to_domain(
                RawMsg::Judge(JudgeEvent::Submitted {
                    epoch: 2,
                    token: SubmissionToken::new("t"),
                }),
                &state
            ),
            vec![Msg::Execution(ExecutionMsg::Submitted {
                epoch: 2,
                token: SubmissionToken::new("t"),
            })]
        );
        assert_eq!(
            translate_raw_to_domain(
                RawMsg::Judge(JudgeEvent::Failed {
                    epoch: 2,
                    failure: failure.clone(),
                }),
                &state
            ),
            vec![Msg::Execution(ExecutionMsg::Failed { epoch: 2, failure })]
        );
    }

    #[test]
    fn test_system_events() {
        let state = AppState::default();
        let now = Instant::now();

        assert_eq!(
            translate_raw_to_domain(RawMsg::Tick(now), &state),
            vec![Msg::System(SystemMsg::Tick(now))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(80, 24), &state),
            vec![Msg::System(SystemMsg::Resize(80, 24))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Error("boom".into()), &state),
            vec![Msg::System(SystemMsg::ShowError("boom".into()))]
        );
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }
}
