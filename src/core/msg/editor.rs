use crossterm::event::KeyEvent;

use crate::domain::ui::PickerKind;

/// Messages specific to EditorState
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Key forwarded to the text area
    Input(KeyEvent),
    /// Replace the whole buffer, cursor moves to the start
    SetCode(String),
    SelectLanguage(usize),
    SelectTheme(usize),

    // Picker popup
    OpenPicker(PickerKind),
    PickerUp,
    PickerDown,
    PickerConfirm,
    PickerCancel,
}
