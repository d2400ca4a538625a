use crate::core::{cmd::Cmd, msg::editor::EditorMsg, textarea_engine::TextAreaEngine};
use crate::domain::{
    language::{self, LanguageOption, LANGUAGES},
    theme::{self, ThemeOption, THEMES},
    ui::{CursorPosition, PickerKind, TextSelection},
};

/// Complete state representation of a TextArea component
/// This struct encapsulates all mutable state that needs to be
/// preserved across TextArea recreation in the stateless approach
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAreaState {
    /// The complete text content
    pub content: String,
    /// Current cursor position within the text
    pub cursor_position: CursorPosition,
    /// Active text selection range, if any
    pub selection: Option<TextSelection>,
}

impl TextAreaState {
    pub fn new(
        content: String,
        cursor_position: CursorPosition,
        selection: Option<TextSelection>,
    ) -> Self {
        Self {
            content,
            cursor_position,
            selection,
        }
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self::new(content.into(), CursorPosition::default(), None)
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Dropdown over the editor, `selected` is the highlighted row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerState {
    pub kind: PickerKind,
    pub selected: usize,
}

impl PickerState {
    pub fn len(&self) -> usize {
        match self.kind {
            PickerKind::Language => LANGUAGES.len(),
            PickerKind::Theme => THEMES.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row labels in registry order
    pub fn labels(&self) -> Vec<&'static str> {
        match self.kind {
            PickerKind::Language => LANGUAGES.iter().map(|l| l.display_name).collect(),
            PickerKind::Theme => THEMES.iter().map(|t| t.label).collect(),
        }
    }
}

/// Source buffer plus the language and theme it is shown with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub textarea: TextAreaState,
    /// Index into [`LANGUAGES`]; duplicate value keys make the index the identity
    pub language_index: usize,
    /// Index into [`THEMES`]
    pub theme_index: usize,
    pub picker: Option<PickerState>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(
            language::DEFAULT_SOURCE,
            language::DEFAULT_LANGUAGE_INDEX,
            theme::DEFAULT_THEME_INDEX,
        )
    }
}

impl EditorState {
    pub fn new(source: impl Into<String>, language_index: usize, theme_index: usize) -> Self {
        Self {
            textarea: TextAreaState::with_content(source),
            language_index: clamp_index(language_index, LANGUAGES.len()),
            theme_index: clamp_index(theme_index, THEMES.len()),
            picker: None,
        }
    }

    pub fn code(&self) -> &str {
        &self.textarea.content
    }

    pub fn language(&self) -> &'static LanguageOption {
        language::language_at(self.language_index)
    }

    pub fn theme(&self) -> &'static ThemeOption {
        theme::theme_at(self.theme_index)
    }

    pub fn is_picking(&self) -> bool {
        self.picker.is_some()
    }

    /// Editor-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: EditorMsg, engine: &dyn TextAreaEngine) -> Vec<Cmd> {
        match msg {
            EditorMsg::Input(key) => {
                self.textarea = engine.apply_keys(&self.textarea, &[key]);
                vec![]
            }

            EditorMsg::SetCode(code) => {
                self.textarea = TextAreaState::with_content(code);
                vec![]
            }

            EditorMsg::SelectLanguage(index) => {
                if index < LANGUAGES.len() {
                    self.language_index = index;
                    vec![Cmd::LogInfo {
                        message: format!("Language set to {}", self.language().display_name),
                    }]
                } else {
                    vec![Cmd::LogError {
                        message: format!("Unknown language index {index}"),
                    }]
                }
            }

            EditorMsg::SelectTheme(index) => {
                if index < THEMES.len() {
                    self.theme_index = index;
                    vec![]
                } else {
                    vec![Cmd::LogError {
                        message: format!("Unknown theme index {index}"),
                    }]
                }
            }

            EditorMsg::OpenPicker(kind) => {
                let selected = match kind {
                    PickerKind::Language => self.language_index,
                    PickerKind::Theme => self.theme_index,
                };
                self.picker = Some(PickerState { kind, selected });
                vec![]
            }

            EditorMsg::PickerUp => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.selected = picker.selected.saturating_sub(1);
                }
                vec![]
            }

            EditorMsg::PickerDown => {
                if let Some(picker) = self.picker.as_mut() {
                    if picker.selected + 1 < picker.len() {
                        picker.selected += 1;
                    }
                }
                vec![]
            }

            EditorMsg::PickerConfirm => match self.picker.take() {
                Some(PickerState {
                    kind: PickerKind::Language,
                    selected,
                }) => self.update(EditorMsg::SelectLanguage(selected), engine),
                Some(PickerState {
                    kind: PickerKind::Theme,
                    selected,
                }) => self.update(EditorMsg::SelectTheme(selected), engine),
                None => vec![],
            },

            EditorMsg::PickerCancel => {
                self.picker = None;
                vec![]
            }
        }
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if index < len {
        index
    } else {
        0
    }
}
