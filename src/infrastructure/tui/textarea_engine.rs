use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::state::editor::TextAreaState;
use crate::core::textarea_engine::TextAreaEngine;
use crate::domain::ui::{CursorPosition, TextSelection};

/// Spaces inserted for a Tab key press in the code buffer
const TAB_WIDTH: u8 = 4;

/// Production engine based on tui-textarea. Each call rebuilds a TextArea from
/// the snapshot, feeds it the keys and reads the new snapshot back out.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    /// Build a TextArea holding `snapshot`; also used by the editor view.
    pub fn hydrate(snapshot: &TextAreaState) -> TextArea<'static> {
        // split keeps a trailing empty line, which `lines()` would drop
        let lines: Vec<String> = snapshot.content.split('\n').map(str::to_string).collect();
        let mut textarea = TextArea::new(lines);
        textarea.set_tab_length(TAB_WIDTH);
        textarea.set_hard_tab_indent(false);

        if let Some(selection) = &snapshot.selection {
            // The anchor is whichever end the cursor is not on
            let anchor = if selection.start == snapshot.cursor_position {
                selection.end
            } else {
                selection.start
            };
            jump(&mut textarea, anchor);
            textarea.start_selection();
            jump(&mut textarea, snapshot.cursor_position);
        } else {
            jump(&mut textarea, snapshot.cursor_position);
        }
        textarea
    }

    fn snapshot(textarea: &TextArea<'_>) -> TextAreaState {
        let (line, column) = textarea.cursor();
        let selection = textarea
            .selection_range()
            .map(|((sl, sc), (el, ec))| TextSelection {
                start: CursorPosition {
                    line: sl,
                    column: sc,
                },
                end: CursorPosition {
                    line: el,
                    column: ec,
                },
            });
        TextAreaState::new(
            textarea.lines().join("\n"),
            CursorPosition { line, column },
            selection,
        )
    }
}

fn jump(textarea: &mut TextArea<'_>, position: CursorPosition) {
    let line = u16::try_from(position.line).unwrap_or(u16::MAX);
    let column = u16::try_from(position.column).unwrap_or(u16::MAX);
    textarea.move_cursor(CursorMove::Jump(line, column));
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = Self::hydrate(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        Self::snapshot(&textarea)
    }
}
