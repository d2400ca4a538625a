//! Display model for execution results
//!
//! Field selection and formatting only. Failures are classified before a
//! result ever reaches this point.

use unicode_width::UnicodeWidthChar;

use crate::domain::execution::{status_id, ExecutionResult};

/// Column stops used when expanding tabs in program output
const TAB_STOP: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPane {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDetails {
    pub status: String,
    pub time: Option<String>,
    pub memory: Option<String>,
}

/// Three logical panes: program output, compile diagnostics, metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputView {
    pub program_output: Option<OutputPane>,
    pub compile_output: Option<String>,
    pub details: Option<OutputDetails>,
}

impl OutputView {
    pub fn from_result(result: Option<&ExecutionResult>) -> Self {
        let Some(result) = result else {
            return Self::default();
        };

        let compile_output = match result.status.id {
            status_id::COMPILATION_ERROR => non_empty(result.compile_output.as_deref()),
            _ => None,
        };

        let program_output = match result.status.id {
            status_id::COMPILATION_ERROR => None,
            status_id::ACCEPTED => non_empty(result.stdout.as_deref()).map(|text| OutputPane {
                text,
                tone: Tone::Success,
            }),
            status_id::TIME_LIMIT_EXCEEDED => Some(OutputPane {
                text: "Time Limit Exceeded".to_string(),
                tone: Tone::Error,
            }),
            _ => non_empty(result.stderr.as_deref())
                .or_else(|| non_empty(result.stdout.as_deref()))
                .map(|text| OutputPane {
                    text,
                    tone: Tone::Error,
                }),
        };

        let details = Some(OutputDetails {
            status: terminal_safe(&result.status.description),
            time: result.time.as_ref().map(|t| format!("{t} s")),
            memory: result.memory.map(|m| format!("{m} KB")),
        });

        Self {
            program_output,
            compile_output,
            details,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.program_output.is_none() && self.compile_output.is_none()
    }
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(terminal_safe).filter(|t| !t.is_empty())
}

/// Program output as plain cells: escape sequences stripped, tabs expanded
/// to the next stop and other control characters dropped.
pub fn terminal_safe(text: &str) -> String {
    let stripped = strip_ansi_escapes::strip_str(text);
    let mut out = String::with_capacity(stripped.len());
    let mut column = 0;

    for c in stripped.chars() {
        match c {
            '\n' => {
                out.push('\n');
                column = 0;
            }
            '\t' => {
                let pad = TAB_STOP - column % TAB_STOP;
                out.push_str(&" ".repeat(pad));
                column += pad;
            }
            c if c.is_control() => {}
            c => {
                out.push(c);
                column += c.width().unwrap_or(0);
            }
        }
    }
    out
}
