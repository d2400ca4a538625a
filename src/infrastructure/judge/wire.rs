//! JSON bodies exchanged with the judge

use base64::{engine::general_purpose::STANDARD as BASE64_ENGINE, Engine as _};
use serde::{Deserialize, Serialize};

use crate::domain::execution::{ExecutionResult, ExecutionStatus};

/// Query parameters sent with every request.
pub const QUERY: [(&str, &str); 2] = [("base64_encoded", "true"), ("fields", "*")];

#[derive(Debug, Serialize)]
pub struct SubmissionBody<'a> {
    pub language_id: u32,
    pub source_code: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusDto {
    pub id: u32,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<StatusDto>,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub compile_output: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub memory: Option<u64>,
}

impl StatusResponse {
    /// Decode the base64 text fields into an [`ExecutionResult`].
    pub fn into_result(self) -> Result<ExecutionResult, base64::DecodeError> {
        let status = self
            .status
            .map(|s| ExecutionStatus::new(s.id, s.description))
            .unwrap_or_else(ExecutionStatus::unknown);

        Ok(ExecutionResult {
            status,
            stdout: decode_field(self.stdout)?,
            stderr: decode_field(self.stderr)?,
            compile_output: decode_field(self.compile_output)?,
            message: decode_field(self.message)?,
            time: self.time,
            memory: self.memory,
        })
    }
}

/// The judge wraps long base64 output across lines, so whitespace is dropped
/// before decoding.
pub fn decode_field(field: Option<String>) -> Result<Option<String>, base64::DecodeError> {
    let Some(encoded) = field else {
        return Ok(None);
    };
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64_ENGINE.decode(compact)?;
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::language::LANGUAGES;

    #[test]
    fn test_submission_body_shape() -> serde_json::Result<()> {
        let body = SubmissionBody {
            language_id: 71,
            source_code: "cHJpbnQoMSk=",
        };
        assert_eq!(
            serde_json::to_value(&body)?,
            serde_json::json!({"language_id": 71, "source_code": "cHJpbnQoMSk="})
        );
        Ok(())
    }

    #[test]
    fn test_every_registry_language_id_is_sent_unmodified() -> serde_json::Result<()> {
        for option in LANGUAGES {
            let body = SubmissionBody {
                language_id: option.execution_id,
                source_code: "",
            };
            assert_eq!(
                serde_json::to_value(&body)?["language_id"],
                serde_json::json!(option.execution_id),
                "{}",
                option.display_name
            );
        }
        Ok(())
    }

    #[test]
    fn test_status_response_decodes_fields() -> color_eyre::Result<()> {
        let raw = r#"{
            "status": {"id": 3, "description": "Accepted"},
            "stdout": "MQo=",
            "stderr": null,
            "compile_output": null,
            "time": "0.05",
            "memory": 3208,
            "token": "abc"
        }"#;
        let response: StatusResponse = serde_json::from_str(raw)?;
        let result = response.into_result()?;

        assert_eq!(result.status, ExecutionStatus::new(3, "Accepted"));
        assert_eq!(result.stdout.as_deref(), Some("1\n"));
        assert_eq!(result.stderr, None);
        assert_eq!(result.time.as_deref(), Some("0.05"));
        assert_eq!(result.memory, Some(3208));
        Ok(())
    }

    #[test]
    fn test_missing_status_is_unknown_and_terminal() -> color_eyre::Result<()> {
        let response: StatusResponse = serde_json::from_str("{}")?;
        let result = response.into_result()?;
        assert_eq!(result.status, ExecutionStatus::unknown());
        assert!(result.is_terminal());
        Ok(())
    }

    #[test]
    fn test_decode_field_ignores_line_wrapping() -> color_eyre::Result<()> {
        // "hello world, hello world" wrapped mid-way
        let wrapped = "aGVsbG8gd29ybGQsIGhl\nbGxvIHdvcmxk\n".to_string();
        assert_eq!(
            decode_field(Some(wrapped))?.as_deref(),
            Some("hello world, hello world")
        );
        Ok(())
    }

    #[test]
    fn test_decode_field_rejects_garbage() {
        assert!(decode_field(Some("%%%".to_string())).is_err());
    }
}
