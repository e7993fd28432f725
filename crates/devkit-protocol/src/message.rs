use serde::{Deserialize, Serialize};

use devkit_diff::{DiffReport, DiffResult, DiffStats, LineSpan};

pub const PROTOCOL_VERSION: u32 = 1;
pub const MAX_MESSAGE_SIZE: usize = 64 * 1024 * 1024;

/// Compare two texts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDiffRequest {
    pub original: String,
    pub modified: String,
}

impl TextDiffRequest {
    pub fn new(original: impl Into<String>, modified: impl Into<String>) -> Self {
        Self { original: original.into(), modified: modified.into() }
    }
}

/// Outcome of a `TextDiff` request.
///
/// `error` is empty on success. On failure it holds a message meant to be
/// shown verbatim, `lines` is empty and every count in `stats` is zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDiffResponse {
    pub lines: Vec<LineSpan>,
    pub stats: DiffStats,
    #[serde(default)]
    pub error: String,
}

impl TextDiffResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self { error: message.into(), ..Default::default() }
    }

    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }
}

impl From<DiffReport> for TextDiffResponse {
    fn from(report: DiffReport) -> Self {
        let stats = report.stats();
        Self { lines: report.into_lines(), stats, error: String::new() }
    }
}

impl From<DiffResult<DiffReport>> for TextDiffResponse {
    fn from(result: DiffResult<DiffReport>) -> Self {
        match result {
            Ok(report) => report.into(),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devkit_diff::{compare, DiffEngine, EngineConfig};
    use serde_json::json;

    #[test]
    fn success_response_shape() {
        let response = TextDiffResponse::from(compare("a\nb", "a\nc"));
        assert!(!response.is_error());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "lines": [
                    { "type": "equal", "content": "a", "oldLine": 1, "newLine": 1 },
                    { "type": "delete", "content": "b", "oldLine": 2, "newLine": 0 },
                    { "type": "insert", "content": "c", "oldLine": 0, "newLine": 2 },
                ],
                "stats": { "additions": 1, "deletions": 1, "changes": 2 },
                "error": "",
            })
        );
    }

    #[test]
    fn failure_response_has_no_lines() {
        let engine = DiffEngine::new(EngineConfig { max_input_bytes: 1, ..EngineConfig::unbounded() });
        let response = TextDiffResponse::from(engine.compare("abc", ""));
        assert!(response.is_error());
        assert!(response.error.contains("original text is too large"));
        assert!(response.lines.is_empty());
        assert_eq!(response.stats, DiffStats::default());
    }

    #[test]
    fn request_field_names() {
        let request: TextDiffRequest =
            serde_json::from_value(json!({ "original": "x", "modified": "y" })).unwrap();
        assert_eq!(request, TextDiffRequest::new("x", "y"));
    }

    #[test]
    fn error_defaults_to_empty() {
        let response: TextDiffResponse = serde_json::from_value(json!({
            "lines": [],
            "stats": { "additions": 0, "deletions": 0, "changes": 0 },
        }))
        .unwrap();
        assert!(!response.is_error());
    }
}
