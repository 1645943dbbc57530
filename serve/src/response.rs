//! JSON bodies returned by the HTTP endpoints.

use serde::{Deserialize, Serialize};
use soxflow::{GeneratedDocs, GenerationError};

/// Prefix placed before the error detail in `test_script` when generation failed.
pub const ERROR_PREFIX: &str = "Error: ";

/// Body of `POST /generate-docs`.
///
/// Success: both sections, `error` absent. Backend failure: `narrative` empty,
/// `test_script` = `"Error: <detail>"`, and `error` = `<detail>` so clients can tell a
/// degraded payload from real content without string matching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateDocsResponse {
    pub narrative: String,
    pub test_script: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateDocsResponse {
    pub fn failed(err: &GenerationError) -> Self {
        let detail = err.to_string();
        Self {
            narrative: String::new(),
            test_script: format!("{}{}", ERROR_PREFIX, detail),
            error: Some(detail),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<GeneratedDocs> for GenerateDocsResponse {
    fn from(docs: GeneratedDocs) -> Self {
        Self {
            narrative: docs.narrative,
            test_script: docs.test_script,
            error: None,
        }
    }
}

/// Body for rejected requests (malformed JSON, missing or blank fields).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
