//! Control metadata in, generated documents out.
//!
//! [`ControlRecord`] is the seven-field description of one SOX/IT control as supplied by
//! the caller; [`GeneratedDocs`] is the pair of free-text artifacts extracted from the
//! model reply.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One SOX/IT-audit control description. All fields are opaque business text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRecord {
    pub control_id: String,
    pub process_name: String,
    pub control_objective: String,
    pub risk_category: String,
    pub frequency: String,
    pub control_steps: String,
    pub system_used: String,
}

/// A control field was present but blank.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{field} must not be empty")]
pub struct ValidationError {
    /// Name of the offending field, as it appears on the wire.
    pub field: &'static str,
}

impl ControlRecord {
    /// Field names paired with their values, in prompt order.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("control_id", self.control_id.as_str()),
            ("process_name", self.process_name.as_str()),
            ("control_objective", self.control_objective.as_str()),
            ("risk_category", self.risk_category.as_str()),
            ("frequency", self.frequency.as_str()),
            ("control_steps", self.control_steps.as_str()),
            ("system_used", self.system_used.as_str()),
        ]
    }

    /// Checks that every field has non-whitespace content. Reports the first blank field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.fields().into_iter().find(|(_, v)| v.trim().is_empty()) {
            Some((field, _)) => Err(ValidationError { field }),
            None => Ok(()),
        }
    }
}

/// Narrative and test script extracted from one completion reply.
///
/// Both strings are empty when the reply did not contain the two section labels in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocs {
    pub narrative: String,
    pub test_script: String,
}

impl GeneratedDocs {
    pub fn new(narrative: impl Into<String>, test_script: impl Into<String>) -> Self {
        Self {
            narrative: narrative.into(),
            test_script: test_script.into(),
        }
    }

    /// True when nothing could be extracted from the reply.
    pub fn is_empty(&self) -> bool {
        self.narrative.is_empty() && self.test_script.is_empty()
    }
}
