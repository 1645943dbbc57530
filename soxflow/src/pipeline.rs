//! Generation pipeline: control record → prompt → one completion call → two sections.
//!
//! [`DocGenerator`] owns an injected [`CompletionClient`] and nothing else. Each
//! [`DocGenerator::generate`] call is independent: no shared mutable state, no cache,
//! no retry. The backend client lives for the process; build it once at startup.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::control::{ControlRecord, GeneratedDocs};
use crate::error::GenerationError;
use crate::llm::{ChatOpenAI, CompletionClient};
use crate::message::Message;
use crate::parse::split_sections;
use crate::prompt::{build_prompt, SYSTEM_PERSONA};

/// Model identifier used for every generation request.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Sampling temperature used for every generation request.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Turns control records into narrative + test script pairs.
#[derive(Clone)]
pub struct DocGenerator {
    client: Arc<dyn CompletionClient>,
}

impl DocGenerator {
    /// Wraps an already configured backend client.
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Builds a generator backed by [`ChatOpenAI`] configured from the environment, using
    /// [`DEFAULT_MODEL`] at [`DEFAULT_TEMPERATURE`].
    pub fn openai_from_env() -> Self {
        let client = ChatOpenAI::from_env(DEFAULT_MODEL).with_temperature(DEFAULT_TEMPERATURE);
        Self::new(Arc::new(client))
    }

    /// Messages for one request: the audit persona, then the rendered prompt.
    pub fn messages_for(record: &ControlRecord) -> [Message; 2] {
        [Message::system(SYSTEM_PERSONA), Message::user(build_prompt(record))]
    }

    /// Runs the pipeline once.
    ///
    /// Backend failure is `Err`. A reply without both section labels is `Ok` with an empty
    /// [`GeneratedDocs`].
    pub async fn generate(&self, record: &ControlRecord) -> Result<GeneratedDocs, GenerationError> {
        let messages = Self::messages_for(record);
        debug!(control_id = %record.control_id, "generating narrative and test script");

        let reply = self.client.invoke(&messages).await.map_err(|e| {
            warn!(control_id = %record.control_id, error = %e, "completion backend failed");
            e
        })?;

        let docs = split_sections(&reply.content);
        if docs.is_empty() {
            warn!(
                control_id = %record.control_id,
                reply_len = reply.content.len(),
                "reply had no Narrative/Test Script sections"
            );
        } else {
            debug!(
                control_id = %record.control_id,
                narrative_len = docs.narrative.len(),
                test_script_len = docs.test_script.len(),
                usage = ?reply.usage,
                "sections extracted"
            );
        }
        Ok(docs)
    }
}
