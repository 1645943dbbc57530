//! # SOXFlow
//!
//! Generates a control narrative and an audit test script for a SOX/IT-audit control by
//! delegating the writing to an OpenAI-compatible chat-completion backend.
//!
//! The pipeline is linear and stateless per request:
//!
//! 1. [`build_prompt`] renders the fixed instruction template with the seven
//!    [`ControlRecord`] fields.
//! 2. A [`CompletionClient`] sends the audit persona and the prompt in one call.
//! 3. [`split_sections`] extracts the `Narrative:` and `Test Script:` sections into
//!    [`GeneratedDocs`].
//!
//! [`DocGenerator`] ties the three together. Backend failure is a [`GenerationError`];
//! a reply without both section labels is an empty [`GeneratedDocs`], not an error.
//!
//! ## Main modules
//!
//! - [`control`]: [`ControlRecord`], [`GeneratedDocs`], [`ValidationError`].
//! - [`prompt`]: [`build_prompt`], [`SYSTEM_PERSONA`].
//! - [`parse`]: [`split_sections`].
//! - [`llm`]: [`CompletionClient`] trait, [`ChatOpenAI`], [`MockCompletion`].
//! - [`pipeline`]: [`DocGenerator`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use soxflow::{ControlRecord, DocGenerator, MockCompletion};
//!
//! # async fn demo() -> Result<(), soxflow::GenerationError> {
//! let backend = MockCompletion::with_reply("Narrative:\nN\nTest Script:\n1. T");
//! let generator = DocGenerator::new(Arc::new(backend));
//! let record = ControlRecord {
//!     control_id: "C-101".into(),
//!     process_name: "Revenue Recognition".into(),
//!     control_objective: "Ensure revenue recorded in correct period".into(),
//!     risk_category: "Financial Reporting".into(),
//!     frequency: "Monthly".into(),
//!     control_steps: "Controller reviews cutoff schedule".into(),
//!     system_used: "SAP".into(),
//! };
//! let docs = generator.generate(&record).await?;
//! assert_eq!(docs.narrative, "N");
//! # Ok(())
//! # }
//! ```

pub mod control;
pub mod error;
pub mod llm;
pub mod message;
pub mod parse;
pub mod pipeline;
pub mod prompt;

pub use control::{ControlRecord, GeneratedDocs, ValidationError};
pub use error::GenerationError;
pub use llm::{ChatOpenAI, CompletionClient, CompletionReply, CompletionUsage, MockCompletion};
pub use message::Message;
pub use parse::split_sections;
pub use pipeline::{DocGenerator, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use prompt::{build_prompt, NARRATIVE_LABEL, SYSTEM_PERSONA, TEST_SCRIPT_LABEL};
