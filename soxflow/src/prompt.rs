//! Prompt rendering for narrative and test script generation.
//!
//! [`build_prompt`] is a pure function of the [`ControlRecord`]: same record, same bytes.
//! Field values are interpolated verbatim.

use crate::control::ControlRecord;

/// System persona sent ahead of every rendered prompt.
pub const SYSTEM_PERSONA: &str = "You are a SOX audit and compliance assistant.";

/// Label that opens the narrative section of the reply.
pub const NARRATIVE_LABEL: &str = "Narrative:";

/// Label that opens the test script section of the reply.
pub const TEST_SCRIPT_LABEL: &str = "Test Script:";

const INSTRUCTIONS: &str = "\
You are a SOX compliance and IT audit expert. Respond in exactly two clearly labeled sections:

Narrative:
Provide a detailed control narrative that explains the control objective, how often the control \
operates, its scope, and how it operates at a business level.

Test Script:
Write an audit-ready test script in PCAOB style. Describe the population, the sample selection \
approach, the evidence to obtain, and the expected outcome, followed by numbered test steps.
";

/// Human-readable labels for the control fields, in [`ControlRecord::fields`] order.
const FIELD_LABELS: [&str; 7] = [
    "Control ID",
    "Process Name",
    "Control Objective",
    "Risk Category",
    "Frequency",
    "Control Steps",
    "System Used",
];

/// Renders the fixed instruction template followed by the seven labeled control fields.
pub fn build_prompt(record: &ControlRecord) -> String {
    let mut prompt = String::with_capacity(INSTRUCTIONS.len() + 256);
    prompt.push_str(INSTRUCTIONS);
    prompt.push('\n');
    for (label, (_, value)) in FIELD_LABELS.iter().zip(record.fields()) {
        prompt.push_str(&format!("{}: {}\n", label, value));
    }
    prompt
}
