//! Section splitting of a completion reply into narrative and test script.
//!
//! One regex match over the whole reply: the narrative is the shortest span after the
//! first `Narrative:` label that is followed by a `Test Script:` label; the test script is
//! everything after that label. `.` matches newlines, so multi-line sections are captured
//! in full. A reply without both labels in that order yields an empty [`GeneratedDocs`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::control::GeneratedDocs;

static SECTIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)Narrative:\s*(.*?)\s*Test Script:\s*(.*)")
        .expect("section pattern is a valid regex")
});

/// Splits `reply` into its two sections, trimmed. Never fails.
pub fn split_sections(reply: &str) -> GeneratedDocs {
    match SECTIONS.captures(reply) {
        Some(caps) => GeneratedDocs::new(
            caps.get(1).map_or("", |m| m.as_str()).trim(),
            caps.get(2).map_or("", |m| m.as_str()).trim(),
        ),
        None => GeneratedDocs::default(),
    }
}
