use serde::{Deserialize, Serialize};

/// One answer produced by a single completion call.
///
/// Transient by design: the UI renders it once and nothing retains it
/// afterwards (no conversation history).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Selector value the question was submitted with
    pub persona_id: String,
    /// Display label for the answering persona
    pub persona_label: String,
    /// Model output, verbatim
    pub text: String,
}
