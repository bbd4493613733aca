//! Builtin expert personas and selector resolution
//!
//! A persona is a named behavioral profile: the system instruction the model
//! is asked to adopt before it sees the user's question. The table is a small
//! closed set defined at startup; adding a persona is a data change, not a
//! logic change.

use serde::{Deserialize, Serialize};

/// Instruction used when a selector value matches no configured persona.
///
/// The UI constrains input to the configured set, so this path is defensive
/// rather than reachable in normal operation.
pub const FALLBACK_INSTRUCTION: &str = "You are a general-purpose assistant. Answer politely.";

/// Selector value of the IT consultant persona (the UI default)
pub const IT_CONSULTANT_ID: &str = "it-consultant";

/// Selector value of the historian persona
pub const HISTORIAN_ID: &str = "historian";

const IT_CONSULTANT_INSTRUCTION: &str = "You are the world's finest IT technology consultant. \
    Explain the latest technology trends, programming, and system design accurately and clearly. \
    Your answers are expert-level, but keep the wording friendly enough for anyone to follow.";

const HISTORIAN_INSTRUCTION: &str = "You are a veteran historian with deep knowledge of world \
    history, national histories, and cultural history. Answer questions with detailed, insightful \
    responses from multiple perspectives. Ground your answers in sources and stay strictly \
    objective.";

/// A named behavioral profile for the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub id: String,
    pub label: String,
    /// System instruction sent before the user's question
    pub instruction: String,
    /// Example question shown in the empty input field
    pub placeholder: String,
}

/// Closed mapping from selector value to persona
#[derive(Debug, Clone)]
pub struct PersonaTable {
    personas: Vec<Persona>,
}

#[derive(Debug, thiserror::Error)]
pub enum PersonaTableError {
    #[error("persona table is empty")]
    Empty,
    #[error("persona '{0}' has an empty instruction")]
    EmptyInstruction(String),
}

impl PersonaTable {
    /// Build a table, validating that it is non-empty and that every persona
    /// carries a non-empty instruction.
    pub fn new(personas: Vec<Persona>) -> Result<Self, PersonaTableError> {
        if personas.is_empty() {
            return Err(PersonaTableError::Empty);
        }
        for persona in &personas {
            if persona.instruction.trim().is_empty() {
                return Err(PersonaTableError::EmptyInstruction(persona.id.clone()));
            }
        }
        Ok(Self { personas })
    }

    /// The fixed builtin set: IT consultant first (UI default), then historian.
    pub fn builtin() -> Self {
        Self::new(vec![
            Persona {
                id: IT_CONSULTANT_ID.to_string(),
                label: "IT Consultant".to_string(),
                instruction: IT_CONSULTANT_INSTRUCTION.to_string(),
                placeholder: "e.g. Tell me about the latest trends in quantum computing."
                    .to_string(),
            },
            Persona {
                id: HISTORIAN_ID.to_string(),
                label: "Historian".to_string(),
                instruction: HISTORIAN_INSTRUCTION.to_string(),
                placeholder: "e.g. Explain how the Industrial Revolution changed society."
                    .to_string(),
            },
        ])
        .expect("builtin persona table is valid")
    }

    /// Resolve a selector value to its instruction text.
    ///
    /// Exact lookup; an unrecognized value resolves to
    /// [`FALLBACK_INSTRUCTION`] instead of failing.
    pub fn resolve(&self, id: &str) -> &str {
        self.get(id)
            .map(|p| p.instruction.as_str())
            .unwrap_or(FALLBACK_INSTRUCTION)
    }

    /// Look up a persona by selector value
    pub fn get(&self, id: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == id)
    }

    /// All personas, in display order
    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    /// The persona selected by default (first in display order)
    pub fn default_persona(&self) -> &Persona {
        &self.personas[0]
    }
}

impl Default for PersonaTable {
    fn default() -> Self {
        Self::builtin()
    }
}
