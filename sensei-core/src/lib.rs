// Persona table and wire models are always available
pub mod models;
pub mod persona;

// Server-only modules
#[cfg(feature = "server")]
pub mod ask;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod http;
#[cfg(feature = "server")]
pub mod openai;

// Re-export commonly used types
pub use models::Answer;
pub use persona::{FALLBACK_INSTRUCTION, Persona, PersonaTable};

#[cfg(feature = "server")]
pub use ask::{AskError, AskService, ChatBackend, OpenAiChat};
#[cfg(feature = "server")]
pub use config::Config;
