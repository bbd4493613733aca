//! Ask service: validation plus one completion call per submission
//!
//! Every submission pairs exactly one persona instruction with exactly one
//! question. The service holds no state across submissions; two calls with
//! identical inputs are independent.

use crate::models::Answer;
use crate::openai::{self, ChatRequest, DEFAULT_MODEL, DEFAULT_TEMPERATURE, Message};
use crate::persona::PersonaTable;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Instant;
use tracing::{info, warn};

/// Remediation hint appended to remote-failure messages
const CREDENTIAL_HINT: &str = "verify the OPENAI_API_KEY environment variable is set correctly";

/// Boundary to the hosted chat-completion provider.
///
/// Implementors encapsulate transport and vendor details; the service stays
/// decoupled from any particular provider or HTTP client.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Issue one completion call and return the response text
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String>;
}

/// Production backend calling the OpenAI chat completions API
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiChat;

#[async_trait]
impl ChatBackend for OpenAiChat {
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String> {
        let response = openai::chat_completion(request, api_key).await?;
        Ok(response.content_or_err()?.to_string())
    }
}

/// Why a submission produced no answer.
///
/// `MissingCredential` and `EmptyQuestion` are pre-call validation failures:
/// the backend is never invoked for them. `Upstream` wraps any failure of the
/// call itself (network, auth rejection, provider error, malformed response).
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    #[error("API credential is not configured")]
    MissingCredential,
    #[error("question text is empty")]
    EmptyQuestion,
    #[error("model call failed: {detail}")]
    Upstream { detail: String },
}

impl AskError {
    /// Human-readable rendering for the display area
    pub fn display_text(&self) -> String {
        match self {
            AskError::MissingCredential => {
                "The OPENAI_API_KEY environment variable is not set. \
                 Set it before asking a question."
                    .to_string()
            }
            AskError::EmptyQuestion => "Please enter a question before submitting.".to_string(),
            AskError::Upstream { detail } => {
                format!("An error occurred while calling the model: {detail} (hint: {CREDENTIAL_HINT})")
            }
        }
    }
}

/// Forwards one validated question at a time to a chat backend.
///
/// The API credential is injected at construction rather than read from the
/// environment inside the call path.
pub struct AskService<B: ChatBackend> {
    backend: B,
    credential: Option<String>,
    personas: PersonaTable,
    model: String,
    temperature: f32,
}

impl<B: ChatBackend> AskService<B> {
    pub fn new(backend: B, credential: Option<String>, personas: PersonaTable) -> Self {
        Self {
            backend,
            credential,
            personas,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn personas(&self) -> &PersonaTable {
        &self.personas
    }

    /// Validate and submit one question as the given persona.
    ///
    /// Builds the ordered two-message exchange (persona instruction, then the
    /// user's question) and issues exactly one completion call. Unrecognized
    /// persona ids silently resolve to the fallback instruction.
    pub async fn submit(&self, persona_id: &str, question: &str) -> Result<Answer, AskError> {
        let api_key = self.credential.as_deref().ok_or(AskError::MissingCredential)?;

        let question = question.trim();
        if question.is_empty() {
            return Err(AskError::EmptyQuestion);
        }

        let instruction = self.personas.resolve(persona_id);
        let request = ChatRequest::new(
            &self.model,
            vec![Message::system(instruction), Message::user(question)],
        )
        .temperature(self.temperature);

        let start = Instant::now();
        match self.backend.complete(api_key, &request).await {
            Ok(text) => {
                info!(
                    persona = %persona_id,
                    model = %self.model,
                    duration_ms = %start.elapsed().as_millis(),
                    "Completion call succeeded"
                );
                Ok(Answer {
                    persona_id: persona_id.to_string(),
                    persona_label: self
                        .personas
                        .get(persona_id)
                        .map(|p| p.label.clone())
                        .unwrap_or_else(|| persona_id.to_string()),
                    text,
                })
            }
            Err(e) => {
                warn!(
                    persona = %persona_id,
                    model = %self.model,
                    duration_ms = %start.elapsed().as_millis(),
                    error = %e,
                    "Completion call failed"
                );
                Err(AskError::Upstream {
                    detail: format!("{e:#}"),
                })
            }
        }
    }
}
