//! Server-side bridge between the form and the ask service

use sensei_core::{Answer, AskService, OpenAiChat, PersonaTable};
use std::time::Instant;

/// Submit one question as the given persona.
///
/// Validation failures and remote failures are both rendered to the display
/// string the UI shows in place of an answer.
pub async fn submit(persona_id: String, question: String) -> Result<Answer, String> {
    let config = super::config::get().map_err(|e| e.to_string())?;

    let service = AskService::new(
        OpenAiChat,
        config.openai_api_key.clone(),
        PersonaTable::builtin(),
    )
    .with_model(config.model.clone())
    .with_temperature(config.temperature);

    let start = Instant::now();
    let result = service.submit(&persona_id, &question).await;
    let duration_ms = start.elapsed().as_millis();

    match result {
        Ok(answer) => {
            tracing::info!(
                persona = %persona_id,
                duration_ms = %duration_ms,
                "Question answered"
            );
            Ok(answer)
        }
        Err(e) => {
            tracing::error!(
                persona = %persona_id,
                error = %e,
                duration_ms = %duration_ms,
                "Question failed"
            );
            Err(e.display_text())
        }
    }
}
