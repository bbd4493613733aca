use crate::openai::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use anyhow::{Context, Result};

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Missing key is a per-submission validation error, not a startup
    /// failure: the interactive process keeps running without it.
    pub openai_api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
}

impl Config {
    /// Load configuration from a .env file and the environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is missing

        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let temperature = std::env::var("OPENAI_TEMPERATURE")
            .unwrap_or_else(|_| DEFAULT_TEMPERATURE.to_string())
            .parse()
            .context("Invalid OPENAI_TEMPERATURE")?;

        Ok(Self {
            openai_api_key,
            model,
            temperature,
        })
    }
}
