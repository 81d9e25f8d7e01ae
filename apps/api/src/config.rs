use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_LLM_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const DEFAULT_LLM_MODEL: &str = "google/gemini-2.0-flash-exp:free";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub llm: LlmSettings,
    pub port: u16,
    pub rust_log: String,
}

/// Connection settings for the chat-completion API.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let timeout_secs = optional_env("LLM_TIMEOUT_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?
            .unwrap_or(5);

        Ok(Config {
            database_url: optional_env("DATABASE_URL").unwrap_or_else(database_url_from_parts),
            llm: LlmSettings {
                api_url: optional_env("LLM_API_URL")
                    .unwrap_or_else(|| DEFAULT_LLM_API_URL.to_string()),
                api_key: require_env("API_KEY")?,
                model: optional_env("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Builds a Postgres URL from the individual `DB_*` variables.
fn database_url_from_parts() -> String {
    let user = optional_env("DB_USER").unwrap_or_else(|| "features_user".to_string());
    let password = optional_env("DB_PASSWORD").unwrap_or_else(|| "features_password".to_string());
    let host = optional_env("DB_HOST").unwrap_or_else(|| "localhost".to_string());
    let port = optional_env("DB_PORT").unwrap_or_else(|| "5432".to_string());
    let name = optional_env("DB_NAME").unwrap_or_else(|| "features_db".to_string());
    format!("postgresql://{user}:{password}@{host}:{port}/{name}")
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
