use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Nothing here is required: the service must come up with no environment
/// at all, running the heuristic engine on a default port.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Which AI provider to run: "auto", "anthropic", or "heuristic".
    pub ai_provider: String,
    pub anthropic_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ai_provider: std::env::var("AI_PROVIDER").unwrap_or_else(|_| "auto".to_string()),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
        })
    }
}
