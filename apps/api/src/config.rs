use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The completion-API token is deliberately not validated at startup: a
/// missing token surfaces as the generic support fallback on the first chat
/// request rather than preventing the rest of the site from serving.
#[derive(Debug, Clone)]
pub struct Config {
    pub completion_api_token: String,
    pub completion_api_url: String,
    pub completion_model: String,
    pub google_client_id: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            completion_api_token: env_or("GITHUB_TOKEN", ""),
            completion_api_url: env_or("COMPLETION_API_URL", "https://models.github.ai/inference"),
            completion_model: env_or("COMPLETION_MODEL", "openai/gpt-4.1"),
            google_client_id: env_or("GOOGLE_CLIENT_ID", ""),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
