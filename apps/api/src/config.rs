use anyhow::{Context, Result};

/// Desktop browser UA. Several job boards answer the default reqwest agent with 403/999.
pub const DEFAULT_SCRAPER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Application configuration loaded from environment variables.
/// Fails at startup if `DATABASE_URL` is missing or `PORT` is malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Follow-up email drafting is disabled when unset.
    pub anthropic_api_key: Option<String>,
    pub scraper_user_agent: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            scraper_user_agent: optional_env("SCRAPER_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_SCRAPER_USER_AGENT.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Treats an empty or whitespace-only value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
