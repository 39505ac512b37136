use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::LlmClient;
use crate::scrape::fetch::PageFetcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// `None` when `ANTHROPIC_API_KEY` is unset; email drafting then answers 503.
    pub llm: Option<LlmClient>,
    /// Pluggable page fetcher for the job scraper. Default: `HttpPageFetcher`.
    pub page_fetcher: Arc<dyn PageFetcher>,
}
