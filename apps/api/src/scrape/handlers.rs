use axum::{extract::State, Json};
use serde::Deserialize;
use url::Url;

use crate::errors::AppError;
use crate::scrape::{scrape_job, ScrapedJob};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScrapeJobRequest {
    #[serde(default)]
    pub url: String,
}

/// POST /api/v1/scrape-job
///
/// Suggests company and job title for a posting URL. Called by the form on URL blur.
pub async fn handle_scrape_job(
    State(state): State<AppState>,
    Json(request): Json<ScrapeJobRequest>,
) -> Result<Json<ScrapedJob>, AppError> {
    let url = validate_job_url(&request.url)?;
    let job = scrape_job(state.page_fetcher.as_ref(), url).await?;
    Ok(Json(job))
}

/// Accepts only absolute http(s) URLs. Returns the trimmed input.
pub fn validate_job_url(raw: &str) -> Result<&str, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("URL is required".to_string()));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| AppError::Validation(format!("Invalid URL '{trimmed}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed),
        other => Err(AppError::Validation(format!(
            "Unsupported URL scheme '{other}': expected http or https"
        ))),
    }
}
