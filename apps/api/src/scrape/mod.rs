//! Job posting scraper: fetch a posting URL and suggest (company, job title) for the form.
//!
//! Nothing here persists data. Failures are user-facing and never retried.

pub mod extractor;
pub mod fetch;
pub mod handlers;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

use crate::scrape::extractor::extract_job_details;
use crate::scrape::fetch::PageFetcher;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Unreachable, blocked, or non-2xx source page.
    #[error("failed to fetch job posting: {0}")]
    Fetch(String),

    /// Page was parsed but company and/or job title could not be found.
    #[error("could not extract job details (company: {company:?}, job title: {job_title:?})")]
    ExtractionIncomplete { company: String, job_title: String },
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        match self {
            ScrapeError::Fetch(_) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "Failed to scrape job details. The site may be blocking requests or the URL may be invalid. Please enter the details manually."
                })),
            )
                .into_response(),
            ScrapeError::ExtractionIncomplete { company, job_title } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "Could not extract job details. Please try a different URL or enter them manually.",
                    "company": company,
                    "jobTitle": job_title
                })),
            )
                .into_response(),
        }
    }
}

/// Successful extraction, echoed back with the URL it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedJob {
    pub company: String,
    pub job_title: String,
    pub job_url: String,
}

/// Fetches `url` and extracts the posting's company and job title.
///
/// Both fields must be found; otherwise `ExtractionIncomplete` carries whatever was.
pub async fn scrape_job(fetcher: &dyn PageFetcher, url: &str) -> Result<ScrapedJob, ScrapeError> {
    let html = fetcher.fetch(url).await.map_err(|e| {
        warn!("Scrape fetch failed for {url}: {e}");
        e
    })?;

    let details = extract_job_details(&html);

    if details.company.is_empty() || details.job_title.is_empty() {
        warn!(
            "Incomplete extraction for {url}: company={:?} job_title={:?}",
            details.company, details.job_title
        );
        return Err(ScrapeError::ExtractionIncomplete {
            company: details.company,
            job_title: details.job_title,
        });
    }

    info!(
        "Extracted job posting from {url}: {} at {}",
        details.job_title, details.company
    );

    Ok(ScrapedJob {
        company: details.company,
        job_title: details.job_title,
        job_url: url.to_string(),
    })
}
