//! Follow-up email drafting via the LLM client.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::email::prompts::{FOLLOW_UP_PROMPT_TEMPLATE, FOLLOW_UP_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::{NO_FABRICATION, PLAIN_TEXT_ONLY};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpRequest {
    pub company: String,
    pub job_title: String,
    #[serde(default)]
    pub contact_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FollowUpResponse {
    pub email: String,
}

/// Builds the user prompt. Company and job title must be non-blank.
pub fn build_follow_up_prompt(request: &FollowUpRequest) -> Result<String, AppError> {
    let company = request.company.trim();
    let job_title = request.job_title.trim();
    if company.is_empty() || job_title.is_empty() {
        return Err(AppError::Validation(
            "company and jobTitle are required to draft an email".to_string(),
        ));
    }

    let greeting = match request.contact_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => format!("\"Dear {name},\""),
        _ => "\"Dear Hiring Manager,\"".to_string(),
    };

    Ok(FOLLOW_UP_PROMPT_TEMPLATE
        .replace("{company}", company)
        .replace("{job_title}", job_title)
        .replace("{greeting}", &greeting))
}

fn follow_up_system() -> String {
    format!("{FOLLOW_UP_SYSTEM} {PLAIN_TEXT_ONLY} {NO_FABRICATION}")
}

/// Drafts a follow-up email for an application. One LLM call; no persistence.
pub async fn draft_follow_up_email(
    llm: &LlmClient,
    request: &FollowUpRequest,
) -> Result<String, AppError> {
    let prompt = build_follow_up_prompt(request)?;

    let email = llm
        .complete_text(&prompt, &follow_up_system())
        .await
        .map_err(|e| AppError::Llm(format!("Follow-up email drafting failed: {e}")))?;

    info!(
        "Drafted follow-up email for {} at {} ({} chars)",
        request.job_title.trim(),
        request.company.trim(),
        email.len()
    );
    Ok(email)
}
