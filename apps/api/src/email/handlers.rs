use axum::{extract::State, Json};

use crate::email::{draft_follow_up_email, FollowUpRequest, FollowUpResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/follow-up-email
///
/// Drafts a follow-up email for (company, jobTitle). 503 when no API key is configured.
pub async fn handle_follow_up_email(
    State(state): State<AppState>,
    Json(request): Json<FollowUpRequest>,
) -> Result<Json<FollowUpResponse>, AppError> {
    let llm = state.llm.as_ref().ok_or(AppError::LlmUnavailable)?;
    let email = draft_follow_up_email(llm, &request).await?;
    Ok(Json(FollowUpResponse { email }))
}
