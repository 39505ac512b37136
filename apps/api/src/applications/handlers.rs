use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::applications::export::{applications_to_csv, EXPORT_FILENAME};
use crate::applications::listing::{filter_and_sort, ListQuery};
use crate::applications::models::{ApplicationInput, NewApplication, StatusStats};
use crate::applications::store;
use crate::applications::validation::validate_application;
use crate::errors::AppError;
use crate::models::application::ApplicationRow;
use crate::state::AppState;

fn validated(input: ApplicationInput) -> Result<NewApplication, AppError> {
    validate_application(input).map_err(|problems| AppError::Validation(problems.join("; ")))
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Application {id} not found"))
}

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    let status = query.status_filter().map_err(AppError::Validation)?;
    let rows = store::list_applications(&state.db).await?;
    Ok(Json(filter_and_sort(
        rows,
        query.search.as_deref(),
        status,
        query.sort,
    )))
}

/// POST /api/v1/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    Json(input): Json<ApplicationInput>,
) -> Result<(StatusCode, Json<ApplicationRow>), AppError> {
    let app = validated(input)?;
    let row = store::insert_application(&state.db, &app).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicationRow>, AppError> {
    let row = store::get_application(&state.db, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// PUT /api/v1/applications/:id
pub async fn handle_update_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ApplicationInput>,
) -> Result<Json<ApplicationRow>, AppError> {
    let app = validated(input)?;
    let row = store::update_application(&state.db, id, &app)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// DELETE /api/v1/applications/:id
pub async fn handle_delete_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if store::delete_application(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// GET /api/v1/applications/stats
pub async fn handle_application_stats(
    State(state): State<AppState>,
) -> Result<Json<StatusStats>, AppError> {
    let counts = store::count_by_status(&state.db).await?;
    Ok(Json(StatusStats::from_counts(&counts)))
}

/// GET /api/v1/applications/export
///
/// Downloads every application as CSV.
pub async fn handle_export_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = store::list_applications(&state.db).await?;
    let csv = applications_to_csv(&rows)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        csv,
    ))
}
