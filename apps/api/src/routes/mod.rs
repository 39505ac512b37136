pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::email::handlers as email;
use crate::scrape::handlers as scrape;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Applications
        .route(
            "/api/v1/applications",
            get(applications::handle_list_applications)
                .post(applications::handle_create_application),
        )
        .route(
            "/api/v1/applications/stats",
            get(applications::handle_application_stats),
        )
        .route(
            "/api/v1/applications/export",
            get(applications::handle_export_csv),
        )
        .route(
            "/api/v1/applications/:id",
            get(applications::handle_get_application)
                .put(applications::handle_update_application)
                .delete(applications::handle_delete_application),
        )
        // Job posting scraper
        .route("/api/v1/scrape-job", post(scrape::handle_scrape_job))
        // Follow-up email drafting
        .route("/api/v1/follow-up-email", post(email::handle_follow_up_email))
        .with_state(state)
}
