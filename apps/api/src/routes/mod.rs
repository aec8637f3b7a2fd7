pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::interview::handlers as interview;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        // Applications API
        .route(
            "/api/v1/applications",
            get(applications::handle_list_applications)
                .post(applications::handle_create_application),
        )
        // Interview API
        .route(
            "/api/v1/interview/questions",
            post(interview::handle_generate_questions),
        )
        .route(
            "/api/v1/interview/current",
            get(interview::handle_current_question),
        )
        .route(
            "/api/v1/interview/answer",
            post(interview::handle_submit_answer),
        )
        .route("/api/v1/interview/next", post(interview::handle_next_question))
        .route(
            "/api/v1/interview/status",
            get(interview::handle_session_status),
        )
        // Report API
        .route("/api/v1/reports", post(report::handle_generate_report))
        .route(
            "/api/v1/reports/:filename",
            get(report::handle_download_report),
        )
        .with_state(state)
}
