pub mod health;
pub mod interview;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Provider operations
        .route(
            "/api/v1/interview/questions",
            post(interview::handle_generate_questions),
        )
        .route(
            "/api/v1/interview/evaluate",
            post(interview::handle_evaluate),
        )
        // Session flow
        .route(
            "/api/v1/interview/sessions",
            post(interview::handle_start_session),
        )
        .route(
            "/api/v1/interview/sessions/:id",
            get(interview::handle_get_session),
        )
        .route(
            "/api/v1/interview/sessions/:id/answers",
            post(interview::handle_submit_answer),
        )
        .route(
            "/api/v1/interview/sessions/:id/end",
            post(interview::handle_end_session),
        )
        .with_state(state)
}
