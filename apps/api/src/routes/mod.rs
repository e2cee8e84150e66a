pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::feedback::handlers as feedback;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Skills & careers
        .route("/api/v1/skills", get(advisor::handle_list_skills))
        .route(
            "/api/v1/recommendations",
            post(advisor::handle_recommendations),
        )
        .route("/api/v1/careers/match", post(advisor::handle_match_careers))
        .route("/api/v1/resources", post(advisor::handle_learning_resources))
        // Resume analysis
        .route("/api/v1/resume/skills", post(resume::handle_resume_skills))
        // Feedback
        .route("/api/v1/feedback", post(feedback::handle_submit_feedback))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
