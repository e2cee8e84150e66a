use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::state::AppState;

pub const FEEDBACK_THANKS: &str = "Thank you! We appreciate your input.";

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub message: String,
}

/// POST /api/v1/feedback
pub async fn handle_submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackResponse>), AppError> {
    request.profile.require()?;

    state
        .feedback
        .submit(&request.profile.name, &request.profile.email, &request.comment)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FeedbackResponse {
            message: FEEDBACK_THANKS.to_string(),
        }),
    ))
}
