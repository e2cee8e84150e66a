//! Axum route handlers for skills, career recommendations and learning resources.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::advisor::{fetch_learning_resources, suggest_careers};
use crate::catalog::CareerRecord;
use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::skills::aggregator::SkillSet;
use crate::skills::matcher::recommend;
use crate::skills::split_skills;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub selected_skills: Vec<String>,
    /// Free text, comma-separated.
    #[serde(default)]
    pub manual_skills: String,
    /// Raw reply of the resume skill extraction, comma-separated.
    #[serde(default)]
    pub extracted_skills: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub skills: SkillSet,
    /// Model-written career paths; `None` when there were no skills to send.
    pub suggestions: Option<String>,
    pub catalog_matches: Vec<CareerRecord>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<CareerRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ResourcesRequest {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub career: String,
}

#[derive(Debug, Serialize)]
pub struct ResourcesResponse {
    pub career: String,
    pub resources: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills
///
/// Every skill named in the catalog, sorted. Feeds the multi-select.
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: state.catalog.all_skills(),
    })
}

/// POST /api/v1/recommendations
///
/// Combines the three skill sources, asks the model for career paths and
/// filters the catalog for careers sharing a skill.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    request.profile.require()?;

    let extracted = split_skills(&request.extracted_skills);
    let skills = SkillSet::combine(&request.selected_skills, &request.manual_skills, &extracted);

    if skills.is_empty() {
        return Ok(Json(RecommendationResponse {
            skills,
            suggestions: None,
            catalog_matches: Vec::new(),
        }));
    }

    let catalog_matches: Vec<CareerRecord> = recommend(&state.catalog, &skills)
        .into_iter()
        .cloned()
        .collect();
    info!(
        "{} skills matched {} catalog careers",
        skills.len(),
        catalog_matches.len()
    );

    let suggestions = suggest_careers(state.llm.as_ref(), &skills).await?;

    Ok(Json(RecommendationResponse {
        skills,
        suggestions: Some(suggestions),
        catalog_matches,
    }))
}

/// POST /api/v1/careers/match
///
/// Deterministic catalog filter only; no model call.
pub async fn handle_match_careers(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    request.profile.require()?;

    let matches = recommend(&state.catalog, &request.skills)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(MatchResponse { matches }))
}

/// POST /api/v1/resources
pub async fn handle_learning_resources(
    State(state): State<AppState>,
    Json(request): Json<ResourcesRequest>,
) -> Result<Json<ResourcesResponse>, AppError> {
    request.profile.require()?;

    let resources = fetch_learning_resources(state.llm.as_ref(), &request.career).await?;

    Ok(Json(ResourcesResponse {
        career: request.career.trim().to_string(),
        resources,
    }))
}
