//! Advisor: the three model-backed calls (resume skill extraction, career
//! suggestions and learning resources).
//!
//! Responses are opaque text. Only the skill extraction response is parsed,
//! and only by splitting on commas.

pub mod handlers;
pub mod prompts;

use serde::Serialize;
use tracing::info;

use crate::advisor::prompts::{
    CAREER_SUGGESTION_PROMPT_TEMPLATE, CAREER_SUGGESTION_SYSTEM,
    LEARNING_RESOURCES_PROMPT_TEMPLATE, LEARNING_RESOURCES_SYSTEM, RESUME_SKILLS_PROMPT_PREFIX,
    RESUME_SKILLS_SYSTEM,
};
use crate::errors::AppError;
use crate::llm_client::{CompletionClient, CompletionRequest};
use crate::skills::aggregator::SkillSet;
use crate::skills::split_skills;

pub const EMPTY_CAREER_WARNING: &str = "Please enter a career name first.";

/// Raw extraction response plus its comma-split tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedSkills {
    pub raw: String,
    pub skills: Vec<String>,
}

fn resume_skills_request(resume_text: &str) -> CompletionRequest {
    CompletionRequest {
        system: RESUME_SKILLS_SYSTEM.to_string(),
        prompt: format!("{RESUME_SKILLS_PROMPT_PREFIX}{resume_text}"),
        max_tokens: 200,
        temperature: 0.5,
    }
}

fn career_suggestion_request(skills: &SkillSet) -> CompletionRequest {
    CompletionRequest {
        system: CAREER_SUGGESTION_SYSTEM.to_string(),
        prompt: CAREER_SUGGESTION_PROMPT_TEMPLATE.replace("{skills}", &skills.joined()),
        max_tokens: 700,
        temperature: 0.7,
    }
}

fn learning_resources_request(career: &str) -> CompletionRequest {
    CompletionRequest {
        system: LEARNING_RESOURCES_SYSTEM.to_string(),
        prompt: LEARNING_RESOURCES_PROMPT_TEMPLATE.replace("{career}", career),
        max_tokens: 700,
        temperature: 0.6,
    }
}

/// Asks the model for the skills in a resume and tokenizes its reply.
pub async fn extract_resume_skills(
    llm: &dyn CompletionClient,
    resume_text: &str,
) -> Result<ExtractedSkills, AppError> {
    let raw = llm
        .complete(&resume_skills_request(resume_text))
        .await
        .map_err(|e| AppError::Llm(format!("Resume skill extraction failed: {e}")))?
        .trim()
        .to_string();

    let skills = split_skills(&raw);
    info!("Extracted {} skills from resume", skills.len());

    Ok(ExtractedSkills { raw, skills })
}

/// Five career paths with descriptions, as free text. Returned verbatim.
pub async fn suggest_careers(
    llm: &dyn CompletionClient,
    skills: &SkillSet,
) -> Result<String, AppError> {
    llm.complete(&career_suggestion_request(skills))
        .await
        .map_err(|e| AppError::Llm(format!("Career suggestion failed: {e}")))
}

/// Curated links for one career, as free text.
pub async fn fetch_learning_resources(
    llm: &dyn CompletionClient,
    career: &str,
) -> Result<String, AppError> {
    let career = career.trim();
    if career.is_empty() {
        return Err(AppError::EmptyInput(EMPTY_CAREER_WARNING.to_string()));
    }

    let resources = llm
        .complete(&learning_resources_request(career))
        .await
        .map_err(|e| AppError::Llm(format!("Learning resource lookup failed: {e}")))?;

    Ok(resources.trim().to_string())
}
