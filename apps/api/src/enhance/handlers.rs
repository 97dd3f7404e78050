use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enhance::scoring::{score_resume, ScoreReport};
use crate::enhance::suggestions::action_verbs;
use crate::errors::AppError;
use crate::models::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceTextRequest {
    pub text: String,
    #[serde(default)]
    pub job_title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EnhanceTextResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestSkillsRequest {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub current_skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestSkillsResponse {
    pub skills: Vec<String>,
}

/// POST /api/v1/resume/score
pub async fn handle_score(Json(record): Json<ResumeRecord>) -> Json<ScoreReport> {
    Json(score_resume(&record))
}

/// POST /api/v1/enhance/summary
pub async fn handle_enhance_summary(
    State(state): State<AppState>,
    Json(req): Json<EnhanceTextRequest>,
) -> Result<Json<EnhanceTextResponse>, AppError> {
    require_text(&req.text)?;
    let text = state.enhancer.enhance_summary(&req.text, &req.job_title).await;
    Ok(Json(EnhanceTextResponse { text }))
}

/// POST /api/v1/enhance/bullet
pub async fn handle_enhance_bullet(
    State(state): State<AppState>,
    Json(req): Json<EnhanceTextRequest>,
) -> Result<Json<EnhanceTextResponse>, AppError> {
    require_text(&req.text)?;
    let text = state.enhancer.enhance_bullet(&req.text, &req.job_title).await;
    Ok(Json(EnhanceTextResponse { text }))
}

/// POST /api/v1/enhance/skills
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(req): Json<SuggestSkillsRequest>,
) -> Json<SuggestSkillsResponse> {
    let skills = state
        .enhancer
        .suggest_skills(&req.job_title, &req.current_skills)
        .await;
    Json(SuggestSkillsResponse { skills })
}

/// GET /api/v1/enhance/action-verbs
pub async fn handle_action_verbs() -> Json<&'static [&'static str]> {
    Json(action_verbs())
}

fn require_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("text must not be empty".to_string()));
    }
    Ok(())
}
