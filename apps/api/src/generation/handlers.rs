//! Axum route handlers for the generation API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::generation::achievement::rewrite_achievement;
use crate::generation::cover_letter::generate_cover_letter;
use crate::generation::cv::{build_cv, CvRegion};
use crate::generation::gap_analysis::analyze_gaps;
use crate::generation::greeting::greet;
use crate::generation::job_description::extract_job_description;
use crate::generation::posting::fetch_posting_text;
use crate::generation::review::review_match;
use crate::models::job::{
    CoverLetterStyle, GapAnalysis, GeneratedCv, JobDescription, ReviewResponse, RewriteStyle,
};
use crate::profiles::store::{load_candidate, require_profile};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GreetRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractJobRequest {
    #[serde(rename = "jobDescription", default)]
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractJobFromLinkRequest {
    #[serde(rename = "jobUrl", default)]
    pub job_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub profile_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct BuildCvQuery {
    pub profile_id: i64,
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterQuery {
    pub profile_id: i64,
    #[serde(default)]
    pub style: CoverLetterStyle,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

#[derive(Debug, Deserialize)]
pub struct RewriteAchievementRequest {
    pub achievement_text: String,
    #[serde(default)]
    pub style: RewriteStyle,
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RewriteAchievementResponse {
    pub original: String,
    pub rewritten: String,
    pub style: RewriteStyle,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_root() -> Json<Value> {
    Json(json!({ "message": "Hello" }))
}

/// POST /greet
pub async fn handle_greet(
    State(state): State<AppState>,
    Json(req): Json<GreetRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = greet(state.llm.as_ref(), req.name.as_deref()).await?;
    Ok(Json(MessageResponse { message }))
}

/// POST /api/extract-job-description
pub async fn handle_extract_job_description(
    State(state): State<AppState>,
    Json(req): Json<ExtractJobRequest>,
) -> Result<Json<JobDescription>, AppError> {
    let job = extract_job_description(state.llm.as_ref(), &req.job_description).await?;
    Ok(Json(job))
}

/// POST /api/extract-job-description-from-link
///
/// Downloads the posting first, then runs the same extraction as pasted text.
pub async fn handle_extract_job_description_from_link(
    State(state): State<AppState>,
    Json(req): Json<ExtractJobFromLinkRequest>,
) -> Result<Json<JobDescription>, AppError> {
    if req.job_url.trim().is_empty() {
        return Err(AppError::Validation("jobUrl cannot be empty".to_string()));
    }

    let text = fetch_posting_text(&state.http, &req.job_url).await?;
    let job = extract_job_description(state.llm.as_ref(), &text).await?;
    Ok(Json(job))
}

/// POST /api/build-cv?profile_id=&region=
pub async fn handle_build_cv(
    State(state): State<AppState>,
    Query(query): Query<BuildCvQuery>,
    Json(job): Json<JobDescription>,
) -> Result<Json<GeneratedCv>, AppError> {
    let candidate = load_candidate(state.store.as_ref(), query.profile_id).await?;
    let region = CvRegion::from_label(query.region.as_deref());

    let cv = build_cv(state.llm.as_ref(), &candidate, &job, region).await;
    Ok(Json(cv))
}

/// POST /api/match-position?profile_id=
pub async fn handle_match_position(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
    Json(job): Json<JobDescription>,
) -> Result<Json<ReviewResponse>, AppError> {
    let candidate = load_candidate(state.store.as_ref(), query.profile_id).await?;
    Ok(Json(review_match(state.llm.as_ref(), &candidate, &job).await))
}

/// POST /api/generate-cover-letter?profile_id=&style=&notes=
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Query(query): Query<CoverLetterQuery>,
    Json(job): Json<JobDescription>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let profile = require_profile(state.store.as_ref(), query.profile_id).await?;

    let cover_letter = generate_cover_letter(
        state.llm.as_ref(),
        &profile,
        &job,
        query.style,
        query.notes.as_deref(),
        Utc::now().date_naive(),
    )
    .await;

    Ok(Json(CoverLetterResponse { cover_letter }))
}

/// POST /api/analyze-gaps?profile_id=
pub async fn handle_analyze_gaps(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
    Json(job): Json<JobDescription>,
) -> Result<Json<GapAnalysis>, AppError> {
    let candidate = load_candidate(state.store.as_ref(), query.profile_id).await?;
    Ok(Json(analyze_gaps(state.llm.as_ref(), &candidate, &job).await))
}

/// POST /api/rewrite-achievement
pub async fn handle_rewrite_achievement(
    State(state): State<AppState>,
    Json(req): Json<RewriteAchievementRequest>,
) -> Result<Json<RewriteAchievementResponse>, AppError> {
    let rewritten = rewrite_achievement(
        state.llm.as_ref(),
        &req.achievement_text,
        req.style,
        req.context.as_deref(),
    )
    .await;

    Ok(Json(RewriteAchievementResponse {
        original: req.achievement_text,
        rewritten,
        style: req.style,
    }))
}
