use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::{
    EducationCreate, EducationRow, ExperienceCreate, ExperienceRow, ProfileCreate,
    ProfileExport, ProfileRow,
};
use crate::profiles::store::{load_candidate, require_profile};
use crate::profiles::validation::{validate_education, validate_experience, validate_profile};
use crate::state::AppState;

/// POST /api/profile
///
/// Creates a profile, or overwrites the existing one registered under the same email.
pub async fn handle_upsert_profile(
    State(state): State<AppState>,
    Json(req): Json<ProfileCreate>,
) -> Result<(StatusCode, Json<ProfileRow>), AppError> {
    let profile = validate_profile(req)?;

    let row = state.store.upsert_profile(&profile).await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/profile/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<i64>,
) -> Result<Json<ProfileRow>, AppError> {
    let profile = require_profile(state.store.as_ref(), profile_id).await?;
    Ok(Json(profile))
}

/// DELETE /api/profile/:id
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_profile(profile_id).await? {
        return Err(AppError::profile_not_found(profile_id));
    }
    info!("Deleted profile {profile_id} with all education and experience records");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/profile/:id/export
pub async fn handle_export_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<i64>,
) -> Result<Json<ProfileExport>, AppError> {
    let candidate = load_candidate(state.store.as_ref(), profile_id).await?;
    Ok(Json(candidate))
}

/// POST /api/profile/:id/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Path(profile_id): Path<i64>,
    Json(req): Json<EducationCreate>,
) -> Result<(StatusCode, Json<EducationRow>), AppError> {
    let education = validate_education(req)?;
    require_profile(state.store.as_ref(), profile_id).await?;

    let row = state.store.insert_education(profile_id, &education).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/:id/educations
pub async fn handle_list_educations(
    State(state): State<AppState>,
    Path(profile_id): Path<i64>,
) -> Result<Json<Vec<EducationRow>>, AppError> {
    require_profile(state.store.as_ref(), profile_id).await?;
    Ok(Json(state.store.list_educations(profile_id).await?))
}

/// DELETE /api/profile/:id/education/:education_id
pub async fn handle_delete_education(
    State(state): State<AppState>,
    Path((profile_id, education_id)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_education(profile_id, education_id).await? {
        return Err(AppError::NotFound(format!(
            "Education {education_id} not found for profile {profile_id}"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Json(req): Json<ExperienceCreate>,
) -> Result<(StatusCode, Json<ExperienceRow>), AppError> {
    let experience = validate_experience(req)?;
    require_profile(state.store.as_ref(), experience.profile_id).await?;

    let row = state.store.insert_experience(&experience).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/:id/experiences
pub async fn handle_list_experiences(
    State(state): State<AppState>,
    Path(profile_id): Path<i64>,
) -> Result<Json<Vec<ExperienceRow>>, AppError> {
    require_profile(state.store.as_ref(), profile_id).await?;
    Ok(Json(state.store.list_experiences(profile_id).await?))
}

/// DELETE /api/:id/experiences/:experience_id
pub async fn handle_delete_experience(
    State(state): State<AppState>,
    Path((profile_id, experience_id)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_experience(profile_id, experience_id).await? {
        return Err(AppError::NotFound(format!(
            "Experience {experience_id} not found for profile {profile_id}"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
