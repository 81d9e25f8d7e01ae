pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::profiles::handlers as profiles;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(generation::handle_root))
        .route("/health", get(health::health_handler))
        .route("/greet", post(generation::handle_greet))
        // Profiles
        .route("/api/profile", post(profiles::handle_upsert_profile))
        .route(
            "/api/profile/:id",
            get(profiles::handle_get_profile).delete(profiles::handle_delete_profile),
        )
        .route("/api/profile/:id/export", get(profiles::handle_export_profile))
        .route("/api/profile/:id/education", post(profiles::handle_add_education))
        .route(
            "/api/profile/:id/education/:education_id",
            delete(profiles::handle_delete_education),
        )
        .route("/api/:id/educations", get(profiles::handle_list_educations))
        .route("/api/experience", post(profiles::handle_add_experience))
        .route("/api/:id/experiences", get(profiles::handle_list_experiences))
        .route(
            "/api/:id/experiences/:experience_id",
            delete(profiles::handle_delete_experience),
        )
        // Generation
        .route(
            "/api/extract-job-description",
            post(generation::handle_extract_job_description),
        )
        .route(
            "/api/extract-job-description-from-link",
            post(generation::handle_extract_job_description_from_link),
        )
        .route("/api/build-cv", post(generation::handle_build_cv))
        .route("/api/match-position", post(generation::handle_match_position))
        .route(
            "/api/generate-cover-letter",
            post(generation::handle_generate_cover_letter),
        )
        .route("/api/analyze-gaps", post(generation::handle_analyze_gaps))
        .route(
            "/api/rewrite-achievement",
            post(generation::handle_rewrite_achievement),
        )
        .with_state(state)
}
