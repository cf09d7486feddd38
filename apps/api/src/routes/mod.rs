pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::interview::handlers as interview;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Voice profiles
        .route("/api/v1/profiles", post(profile::handle_create_profile))
        .route("/api/v1/profiles", get(profile::handle_list_profiles))
        .route("/api/v1/profiles/:id", get(profile::handle_get_profile))
        .route(
            "/api/v1/profiles/:id",
            delete(profile::handle_delete_profile),
        )
        .route(
            "/api/v1/profiles/:id/export",
            get(profile::handle_export_profile),
        )
        // Interview
        .route(
            "/api/v1/interview/followup",
            post(interview::handle_followup),
        )
        // Generation + scoring
        .route("/api/v1/posts/generate", post(generation::handle_generate))
        .route("/api/v1/posts/score", post(generation::handle_score))
        .route(
            "/api/v1/post-types",
            get(generation::handle_list_post_types),
        )
        // Drafts
        .route("/api/v1/drafts", get(generation::handle_list_drafts))
        .route("/api/v1/drafts/:id", get(generation::handle_get_draft))
        .route("/api/v1/drafts/:id", patch(generation::handle_update_draft))
        .route(
            "/api/v1/drafts/:id",
            delete(generation::handle_delete_draft),
        )
        .with_state(state)
}
