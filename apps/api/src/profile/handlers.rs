use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::VoiceProfileRow;
use crate::profile::answers::RawProfileData;
use crate::profile::markdown::render_voice_profile;
use crate::state::AppState;

const MAX_NAME_LEN: usize = 200;
const MAX_PROFILE_DATA_BYTES: usize = 50_000;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct CreateProfileRequest {
    pub user_id: Uuid,
    pub name: String,
    pub profile_data: Value,
}

#[derive(Serialize)]
pub struct ProfileCreatedResponse {
    pub profile: VoiceProfileRow,
}

/// POST /api/v1/profiles
///
/// Stores the raw interview answers and the rendered markdown export in one
/// write, so the export never drifts from the data it was built from.
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Json(req): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileCreatedResponse>), AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Profile name is required.".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::Validation(
            "Profile name must be 200 characters or fewer.".into(),
        ));
    }
    if !req.profile_data.is_object() {
        return Err(AppError::Validation("Profile data is required.".into()));
    }
    let serialized = serde_json::to_string(&req.profile_data)
        .map_err(|e| AppError::Validation(format!("Profile data is not valid JSON: {e}")))?;
    if serialized.len() > MAX_PROFILE_DATA_BYTES {
        return Err(AppError::Validation("Profile data is too large.".into()));
    }

    let raw: RawProfileData =
        serde_json::from_value(req.profile_data.clone()).unwrap_or_default();
    let generated = render_voice_profile(&raw);

    let profile: VoiceProfileRow = sqlx::query_as(
        r#"
        INSERT INTO voice_profiles (id, user_id, name, profile_data, generated_profile, is_active)
        VALUES ($1, $2, $3, $4, $5, TRUE)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.user_id)
    .bind(name)
    .bind(&req.profile_data)
    .bind(&generated)
    .fetch_one(&state.db)
    .await?;

    info!("Created voice profile {} for user {}", profile.id, req.user_id);

    Ok((StatusCode::CREATED, Json(ProfileCreatedResponse { profile })))
}

/// GET /api/v1/profiles
pub async fn handle_list_profiles(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<VoiceProfileRow>>, AppError> {
    let profiles: Vec<VoiceProfileRow> = sqlx::query_as(
        "SELECT * FROM voice_profiles WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(profiles))
}

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<VoiceProfileRow>, AppError> {
    let profile = fetch_owned_profile(&state, id, params.user_id).await?;
    Ok(Json(profile))
}

/// DELETE /api/v1/profiles/:id
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    // Ownership check happens in the WHERE clause; zero rows means not found.
    let result = sqlx::query("DELETE FROM voice_profiles WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(params.user_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Voice profile {id} not found")));
    }

    info!("Deleted voice profile {} for user {}", id, params.user_id);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/profiles/:id/export
///
/// Serves the stored markdown export; falls back to rendering it from the
/// raw answers when the stored copy is missing.
pub async fn handle_export_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let profile = fetch_owned_profile(&state, id, params.user_id).await?;

    let markdown = match profile.generated_profile {
        Some(md) if !md.trim().is_empty() => md,
        _ => {
            let raw: RawProfileData = profile
                .profile_data
                .as_ref()
                .and_then(|v| serde_json::from_value(v.clone()).ok())
                .unwrap_or_default();
            render_voice_profile(&raw)
        }
    };

    Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], markdown))
}

async fn fetch_owned_profile(
    state: &AppState,
    id: Uuid,
    user_id: Uuid,
) -> Result<VoiceProfileRow, AppError> {
    let profile: Option<VoiceProfileRow> =
        sqlx::query_as("SELECT * FROM voice_profiles WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&state.db)
            .await?;

    profile.ok_or_else(|| AppError::NotFound(format!("Voice profile {id} not found")))
}
