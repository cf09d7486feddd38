use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::{generate_post, GenerateRequest, GenerateResponse};
use crate::generation::post_types::{config_for, PostType};
use crate::generation::scoring::{score_authenticity, ScoreResult};
use crate::models::PostDraftRow;
use crate::profile::answers::VoiceAnswers;
use crate::state::AppState;

const MAX_TOPIC_LEN: usize = 1000;
const MAX_CONTEXT_LEN: usize = 2000;

const VALID_STATUSES: &[&str] = &["draft", "edited", "published", "archived"];

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// POST /api/v1/posts/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if req.topic.trim().is_empty() {
        return Err(AppError::Validation("Topic is required.".into()));
    }
    if req.topic.chars().count() > MAX_TOPIC_LEN {
        return Err(AppError::Validation(
            "Topic must be under 1000 characters.".into(),
        ));
    }
    if let Some(ctx) = &req.additional_context {
        if ctx.chars().count() > MAX_CONTEXT_LEN {
            return Err(AppError::Validation(
                "Additional context must be under 2000 characters.".into(),
            ));
        }
    }

    let response = generate_post(&state.db, &state.llm, &state.playbook, req).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub content: String,
    #[serde(default)]
    pub post_type: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub profile_data: Option<Value>,
}

/// POST /api/v1/posts/score
///
/// Scores arbitrary content without generating or persisting anything.
/// Useful for re-checking a post after manual edits. Empty content is not an
/// error here: the scorer's own zero-score result is the honest answer.
pub async fn handle_score(
    State(_state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    Ok(Json(score_request(&req)?))
}

fn score_request(req: &ScoreRequest) -> Result<ScoreResult, AppError> {
    let post_type = match &req.post_type {
        Some(t) => Some(t.parse::<PostType>()?),
        None => None,
    };
    let answers = req.profile_data.as_ref().map(VoiceAnswers::from_value);

    Ok(score_authenticity(
        &req.content,
        answers.as_ref(),
        post_type,
        req.topic.as_deref(),
    ))
}

#[derive(Debug, Serialize)]
pub struct PostTypeInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub format_rules: &'static [&'static str],
    pub max_length: u32,
    pub temperature: f32,
    pub strategic_intent: &'static str,
}

/// GET /api/v1/post-types
///
/// The full rule table, so clients never hardcode a copy of it.
pub async fn handle_list_post_types() -> Json<Vec<PostTypeInfo>> {
    let types = PostType::ALL
        .iter()
        .map(|&pt| {
            let config = config_for(pt);
            PostTypeInfo {
                key: pt.as_str(),
                label: config.label,
                description: config.description,
                format_rules: config.format_rules,
                max_length: config.max_length,
                temperature: config.temperature,
                strategic_intent: config.strategic_intent,
            }
        })
        .collect();
    Json(types)
}

/// GET /api/v1/drafts
pub async fn handle_list_drafts(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<PostDraftRow>>, AppError> {
    let drafts: Vec<PostDraftRow> =
        sqlx::query_as("SELECT * FROM post_drafts WHERE user_id = $1 ORDER BY created_at DESC")
            .bind(params.user_id)
            .fetch_all(&state.db)
            .await?;

    Ok(Json(drafts))
}

/// GET /api/v1/drafts/:id
pub async fn handle_get_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<PostDraftRow>, AppError> {
    let draft = fetch_owned_draft(&state, id, params.user_id).await?;
    Ok(Json(draft))
}

#[derive(Debug, Deserialize)]
pub struct UpdateDraftRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub edited_content: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// PATCH /api/v1/drafts/:id
///
/// Accepts edited content and/or a status change. An edit re-runs the
/// authenticity scorer so the stored score always describes the stored text.
pub async fn handle_update_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDraftRequest>,
) -> Result<Json<PostDraftRow>, AppError> {
    if let Some(status) = &req.status {
        if !VALID_STATUSES.contains(&status.as_str()) {
            return Err(AppError::Validation(format!(
                "Invalid status. Must be one of: {}",
                VALID_STATUSES.join(", ")
            )));
        }
    }

    let existing = fetch_owned_draft(&state, id, req.user_id).await?;

    // Any provided edit gets re-scored, blank included: the scorer degrades
    // gracefully and a blank edit deserves its zero, not the stale score.
    let (score, flags) = match &req.edited_content {
        Some(edited) => {
            let answers = load_profile_answers(&state, &existing).await?;
            let post_type = existing.post_type.parse::<PostType>().ok();
            let result = score_authenticity(
                edited,
                answers.as_ref(),
                post_type,
                Some(&existing.topic),
            );
            let flags = serde_json::to_value(&result.flags).map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to serialize flags: {e}"))
            })?;
            (Some(result.score as i32), Some(flags))
        }
        None => (None, None),
    };

    let updated: PostDraftRow = sqlx::query_as(
        r#"
        UPDATE post_drafts
        SET edited_content = COALESCE($3, edited_content),
            status = COALESCE($4, status),
            authenticity_score = COALESCE($5, authenticity_score),
            authenticity_flags = COALESCE($6, authenticity_flags),
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(req.user_id)
    .bind(req.edited_content.as_deref())
    .bind(req.status.as_deref())
    .bind(score)
    .bind(flags)
    .fetch_one(&state.db)
    .await?;

    info!("Updated draft {} for user {}", id, req.user_id);
    Ok(Json(updated))
}

/// DELETE /api/v1/drafts/:id
pub async fn handle_delete_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM post_drafts WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(params.user_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Draft {id} not found")));
    }

    info!("Deleted draft {} for user {}", id, params.user_id);
    Ok(StatusCode::NO_CONTENT)
}

async fn fetch_owned_draft(
    state: &AppState,
    id: Uuid,
    user_id: Uuid,
) -> Result<PostDraftRow, AppError> {
    let draft: Option<PostDraftRow> =
        sqlx::query_as("SELECT * FROM post_drafts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&state.db)
            .await?;

    draft.ok_or_else(|| AppError::NotFound(format!("Draft {id} not found")))
}

/// Loads the normalized answers behind a draft's voice profile, when the
/// profile still exists. Deleted profiles degrade to no founder signals.
async fn load_profile_answers(
    state: &AppState,
    draft: &PostDraftRow,
) -> Result<Option<VoiceAnswers>, AppError> {
    let Some(profile_id) = draft.voice_profile_id else {
        return Ok(None);
    };

    let profile_data: Option<Option<Value>> = sqlx::query_scalar(
        "SELECT profile_data FROM voice_profiles WHERE id = $1 AND user_id = $2",
    )
    .bind(profile_id)
    .bind(draft.user_id)
    .fetch_optional(&state.db)
    .await?;

    Ok(profile_data
        .flatten()
        .map(|v| VoiceAnswers::from_value(&v)))
}
