//! Post generation — orchestrates the full pipeline.
//!
//! Flow: fetch profile → normalize answers → assemble prompts → LLM generate →
//!       authenticity score → persist draft → return response.
//!
//! The LLM writes the post; everything on either side of that call is
//! deterministic, so a generation can always be explained after the fact.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::playbook::Playbook;
use crate::generation::post_types::{config_for, PostType};
use crate::generation::prompts::build_prompts;
use crate::generation::scoring::score_authenticity;
use crate::llm_client::LlmClient;
use crate::models::VoiceProfileRow;
use crate::profile::answers::VoiceAnswers;

/// Request body for post generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub user_id: Uuid,
    pub voice_profile_id: Uuid,
    pub post_type: String,
    pub topic: String,
    #[serde(default)]
    pub additional_context: Option<String>,
}

/// Response from the generation pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub draft_id: Uuid,
    pub content: String,
    pub authenticity_score: u32,
    pub authenticity_flags: Vec<String>,
    pub post_type: String,
    pub topic: String,
}

/// Runs the full post generation pipeline and persists the draft.
///
/// Steps:
/// 1. Fetch the voice profile (ownership enforced in the WHERE clause)
/// 2. Normalize interview answers
/// 3. Assemble system + user prompts
/// 4. LLM generation at the post type's temperature
/// 5. Authenticity scoring of the raw output
/// 6. INSERT into post_drafts (status='draft')
pub async fn generate_post(
    pool: &PgPool,
    llm: &LlmClient,
    playbook: &Playbook,
    request: GenerateRequest,
) -> Result<GenerateResponse, AppError> {
    let topic = request.topic.trim().to_string();

    // Step 1: Fetch voice profile
    let profile: Option<VoiceProfileRow> =
        sqlx::query_as("SELECT * FROM voice_profiles WHERE id = $1 AND user_id = $2")
            .bind(request.voice_profile_id)
            .bind(request.user_id)
            .fetch_optional(pool)
            .await?;

    let profile = profile.ok_or_else(|| {
        AppError::NotFound(format!(
            "Voice profile {} not found",
            request.voice_profile_id
        ))
    })?;

    // Step 2: Normalize answers (missing/malformed data degrades to empty)
    let answers = profile
        .profile_data
        .as_ref()
        .map(VoiceAnswers::from_value)
        .unwrap_or_default();

    // Step 3: Assemble prompts. Also re-validates the post type string.
    let prompts = build_prompts(
        &answers,
        &request.post_type,
        &topic,
        request.additional_context.as_deref().unwrap_or(""),
        playbook,
    )?;
    let post_type: PostType = request.post_type.parse()?;
    let config = config_for(post_type);

    info!(
        "Generating {} post for user {} (profile {})",
        post_type, request.user_id, request.voice_profile_id
    );

    // Step 4: LLM generation
    let content = llm
        .call_text(
            &prompts.user_prompt,
            &prompts.system_prompt,
            config.temperature,
        )
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    // Step 5: Authenticity scoring
    let result = score_authenticity(&content, Some(&answers), Some(post_type), Some(&topic));
    info!(
        "Authenticity score {}/100 with {} flags for user {}",
        result.score,
        result.flags.len(),
        request.user_id
    );

    // Step 6: Persist draft
    let draft_id = Uuid::new_v4();
    let flags_value = serde_json::to_value(&result.flags)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize flags: {e}")))?;

    sqlx::query(
        r#"
        INSERT INTO post_drafts
            (id, user_id, voice_profile_id, post_type, topic, additional_context,
             generated_content, authenticity_score, authenticity_flags, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'draft')
        "#,
    )
    .bind(draft_id)
    .bind(request.user_id)
    .bind(request.voice_profile_id)
    .bind(post_type.as_str())
    .bind(&topic)
    .bind(request.additional_context.as_deref().filter(|s| !s.is_empty()))
    .bind(&content)
    .bind(result.score as i32)
    .bind(&flags_value)
    .execute(pool)
    .await?;

    Ok(GenerateResponse {
        draft_id,
        content,
        authenticity_score: result.score,
        authenticity_flags: result.flags,
        post_type: post_type.as_str().to_string(),
        topic,
    })
}
