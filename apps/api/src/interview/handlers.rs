use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::interview::prompts::{build_followup_prompt, system_prompt_for_field};
use crate::state::AppState;

/// Temperature for the interviewer persona. Warmer than the deterministic
/// default so follow-ups don't all sound the same, cooler than generation.
const FOLLOWUP_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Deserialize)]
pub struct FollowupRequest {
    #[serde(default)]
    pub question: String,
    pub answer: String,
    pub field: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowupResponse {
    pub follow_up: Option<String>,
    pub affirmation: String,
}

#[derive(Debug, Deserialize)]
struct FollowupLlmOutput {
    #[serde(rename = "followUp")]
    follow_up: Option<String>,
    affirmation: Option<String>,
}

/// POST /api/v1/interview/followup
///
/// Asks the interviewer persona whether the answer needs one more push.
/// Degrades gracefully: unknown fields and unparseable model output both
/// resolve to a plain acknowledgment rather than an error.
pub async fn handle_followup(
    State(state): State<AppState>,
    Json(req): Json<FollowupRequest>,
) -> Result<Json<FollowupResponse>, AppError> {
    if req.answer.trim().is_empty() || req.field.trim().is_empty() {
        return Err(AppError::Validation("Missing required fields".into()));
    }

    let Some(system) = system_prompt_for_field(&req.field) else {
        return Ok(Json(FollowupResponse {
            follow_up: None,
            affirmation: "Got it.".to_string(),
        }));
    };

    let prompt = build_followup_prompt(&req.question, &req.answer);

    let output: FollowupLlmOutput = match state
        .llm
        .call_json(&prompt, system, FOLLOWUP_TEMPERATURE)
        .await
    {
        Ok(out) => out,
        Err(e) => {
            // A broken follow-up must never block the interview.
            warn!("Interview follow-up call failed for field '{}': {}", req.field, e);
            return Ok(Json(FollowupResponse {
                follow_up: None,
                affirmation: "Got it.".to_string(),
            }));
        }
    };

    let follow_up = output
        .follow_up
        .filter(|s| !s.trim().is_empty() && s.trim().to_lowercase() != "null");

    Ok(Json(FollowupResponse {
        follow_up,
        affirmation: output
            .affirmation
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "Got it.".to_string()),
    }))
}
