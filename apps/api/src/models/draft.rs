use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A row in the post_drafts table. generated_content is the model output as
/// delivered; edited_content holds the user's revision, and the authenticity
/// columns are re-computed whenever it changes.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PostDraftRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub voice_profile_id: Option<Uuid>,
    pub post_type: String,
    pub topic: String,
    pub additional_context: Option<String>,
    pub generated_content: String,
    pub edited_content: Option<String>,
    pub authenticity_score: Option<i32>,
    pub authenticity_flags: Option<Value>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
