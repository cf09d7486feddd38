use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A row in the voice_profiles table. profile_data holds the raw interview
/// answers as JSON; generated_profile is the rendered markdown export.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VoiceProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub profile_data: Option<Value>,
    pub generated_profile: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
