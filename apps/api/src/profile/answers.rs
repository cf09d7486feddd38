//! Voice-profile answer normalization.
//!
//! Two historical shapes of the interview payload exist: the legacy one with
//! one field per question (role, origin, icp, pain, misconception, tone,
//! references, win, hottake, repeating) and the consolidated one (identity,
//! audience, voice, content_bank). Both resolve here into one canonical record
//! before any prompt or scoring rule runs. The new field wins when present;
//! otherwise the legacy fields are joined with " — ". Missing data degrades to
//! empty strings, never an error.

use serde::Deserialize;
use serde_json::Value;

/// The raw interview payload as stored in voice_profiles.profile_data.
/// Every field is optional; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProfileData {
    pub name: Option<String>,
    // Consolidated shape
    pub identity: Option<String>,
    pub audience: Option<String>,
    pub voice: Option<String>,
    pub content_bank: Option<String>,
    // Shared across both shapes
    pub contrarian: Option<String>,
    pub lesson: Option<String>,
    pub desired_outcome: Option<String>,
    pub pillars: Option<String>,
    pub offlimits: Option<String>,
    // Legacy shape
    pub role: Option<String>,
    pub origin: Option<String>,
    pub icp: Option<String>,
    pub pain: Option<String>,
    pub misconception: Option<String>,
    pub tone: Option<String>,
    pub references: Option<String>,
    pub win: Option<String>,
    pub hottake: Option<String>,
    pub repeating: Option<String>,
}

/// Canonical, fully-resolved answers. Every field is a plain string,
/// possibly empty. This is the only shape the assembler and scorer see.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoiceAnswers {
    pub name: String,
    pub identity: String,
    pub contrarian: String,
    pub lesson: String,
    pub audience: String,
    pub desired_outcome: String,
    pub voice: String,
    pub pillars: String,
    pub offlimits: String,
    pub content_bank: String,
}

impl VoiceAnswers {
    pub fn from_raw(raw: &RawProfileData) -> Self {
        VoiceAnswers {
            name: clean(&raw.name),
            identity: resolve(&raw.identity, &[&raw.role, &raw.origin]),
            contrarian: clean(&raw.contrarian),
            lesson: clean(&raw.lesson),
            audience: resolve(&raw.audience, &[&raw.icp, &raw.pain, &raw.misconception]),
            desired_outcome: clean(&raw.desired_outcome),
            voice: resolve(&raw.voice, &[&raw.tone, &raw.references]),
            pillars: clean(&raw.pillars),
            offlimits: clean(&raw.offlimits),
            content_bank: resolve(&raw.content_bank, &[&raw.win, &raw.hottake, &raw.repeating]),
        }
    }

    /// Normalizes straight from the stored JSON value. Malformed payloads
    /// degrade to an all-empty record rather than failing the request.
    pub fn from_value(value: &Value) -> Self {
        let raw: RawProfileData =
            serde_json::from_value(value.clone()).unwrap_or_default();
        Self::from_raw(&raw)
    }

    /// The non-empty signal fields the scorer checks for founder-content reuse.
    pub fn founder_signals(&self) -> Vec<&str> {
        [
            self.identity.as_str(),
            self.contrarian.as_str(),
            self.lesson.as_str(),
            self.audience.as_str(),
            self.content_bank.as_str(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.founder_signals().is_empty() && self.voice.is_empty()
    }
}

fn clean(field: &Option<String>) -> String {
    field.as_deref().map(str::trim).unwrap_or("").to_string()
}

/// Prefer the consolidated field when non-empty; otherwise join the legacy
/// fields that carry content with " — ".
fn resolve(new: &Option<String>, legacy: &[&Option<String>]) -> String {
    let new = clean(new);
    if !new.is_empty() {
        return new;
    }
    legacy
        .iter()
        .map(|f| clean(f))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" — ")
}
