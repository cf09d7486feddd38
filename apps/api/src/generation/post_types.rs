//! Post-Type Rule Table — the single source of truth for per-type behavior.
//!
//! Every post type carries its label, format rules, character ceiling,
//! generation temperature, and strategic intent. Lookup by an unrecognized
//! identifier is an error, never a silent default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The fixed vocabulary of content shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Story,
    Insight,
    Contrarian,
    Listicle,
    Question,
    CaseStudy,
}

impl PostType {
    pub const ALL: [PostType; 6] = [
        PostType::Story,
        PostType::Insight,
        PostType::Contrarian,
        PostType::Listicle,
        PostType::Question,
        PostType::CaseStudy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Story => "story",
            PostType::Insight => "insight",
            PostType::Contrarian => "contrarian",
            PostType::Listicle => "listicle",
            PostType::Question => "question",
            PostType::CaseStudy => "case_study",
        }
    }

    /// Story and case study posts are inherently autobiographical.
    pub fn is_narrative(&self) -> bool {
        matches!(self, PostType::Story | PostType::CaseStudy)
    }
}

impl FromStr for PostType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "story" => Ok(PostType::Story),
            "insight" => Ok(PostType::Insight),
            "contrarian" => Ok(PostType::Contrarian),
            "listicle" => Ok(PostType::Listicle),
            "question" => Ok(PostType::Question),
            "case_study" => Ok(PostType::CaseStudy),
            other => Err(AppError::UnknownPostType(other.to_string())),
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static per-type configuration consumed by the prompt assembler and the
/// generation pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct PostTypeConfig {
    pub label: &'static str,
    pub description: &'static str,
    pub format_rules: &'static [&'static str],
    pub max_length: u32,
    /// LLM sampling temperature for this type.
    pub temperature: f32,
    /// What the post is trying to accomplish rhetorically.
    pub strategic_intent: &'static str,
}

static STORY: PostTypeConfig = PostTypeConfig {
    label: "Story",
    description: "Personal narrative with a lesson",
    format_rules: &[
        "Start with a specific moment in time (date, place, or situation)",
        "Use first person throughout",
        "Include dialogue or inner thoughts where natural",
        "End with a concrete takeaway, not a platitude",
        "Keep paragraphs to 1-2 lines max for LinkedIn readability",
        "The hook (first line) must create tension or curiosity",
    ],
    max_length: 2800,
    temperature: 0.85,
    strategic_intent:
        "Deliver a hard-won lesson from personal experience — specific, costly, and real.",
};

static INSIGHT: PostTypeConfig = PostTypeConfig {
    label: "Insight",
    description: "Sharp observation from experience",
    format_rules: &[
        "Lead with the insight, not the backstory",
        "Support with one specific example from your experience",
        "Use short, declarative sentences",
        "Avoid hedging language (maybe, perhaps, I think)",
        "End with an actionable point or a reframe",
        "Keep under 1500 characters for punchiness",
    ],
    max_length: 1500,
    temperature: 0.70,
    strategic_intent:
        "Share a sharp observation that reframes how the reader thinks about a topic.",
};

static CONTRARIAN: PostTypeConfig = PostTypeConfig {
    label: "Contrarian Take",
    description: "Challenge conventional wisdom",
    format_rules: &[
        "Open with the conventional belief you are challenging",
        "State your opposing view clearly in the second paragraph",
        "Back it up with evidence from your own work, not theory",
        "Acknowledge the nuance - do not strawman the other side",
        "Close with what you do instead",
        "Tone: confident but not arrogant, direct but not dismissive",
    ],
    max_length: 2200,
    temperature: 0.80,
    strategic_intent:
        "Challenge conventional wisdom with a clear opposing view backed by experience or data.",
};

static LISTICLE: PostTypeConfig = PostTypeConfig {
    label: "Listicle",
    description: "Numbered list with substance",
    format_rules: &[
        "Start with a hook that frames why this list matters",
        "Each item must be specific and actionable, not generic advice",
        "Use odd numbers (5, 7, 9) - they perform better",
        "Each point gets 1-2 sentences max",
        "If the topic directly relates to your personal experience or your business, you may add brief personal context to 1-2 items. If the topic is external (market analysis, price movements, industry trends, technical how-to), keep all items factual. Do NOT inject personal anecdotes into external-topic listicles.",
        "End with a single sentence that ties it together",
    ],
    max_length: 2500,
    temperature: 0.60,
    strategic_intent:
        "Make a complex topic simple and actionable. Earn authority by explaining without jargon.",
};

static QUESTION: PostTypeConfig = PostTypeConfig {
    label: "Question",
    description: "Provocative question that sparks discussion",
    format_rules: &[
        "Open with 2-3 sentences of context that frame the tension",
        "Ask the question clearly in its own paragraph",
        "Share your own answer or lean briefly",
        "Keep the whole post under 800 characters",
        "The question should be genuinely debatable, not leading",
        "Do not answer your own question fully - leave room for engagement",
    ],
    max_length: 800,
    temperature: 0.75,
    strategic_intent: "Surface a genuine tension in the industry that sparks debate.",
};

static CASE_STUDY: PostTypeConfig = PostTypeConfig {
    label: "Case Study",
    description: "Before/after transformation with specifics",
    format_rules: &[
        "Start with the problem state - be specific about numbers or pain",
        "Describe what changed (the action taken)",
        "Show the result with specifics",
        "Structure: Situation > Action > Result > Lesson",
        "Include at least one real metric or timeframe",
        "End with the principle, not a pitch",
    ],
    max_length: 2800,
    temperature: 0.60,
    strategic_intent: "Show a before/after transformation with real specifics.",
};

/// Returns the static config for a post type. Total over the enum, so callers
/// that hold a `PostType` can never miss.
pub fn config_for(post_type: PostType) -> &'static PostTypeConfig {
    match post_type {
        PostType::Story => &STORY,
        PostType::Insight => &INSIGHT,
        PostType::Contrarian => &CONTRARIAN,
        PostType::Listicle => &LISTICLE,
        PostType::Question => &QUESTION,
        PostType::CaseStudy => &CASE_STUDY,
    }
}

/// Comma-separated list of valid type identifiers, used in client error messages.
pub fn valid_types() -> String {
    PostType::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
