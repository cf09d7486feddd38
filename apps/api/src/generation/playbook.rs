//! The writing playbook: hook formulas, style rules, anti-patterns, and the
//! four-phase narrative arc used by story and case study posts.
//!
//! A playbook can be loaded from a JSON file at startup (PLAYBOOK_PATH);
//! when none is supplied the built-in default is used. Prompt assembly only
//! ever sees the resolved struct.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A proven opening pattern with a worked example.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookFormula {
    pub name: String,
    pub description: String,
    pub examples: Vec<String>,
}

/// A post anti-pattern and the reason it fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissPattern {
    #[serde(rename = "type")]
    pub pattern: String,
    pub why_it_fails: String,
}

/// One phase of the narrative arc (situation, turning point, insight, lesson).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativePhase {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playbook {
    pub hook_formulas: Vec<HookFormula>,
    pub hook_rules: Vec<String>,
    pub writing_style_rules: Vec<String>,
    pub misses: Vec<MissPattern>,
    pub narrative_phases: Vec<NarrativePhase>,
}

impl Playbook {
    /// Loads a playbook from a JSON file, or returns the built-in default
    /// when no path is configured.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read playbook file '{p}'"))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to parse playbook file '{p}'"))
            }
            None => Ok(Self::default()),
        }
    }
}

impl Default for Playbook {
    fn default() -> Self {
        fn s(v: &str) -> String {
            v.to_string()
        }

        Playbook {
            hook_formulas: vec![
                HookFormula {
                    name: s("The Number Drop"),
                    description: s("Open with a specific number that carries the story's weight."),
                    examples: vec![s(
                        "I lost $40,000 in 11 days. Here's what it taught me about cash flow.",
                    )],
                },
                HookFormula {
                    name: s("The Contrarian Line"),
                    description: s("State the opposite of what your industry believes, flatly."),
                    examples: vec![s(
                        "Most startup advice is written by people who never ran out of money.",
                    )],
                },
                HookFormula {
                    name: s("The Confession"),
                    description: s("Admit the mistake everyone else hides."),
                    examples: vec![s(
                        "I ignored my first churned customer. It cost me the next twenty.",
                    )],
                },
                HookFormula {
                    name: s("The Before/After"),
                    description: s("Compress a transformation into one line."),
                    examples: vec![s(
                        "18 months ago I was cold-calling. Last week a client cold-called me.",
                    )],
                },
                HookFormula {
                    name: s("The Quiet Observation"),
                    description: s("Say the thing everyone notices but nobody posts."),
                    examples: vec![s("The loudest founders I know have the quietest revenue.")],
                },
            ],
            hook_rules: vec![
                s("One line. If it wraps past two lines on mobile, cut it."),
                s("No questions in the hook. Questions let the reader off the hook."),
                s("Specific beats clever. A number beats an adjective."),
                s("Never open with a definition or a dictionary quote."),
                s("The hook makes a promise. The rest of the post must pay it off."),
            ],
            writing_style_rules: vec![
                s("Write like you talk. Read it out loud; if you stumble, rewrite it."),
                s("Short paragraphs. One or two lines each."),
                s("Active voice. 'I shipped it', never 'it was shipped'."),
                s("Specific over generic: name the number, the date, the cost."),
                s("No hashtags and no emojis unless the user explicitly asks for them."),
                s("The first line must create tension or curiosity. It decides whether anyone reads line two."),
                s("Never close with engagement bait. End on the idea, not a beg."),
            ],
            misses: vec![
                MissPattern {
                    pattern: s("The humble brag"),
                    why_it_fails: s(
                        "Readers smell the flex under the false modesty and punish it.",
                    ),
                },
                MissPattern {
                    pattern: s("The engagement-bait closer"),
                    why_it_fails: s(
                        "Asks for interaction it never earned. The algorithm boost is not worth the trust cost.",
                    ),
                },
                MissPattern {
                    pattern: s("The recycled platitude"),
                    why_it_fails: s(
                        "Says nothing the reader has not already seen fifty times this week.",
                    ),
                },
                MissPattern {
                    pattern: s("The pitch in disguise"),
                    why_it_fails: s(
                        "Two paragraphs of value, then a sales hook. Readers feel baited and stop trusting the next post.",
                    ),
                },
                MissPattern {
                    pattern: s("The vague inspiration post"),
                    why_it_fails: s(
                        "Motivation without a single concrete detail is noise in the feed.",
                    ),
                },
            ],
            narrative_phases: vec![
                NarrativePhase {
                    name: s("Situation"),
                    description: s(
                        "Drop the reader into a specific moment with tension. Date, place, stakes.",
                    ),
                },
                NarrativePhase {
                    name: s("Turning point"),
                    description: s(
                        "The call, the email, the number on the screen that changed direction.",
                    ),
                },
                NarrativePhase {
                    name: s("Insight"),
                    description: s(
                        "What you could see afterward that you could not see before.",
                    ),
                },
                NarrativePhase {
                    name: s("Lesson"),
                    description: s(
                        "The transferable takeaway, stated plainly and without a platitude.",
                    ),
                },
            ],
        }
    }
}
