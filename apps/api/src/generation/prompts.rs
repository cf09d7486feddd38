//! Prompt Assembler — builds the system and user prompts sent to the LLM.
//!
//! Both builders are pure functions of their inputs: no I/O, no randomness.
//! The system prompt carries the persona (the founder's resolved interview
//! answers) plus the playbook-driven writing doctrine; the user prompt carries
//! the specific writing task for one post type and topic.

use serde::Serialize;

use crate::errors::AppError;
use crate::generation::playbook::Playbook;
use crate::generation::post_types::{config_for, PostType};
use crate::generation::scoring::BANNED_PHRASES;
use crate::generation::topic::{classify_topic, TopicCategory};
use crate::profile::answers::VoiceAnswers;

/// How many banned phrases are quoted verbatim in the system prompt.
const BANNED_IN_PROMPT: usize = 30;

/// The pair of prompts handed to the LLM transport verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct BuiltPrompts {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Library boundary for callers holding a raw post-type identifier.
/// Fails with `UnknownPostType` for identifiers outside the rule table and
/// `InvalidTopic` for an empty topic; never falls back to a default type.
pub fn build_prompts(
    answers: &VoiceAnswers,
    post_type: &str,
    topic: &str,
    additional_context: &str,
    playbook: &Playbook,
) -> Result<BuiltPrompts, AppError> {
    let post_type: PostType = post_type.parse()?;
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(AppError::InvalidTopic("Topic is required.".to_string()));
    }

    Ok(BuiltPrompts {
        system_prompt: build_system_prompt(answers, playbook),
        user_prompt: build_user_prompt(post_type, topic, additional_context, playbook),
    })
}

/// Renders the persona-instruction document for one founder.
pub fn build_system_prompt(answers: &VoiceAnswers, playbook: &Playbook) -> String {
    let banned_list = BANNED_PHRASES[..BANNED_IN_PROMPT].join("\", \"");

    let name = or_default(&answers.name, "Unknown");
    let identity = or_default(&answers.identity, "Not provided");
    let contrarian = or_default(&answers.contrarian, "Not provided");
    let lesson = or_default(&answers.lesson, "Not provided");
    let audience = or_default(&answers.audience, "Not provided");
    let desired_outcome = or_default(&answers.desired_outcome, "Not provided");
    let voice = or_default(&answers.voice, "Not provided");
    let pillars = or_default(&answers.pillars, "Not provided");
    let offlimits = or_default(&answers.offlimits, "None");
    let content_bank = or_default(&answers.content_bank, "Not provided");

    let style_rules = writing_style_section(playbook, voice);
    let hook_guidance = hook_guidance_section(playbook);
    let miss_avoidance = miss_avoidance_section(playbook);

    format!(
        r#"You are a ghostwriter for a specific person. Your job is to write LinkedIn posts that sound exactly like them - not like an AI, not like a copywriter, not like a LinkedIn influencer. Like THEM.

## WHO YOU ARE WRITING FOR

Name: {name}

### Identity — Who They Are & How They Got Here
{identity}

### Their Contrarian Belief
{contrarian}

### Hard-Won Lesson (Costs Them Real Time/Money/Pain)
{lesson}

### Their Target Audience — Who, What Stage, What's Killing Them
{audience}

### Desired Outcome For Readers
{desired_outcome}

### Voice — How They Sound & Who They Admire
{voice}

### Their Content Pillars
{pillars}

### Off-Limits Topics
{offlimits}

### Content Bank — Wins, Hot Takes, FAQs
{content_bank}

## WRITING STYLE

{style_rules}

{hook_guidance}

## ABSOLUTE BANS

Never use any of these phrases or close variations: "{banned_list}"

These phrases are the hallmark of AI-generated content. If you catch yourself writing one, delete it and write something specific to this person instead.

{miss_avoidance}

## FORMAT

- LinkedIn text only. No markdown formatting, no headers, no bold, no bullet points with dashes.
- Line breaks between paragraphs (double newline).
- Keep posts within the character limit specified in the user prompt.
- Do not include a post title or label.
- Output ONLY the post text. Nothing else. No preamble, no "here's your post", no sign-off."#
    )
}

/// Renders the task description for one post type and topic.
pub fn build_user_prompt(
    post_type: PostType,
    topic: &str,
    additional_context: &str,
    playbook: &Playbook,
) -> String {
    let config = config_for(post_type);
    let topic_category = classify_topic(topic, post_type);

    let format_instructions = config
        .format_rules
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {r}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    let category_line = match topic_category {
        TopicCategory::External => {
            "EXTERNAL (market/industry/technical — do not inject personal anecdotes)"
        }
        TopicCategory::Personal => "PERSONAL (your own experience — use profile data freely)",
    };

    let mut prompt = format!(
        r#"Write a LinkedIn post.

Post type: {label} - {description}
Strategic intent: {intent}
Topic: {topic}
Topic category: {category_line}
Max length: {max_length} characters

Format rules for this post type:
{format_instructions}"#,
        label = config.label,
        description = config.description,
        intent = config.strategic_intent,
        max_length = config.max_length,
    );

    if post_type.is_narrative() {
        prompt.push_str("\n\n");
        prompt.push_str(&narrative_section(playbook));
    }

    let additional_context = additional_context.trim();
    if !additional_context.is_empty() {
        prompt.push_str(&format!(
            "\n\nAdditional context from the user:\n{additional_context}"
        ));
    }

    prompt.push_str(
        "\n\nRemember: output ONLY the post text. No labels, no commentary, no quotation marks around it.",
    );

    prompt
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn writing_style_section(playbook: &Playbook, voice: &str) -> String {
    let mut lines: Vec<String> = playbook
        .writing_style_rules
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {r}", i + 1))
        .collect();
    let n = playbook.writing_style_rules.len();
    lines.push(format!(
        "{}. Use their actual stories, beliefs, and experiences as raw material. Reference specifics from their interview data above.",
        n + 1
    ));
    lines.push(format!(
        "{}. Write in THEIR voice, not yours. Match the tone described in their voice profile: {voice}.",
        n + 2
    ));
    lines.join("\n")
}

fn hook_guidance_section(playbook: &Playbook) -> String {
    let formulas = playbook
        .hook_formulas
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let example = f.examples.first().map(String::as_str).unwrap_or("");
            format!("{}. {} — {} E.g. \"{example}\"", i + 1, f.name, f.description)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let rules = playbook
        .hook_rules
        .iter()
        .map(|r| format!("- {r}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"## HOOK FORMULAS

Your first line decides everything. Use one of these proven patterns:

{formulas}

Hook rules:
{rules}"#
    )
}

fn miss_avoidance_section(playbook: &Playbook) -> String {
    let misses = playbook
        .misses
        .iter()
        .map(|m| format!("- {}: {}", m.pattern, m.why_it_fails))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"## POST TYPES TO AVOID

Never produce content that falls into these patterns:
{misses}"#
    )
}

/// Four-phase arc rendered as implicit structure; only the first sentence of
/// each phase description is quoted.
fn narrative_section(playbook: &Playbook) -> String {
    let phases = playbook
        .narrative_phases
        .iter()
        .map(|p| {
            let first_sentence = p.description.split('.').next().unwrap_or("").trim();
            format!("- {}: {first_sentence}.", p.name)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Narrative structure:
Follow this structure without labeling the sections:
{phases}"#
    )
}
