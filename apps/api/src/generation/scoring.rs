//! Authenticity Scorer — rule-based detection of generic AI-sounding writing.
//!
//! Scoring starts at 100 and folds an ordered pipeline of independent rules
//! over the content; each triggered rule adjusts the score and appends exactly
//! one flag, in evaluation order. The scorer never fails: pathological input
//! degrades to score 0 with a diagnostic flag.
//!
//! Rule order is part of the contract. The question-hook rule must run before
//! the hook-formula rule (which suppresses its weak-hook penalty when a
//! question hook was already penalized), and the announcement rule reduces its
//! penalty when the same phrase already counted as a banned phrase.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::generation::post_types::PostType;
use crate::generation::topic::{classify_topic, TopicCategory};
use crate::profile::answers::VoiceAnswers;

/// Literal phrases that instantly signal AI-generated content.
/// Order matters: the first 30 are quoted verbatim in the system prompt.
pub static BANNED_PHRASES: &[&str] = &[
    "in today's fast-paced",
    "in today's rapidly evolving",
    "let's dive in",
    "let's dive deep",
    "without further ado",
    "game-changer",
    "game changer",
    "it's not just about",
    "at the end of the day",
    "here's the thing",
    "the truth is",
    "I'll be honest",
    "hot take:",
    "unpopular opinion:",
    "buckle up",
    "mind-blowing",
    "mind blowing",
    "groundbreaking",
    "revolutionary",
    "paradigm shift",
    "synergy",
    "leverage",
    "circle back",
    "move the needle",
    "low-hanging fruit",
    "think outside the box",
    "raise the bar",
    "deep dive",
    "unpack this",
    "let me unpack",
    "this is huge",
    "I'm thrilled to announce",
    "thrilled to share",
    "excited to announce",
    "humbled and honored",
    "incredibly grateful",
    "couldn't be more proud",
    "it goes without saying",
    "needless to say",
    "in a nutshell",
    "the bottom line is",
    "food for thought",
    "stay tuned",
    "agree?",
    "thoughts?",
    "am I wrong?",
    "let that sink in",
    "read that again",
    "I said what I said",
    "full stop",
    "period.",
    "iykyk",
    "just saying",
    "not gonna lie",
    "here's why this matters",
    "and here's the kicker",
    "plot twist",
    "spoiler alert",
    "pro tip",
    "hack:",
    "cheat code",
    "secret sauce",
    "the real mvp",
    "unlock your potential",
    "level up",
    "crush it",
    "killing it",
    "smash that",
    "drop a comment",
    "share if you agree",
    "repost if this resonates",
    "tag someone who needs this",
    "follow me for more",
    "if you found this helpful",
    "save this for later",
    "bookmark this",
];

static BANNED_LOWER: Lazy<Vec<String>> =
    Lazy::new(|| BANNED_PHRASES.iter().map(|p| p.to_lowercase()).collect());

/// Throat-clearing openers that mark a generic first line.
static GENERIC_OPENERS: &[&str] = &[
    "in today's",
    "in the world of",
    "as a society",
    "when it comes to",
    "there's no denying",
    "we all know that",
    "it's no secret that",
    "in an era of",
    "in this day and age",
    "as we navigate",
];

/// Engagement-bait calls to action checked against the tail of the post.
static ENGAGEMENT_BAIT: &[&str] = &[
    "comment below",
    "share this",
    "repost if you agree",
    "tag someone",
    "like if you",
    "follow me for",
    "drop a comment",
    "drop a like",
    "drop a follow",
    "let me know in the comments",
];

/// Low-engagement announcement openers, matched with word boundaries so that
/// e.g. "proud to" does not match "proud together".
static ANNOUNCEMENT_PHRASES: &[&str] = &[
    "excited to announce",
    "thrilled to share",
    "proud to",
    "happy to announce",
    "big news",
    "i'm pleased to",
    "im pleased to",
];

static ANNOUNCEMENT_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    ANNOUNCEMENT_PHRASES
        .iter()
        .map(|p| Regex::new(&format!(r"\b{}\b", regex::escape(p))).expect("announcement pattern"))
        .collect()
});

static PASSIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:is|are|was|were|be|been|being)\s+(?:being\s+)?\w+ed\b").unwrap()
});

static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());

static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\u{1F600}-\u{1F64F}\u{1F300}-\u{1F5FF}\u{1F680}-\u{1F6FF}\u{1F1E0}-\u{1F1FF}\u{2600}-\u{26FF}\u{2700}-\u{27BF}]",
    )
    .unwrap()
});

/// Percentages, dollar amounts, 4-digit years, multipliers, and counted units.
static SPECIFICITY_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+%",
        r"\$[\d,]+",
        r"\b\d{4}\b",
        r"(?i)\b\d+\s*(?:x|k|m|million|billion)\b",
        r"(?i)\b\d+\s*(?:hours?|days?|weeks?|months?|years?|people|employees|customers|users|clients)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("specificity pattern"))
    .collect()
});

static WE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bwe\b").unwrap());
static I_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bi\b").unwrap());

static HEDGING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:i think|maybe|perhaps|might|could be|possibly)\b").unwrap());
static CONTRARIAN_HOOK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:stop|don't|dont|wrong|myth|nobody|unpopular)\b").unwrap());
static STRONG_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:built|lost|quit|fired|sold|learned|failed|shipped|launched|earned|spent|wasted|doubled|tripled)\b",
    )
    .unwrap()
});
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

/// The scorer's output: an integer score clamped to [0, 100] and the flags
/// for every rule that fired, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub flags: Vec<String>,
}

/// Scores generated content for authenticity. Deterministic and infallible:
/// identical inputs always produce an identical result, and the worst case
/// for bad input is score 0 with an explanatory flag.
pub fn score_authenticity(
    content: &str,
    answers: Option<&VoiceAnswers>,
    post_type: Option<PostType>,
    topic: Option<&str>,
) -> ScoreResult {
    if content.trim().is_empty() {
        return ScoreResult {
            score: 0,
            flags: vec!["No content to score".to_string()],
        };
    }

    let mut score: i32 = 100;
    let mut flags: Vec<String> = Vec::new();
    let lower = content.to_lowercase();

    // Rule 1: banned phrases, -3 per distinct phrase present
    let banned_count = BANNED_LOWER.iter().filter(|p| lower.contains(p.as_str())).count();
    if banned_count > 0 {
        score -= 3 * banned_count as i32;
        let plural = if banned_count > 1 { "s" } else { "" };
        flags.push(format!("{banned_count} AI-slop phrase{plural} detected"));
    }

    // Rule 2: passive voice ratio above 30%
    let sentences: Vec<&str> = content
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .collect();
    let passive_count = sentences.iter().filter(|s| PASSIVE_RE.is_match(s)).count();
    if !sentences.is_empty() && passive_count as f64 / sentences.len() as f64 > 0.3 {
        score -= 5;
        flags.push("Too much passive voice".to_string());
    }

    // Rule 3: mean sentence length above 20 words
    let word_count = content.split_whitespace().count();
    if !sentences.is_empty() && word_count as f64 / sentences.len() as f64 > 20.0 {
        score -= 5;
        flags.push("Sentences too long on average".to_string());
    }

    // Rule 4: generic throat-clearing opener
    let first_line = content.split('\n').next().unwrap_or("");
    let first_line_lower = first_line.to_lowercase();
    let first_line_normalized = strip_apostrophes(&first_line_lower);
    for opener in GENERIC_OPENERS {
        let opener_normalized = strip_apostrophes(opener);
        if first_line_lower.starts_with(opener)
            || first_line_normalized.starts_with(&opener_normalized)
        {
            score -= 10;
            flags.push("Generic opener detected".to_string());
            break;
        }
    }

    // Rule 5: hashtag/emoji overload
    let hashtag_count = HASHTAG_RE.find_iter(content).count();
    let emoji_count = EMOJI_RE.find_iter(content).count();
    if hashtag_count > 3 || emoji_count > 5 {
        score -= 5;
        flags.push(
            if hashtag_count > 3 {
                "Too many hashtags"
            } else {
                "Too many emojis"
            }
            .to_string(),
        );
    }

    // Rules 6 and 7 need profile data
    if let Some(answers) = answers {
        // Rule 6: founder-content usage, bonus or penalty by topic category
        let used_founder_content = answers.founder_signals().iter().any(|signal| {
            let signal_lower = signal.to_lowercase();
            let signal_words: Vec<&str> = signal_lower
                .split_whitespace()
                .filter(|w| w.chars().count() > 4)
                .collect();
            if signal_words.is_empty() {
                return false;
            }
            let match_count = signal_words.iter().filter(|w| lower.contains(**w)).count();
            match_count as f64 / signal_words.len() as f64 > 0.3
        });

        let topic_category = match (post_type, topic) {
            (Some(pt), Some(t)) => classify_topic(t, pt),
            _ => TopicCategory::Personal,
        };

        if used_founder_content && topic_category == TopicCategory::Personal {
            score += 5;
            flags.push("Uses founder's real experience".to_string());
        } else if used_founder_content && topic_category == TopicCategory::External {
            score -= 5;
            flags.push("Personal anecdotes injected into external-topic post".to_string());
        }

        // Rule 7: loose tone alignment - short paragraphs and varied sentences
        if !answers.voice.is_empty() {
            let tone_words = answers
                .voice
                .to_lowercase()
                .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
                .filter(|w| w.chars().count() > 3)
                .count();
            let has_short_paragraphs = content.split("\n\n").count() >= 3;
            let has_varied_length = sentences.len() > 2;
            if has_short_paragraphs && has_varied_length && tone_words > 0 {
                score += 3;
                flags.push("Tone alignment detected".to_string());
            }
        }
    }

    // Rule 8: hook longer than 160 characters
    if first_line.chars().count() > 160 {
        score -= 5;
        flags.push("Hook too long".to_string());
    }

    // Rule 9: question hooks open weak
    if first_line.trim_end().ends_with('?') {
        score -= 5;
        flags.push("Question hook (weak open)".to_string());
    }

    // Rule 10: engagement-bait CTA in the tail of the post
    let tail = char_suffix(&lower, 200);
    for bait in ENGAGEMENT_BAIT {
        if tail.contains(bait) {
            score -= 5;
            flags.push("Engagement bait CTA".to_string());
            break;
        }
    }

    // Rule 11: specificity signals across the whole text
    let specificity_hits: usize = SPECIFICITY_RES
        .iter()
        .map(|re| re.find_iter(content).count())
        .sum();
    if specificity_hits == 0 {
        score -= 5;
        flags.push("Lacks specificity".to_string());
    } else if specificity_hits >= 3 {
        score += 3;
        flags.push("Strong specificity".to_string());
    }

    // Rule 12: announcement pattern in the first 100 characters.
    // Reduced penalty when the phrase already counted as a banned phrase;
    // the two lists overlap only approximately, so the containment check is
    // approximate too and kept that way on purpose.
    let first_100 = char_prefix(&lower, 100);
    for (phrase, re) in ANNOUNCEMENT_PHRASES.iter().zip(ANNOUNCEMENT_RES.iter()) {
        if re.is_match(first_100) {
            let already_banned = BANNED_LOWER
                .iter()
                .any(|bp| bp == phrase || phrase.contains(bp.as_str()));
            score -= if already_banned && banned_count > 0 { 7 } else { 10 };
            flags.push("Announcement pattern (low engagement)".to_string());
            break;
        }
    }

    // Rule 13: corporate "we" outweighing first-person "I"
    let we_count = WE_RE.find_iter(&lower).count();
    let i_count = I_RE.find_iter(&lower).count();
    if we_count > i_count {
        score -= 5;
        flags.push("Corporate 'we' voice".to_string());
    }

    // Rule 14: closing-question quality
    let full_sentences = split_sentences_keep_ends(content);
    if let Some(last) = full_sentences.last() {
        let last = last.trim();
        if last.ends_with('?') {
            let last_lower = last.to_lowercase();
            let is_generic = last.split_whitespace().count() < 5
                || last_lower.contains("what do you think")
                || last_lower.contains("agree?")
                || last_lower == "thoughts?";
            if is_generic {
                score -= 3;
                flags.push("Weak generic closing question".to_string());
            } else {
                score += 3;
                flags.push("Strong closing question".to_string());
            }
        }
    }

    // Rule 15: wall of text
    let char_len = content.chars().count();
    let paragraph_breaks = content.matches("\n\n").count();
    if char_len > 500 && paragraph_breaks < 3 {
        score -= 5;
        flags.push("Wall of text - needs more breaks".to_string());
    }

    // Rule 16: too short to deliver value
    if char_len < 150 {
        score -= 5;
        flags.push("Post too short".to_string());
    }

    // Rule 17: hook formula strength. Question hooks already took their
    // penalty in rule 9 and are not penalized again here.
    let has_number = DIGIT_RE.is_match(first_line);
    let has_contrarian_word = CONTRARIAN_HOOK_RE.is_match(first_line);
    let has_bold_statement = !HEDGING_RE.is_match(first_line)
        && first_line.chars().count() > 10
        && first_line.trim().ends_with(['.', '!']);
    let has_strong_verb = STRONG_VERB_RE.is_match(first_line);

    if has_number || has_contrarian_word || has_bold_statement {
        score += 5;
        flags.push("Strong hook formula".to_string());
    } else if !has_strong_verb
        && !has_number
        && !flags.iter().any(|f| f == "Question hook (weak open)")
    {
        score -= 5;
        flags.push("Weak hook - no formula detected".to_string());
    }

    ScoreResult {
        score: score.clamp(0, 100) as u32,
        flags,
    }
}

fn strip_apostrophes(s: &str) -> String {
    s.chars().filter(|c| *c != '\u{2019}' && *c != '\'').collect()
}

/// First `n` characters of `s` as a slice.
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Last `n` characters of `s` as a slice.
fn char_suffix(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    match s.char_indices().nth(count - n) {
        Some((i, _)) => &s[i..],
        None => s,
    }
}

/// Splits text into sentences keeping their terminators, cutting after a
/// `.`/`!`/`?` followed by whitespace.
fn split_sentences_keep_ends(content: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev_was_end = false;
    for (i, c) in content.char_indices() {
        if prev_was_end && c.is_whitespace() {
            sentences.push(&content[start..i]);
            start = i;
        }
        prev_was_end = matches!(c, '.' | '!' | '?');
    }
    sentences.push(&content[start..]);
    sentences.retain(|s| !s.trim().is_empty());
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answers(v: serde_json::Value) -> VoiceAnswers {
        VoiceAnswers::from_value(&v)
    }

    /// A deliberately clean ~400 char first-person story: number-led hook,
    /// three specificity hits, three paragraph breaks, specific closing question.
    const STRONG_POST: &str = "In 2021, I lost $40,000 learning this the hard way.\n\n\
        A client ghosted after 11 days of silence, and my pipeline had nothing behind it. \
        I had spent the quarter polishing decks instead of booking calls.\n\n\
        Now I keep two rules: never celebrate a verbal yes, and never stop prospecting, \
        even in a record month.\n\n\
        Which rule would have saved your worst quarter?";

    #[test]
    fn test_empty_content_scores_zero_with_single_flag() {
        for content in ["", "   ", "\n\n"] {
            let result = score_authenticity(content, None, None, None);
            assert_eq!(result.score, 0);
            assert_eq!(result.flags, vec!["No content to score".to_string()]);
        }
    }

    #[test]
    fn test_scorer_is_deterministic() {
        let profile = answers(json!({"voice": "blunt, dry", "lesson": "hired too fast"}));
        let first = score_authenticity(STRONG_POST, Some(&profile), Some(PostType::Story), Some("cash flow"));
        for _ in 0..5 {
            let again = score_authenticity(
                STRONG_POST,
                Some(&profile),
                Some(PostType::Story),
                Some("cash flow"),
            );
            assert_eq!(again, first, "score and flag order must be reproducible");
        }
    }

    #[test]
    fn test_score_always_within_bounds() {
        // Every banned phrase at once drives the raw score far below zero
        let sludge = BANNED_PHRASES.join(". ");
        let result = score_authenticity(&sludge, None, None, None);
        assert_eq!(result.score, 0, "clamped at the floor");

        let result = score_authenticity(STRONG_POST, None, None, None);
        assert!(result.score <= 100, "clamped at the ceiling");
    }

    #[test]
    fn test_banned_phrases_counted_per_distinct_phrase() {
        let content = "This is a game-changer. Let's dive in. Time for a deep dive into synergy.";
        let result = score_authenticity(content, None, None, None);
        assert!(result
            .flags
            .iter()
            .any(|f| f == "4 AI-slop phrases detected"));
    }

    #[test]
    fn test_banned_phrase_monotonicity() {
        let base = "I rebuilt our onboarding flow in 2023 after 12 customers churned in 30 days.\n\n\
            The fix took one afternoon.\n\n\
            The lesson took a year to sink in.\n\nWhat took you too long to fix?";
        let with_slop = format!("{base}\n\nStay tuned.");
        let clean = score_authenticity(base, None, None, None);
        let slopped = score_authenticity(&with_slop, None, None, None);
        assert!(
            slopped.score <= clean.score,
            "adding a banned phrase must never raise the score ({} -> {})",
            clean.score,
            slopped.score
        );
    }

    #[test]
    fn test_passive_voice_penalized() {
        let content = "The deal was closed by the team. The report was finished by Friday. \
            The launch was delayed by legal.";
        let result = score_authenticity(content, None, None, None);
        assert!(result.flags.iter().any(|f| f == "Too much passive voice"));
    }

    #[test]
    fn test_long_sentences_penalized() {
        let content = "This single sentence keeps going and going with clause after clause \
            because the writer never learned that a reader needs a place to breathe and \
            simply will not stop to let anyone rest at all here";
        let result = score_authenticity(content, None, None, None);
        assert!(result
            .flags
            .iter()
            .any(|f| f == "Sentences too long on average"));
    }

    #[test]
    fn test_generic_opener_penalized_with_apostrophe_normalization() {
        // Curly apostrophe must still match "in today's"
        let content = "In today\u{2019}s landscape, everything changed for founders everywhere.";
        let result = score_authenticity(content, None, None, None);
        assert!(result.flags.iter().any(|f| f == "Generic opener detected"));
    }

    #[test]
    fn test_hashtag_overload_flagged() {
        let content = "I shipped the thing.\n\n#startup #hustle #growth #mindset";
        let result = score_authenticity(content, None, None, None);
        assert!(result.flags.iter().any(|f| f == "Too many hashtags"));
    }

    #[test]
    fn test_founder_content_bonus_on_personal_topic() {
        let profile = answers(json!({
            "lesson": "hired three senior engineers before product-market fit"
        }));
        let content = "I hired three senior engineers before product-market fit.\n\n\
            It nearly sank us. Payroll tripled while revenue stayed flat for 6 months.\n\n\
            Stage-appropriate hiring beats impressive hiring.\n\n\
            What hire do you regret making too early?";
        let result = score_authenticity(content, Some(&profile), Some(PostType::Insight), Some("my worst hiring mistake"));
        assert!(result
            .flags
            .iter()
            .any(|f| f == "Uses founder's real experience"));
    }

    #[test]
    fn test_founder_content_penalized_on_external_topic() {
        let profile = answers(json!({
            "lesson": "hired three senior engineers before product-market fit"
        }));
        let content = "Bitcoin tested new highs this week.\n\n\
            I hired three senior engineers before product-market fit, which taught me patience.\n\n\
            Markets reward the same patience.\n\n\
            Where is your conviction strongest right now?";
        let result = score_authenticity(
            content,
            Some(&profile),
            Some(PostType::Insight),
            Some("bitcoin price analysis"),
        );
        assert!(result
            .flags
            .iter()
            .any(|f| f == "Personal anecdotes injected into external-topic post"));
    }

    #[test]
    fn test_tone_alignment_bonus_requires_structure_and_voice() {
        let profile = answers(json!({"voice": "blunt, direct, dry"}));
        let structured = "First point lands hard.\n\nSecond point lands harder. It builds.\n\nThird point closes it.";
        let result = score_authenticity(structured, Some(&profile), None, None);
        assert!(result.flags.iter().any(|f| f == "Tone alignment detected"));

        let unstructured = "One paragraph only. Two sentences here.";
        let result = score_authenticity(unstructured, Some(&profile), None, None);
        assert!(!result.flags.iter().any(|f| f == "Tone alignment detected"));
    }

    #[test]
    fn test_overlong_hook_penalized() {
        let hook = "x".repeat(170);
        let content = format!("{hook}\n\nShort follow-up paragraph.");
        let result = score_authenticity(&content, None, None, None);
        assert!(result.flags.iter().any(|f| f == "Hook too long"));
    }

    #[test]
    fn test_question_hook_penalized_once_not_twice() {
        let content = "Have you ever wondered about pricing?\n\n\
            Most founders guess. Some copy competitors. A few actually test.\n\n\
            Testing wins every time.";
        let result = score_authenticity(content, None, None, None);
        assert!(result
            .flags
            .iter()
            .any(|f| f == "Question hook (weak open)"));
        // Rule 17 must not stack a weak-hook penalty on top
        assert!(!result
            .flags
            .iter()
            .any(|f| f == "Weak hook - no formula detected"));
    }

    #[test]
    fn test_engagement_bait_in_tail_flagged() {
        let content = "I doubled our close rate in 90 days by changing one question.\n\n\
            Instead of asking for budget, I asked what doing nothing costs.\n\n\
            Drop a comment if you want the full script.";
        let result = score_authenticity(content, None, None, None);
        assert!(result.flags.iter().any(|f| f == "Engagement bait CTA"));
    }

    #[test]
    fn test_specificity_scoring_tiers() {
        let vague = "Things improved a lot after we changed our approach to selling widgets.";
        let result = score_authenticity(vague, None, None, None);
        assert!(result.flags.iter().any(|f| f == "Lacks specificity"));

        let result = score_authenticity(STRONG_POST, None, None, None);
        assert!(result.flags.iter().any(|f| f == "Strong specificity"));
    }

    #[test]
    fn test_announcement_pattern_word_boundary() {
        // "proud together" must not trip the "proud to" announcement check
        let content = "We stood proud together after the launch that took 9 months and 4 people.\n\n\
            I still remember the first bug report arriving within minutes.\n\n\
            Shipping beats planning.\n\nWhat did your first launch teach you?";
        let result = score_authenticity(content, None, None, None);
        assert!(!result
            .flags
            .iter()
            .any(|f| f == "Announcement pattern (low engagement)"));
    }

    #[test]
    fn test_announcement_penalty_reduced_when_phrase_already_banned() {
        // "excited to announce" is both a banned phrase and an announcement
        // pattern; the announcement penalty drops from 10 to 7.
        let content = "Excited to announce our new feature. We are shipping it to everyone.";
        let result = score_authenticity(content, None, None, None);
        assert!(result
            .flags
            .iter()
            .any(|f| f == "Announcement pattern (low engagement)"));
        assert!(result.flags.iter().any(|f| f == "1 AI-slop phrase detected"));
        // -3 banned, -7 announcement, -5 corporate we, -5 no specificity,
        // -5 too short, +5 bold hook = 80
        assert_eq!(result.score, 80);
    }

    #[test]
    fn test_corporate_we_voice_flagged() {
        let content = "Excited to announce our new feature. We are shipping it to everyone.";
        let result = score_authenticity(content, None, None, None);
        assert!(result.flags.iter().any(|f| f == "Corporate 'we' voice"));
        assert!(result.score < 100);
    }

    #[test]
    fn test_weak_generic_closing_question() {
        let content = "I raised prices 40% in 2024 and lost zero customers over 3 months.\n\n\
            The fear was never about the market.\n\nIt was about me.\n\nThoughts?";
        let result = score_authenticity(content, None, None, None);
        assert!(result
            .flags
            .iter()
            .any(|f| f == "Weak generic closing question"));
    }

    #[test]
    fn test_strong_closing_question_rewarded() {
        let result = score_authenticity(STRONG_POST, None, None, None);
        assert!(result.flags.iter().any(|f| f == "Strong closing question"));
    }

    #[test]
    fn test_wall_of_text_flagged() {
        let content = "I learned pricing the hard way in 2019. ".repeat(20);
        let result = score_authenticity(content.trim(), None, None, None);
        assert!(result
            .flags
            .iter()
            .any(|f| f == "Wall of text - needs more breaks"));
    }

    #[test]
    fn test_short_post_flagged() {
        let result = score_authenticity("Tiny post about nothing much at all.", None, None, None);
        assert!(result.flags.iter().any(|f| f == "Post too short"));
    }

    #[test]
    fn test_hook_formula_number_rewarded() {
        let result = score_authenticity(STRONG_POST, None, None, None);
        assert!(result.flags.iter().any(|f| f == "Strong hook formula"));
    }

    #[test]
    fn test_hedged_hook_with_no_formula_penalized() {
        let content = "I think maybe our approach to selling could be better\n\n\
            There are many considerations for any growing business to weigh carefully.\n\n\
            We should all reflect on our own approach going forward.";
        let result = score_authenticity(content, None, None, None);
        assert!(result
            .flags
            .iter()
            .any(|f| f == "Weak hook - no formula detected"));
    }

    #[test]
    fn test_strong_post_clamps_to_100_with_no_negative_flags() {
        let result = score_authenticity(STRONG_POST, None, None, None);
        assert_eq!(result.score, 100, "flags: {:?}", result.flags);
        // Only bonus flags should be present
        for flag in &result.flags {
            assert!(
                matches!(
                    flag.as_str(),
                    "Strong specificity" | "Strong closing question" | "Strong hook formula"
                ),
                "unexpected negative flag: {flag}"
            );
        }
    }

    #[test]
    fn test_flags_follow_rule_evaluation_order() {
        let content = "Let's dive in because in an era of synergy this will be a game-changer for sure.\n\n\
            Thoughts?";
        let result = score_authenticity(content, None, None, None);
        let slop_pos = result
            .flags
            .iter()
            .position(|f| f.contains("AI-slop"))
            .expect("banned-phrase flag present");
        let closing_pos = result
            .flags
            .iter()
            .position(|f| f == "Weak generic closing question")
            .expect("closing-question flag present");
        assert!(slop_pos < closing_pos, "banned phrases evaluate before closing question");
    }

    #[test]
    fn test_scorer_survives_pathological_input() {
        for content in [
            "????????",
            "\u{1F600}\u{1F600}\u{1F600}\u{1F600}\u{1F600}\u{1F600}\u{1F600}",
            "....!!..??",
            "#a #b #c #d #e",
            "\u{2019}\u{2019}\u{2019}",
        ] {
            let result = score_authenticity(content, None, None, None);
            assert!(result.score <= 100);
        }
    }

    #[test]
    fn test_emoji_overload_flagged() {
        let content = "Big day \u{1F680}\u{1F680}\u{1F680}\u{1F389}\u{1F389}\u{1F389} for the team.";
        let result = score_authenticity(content, None, None, None);
        assert!(result.flags.iter().any(|f| f == "Too many emojis"));
    }

    #[test]
    fn test_split_sentences_keep_ends() {
        let sentences = split_sentences_keep_ends("First one. Second one! Third one?");
        assert_eq!(sentences.len(), 3);
        assert!(sentences[0].ends_with('.'));
        assert!(sentences[2].trim().ends_with('?'));
    }

    #[test]
    fn test_char_prefix_and_suffix_respect_boundaries() {
        let s = "a\u{1F600}b\u{1F600}c";
        assert_eq!(char_prefix(s, 3), "a\u{1F600}b");
        assert_eq!(char_suffix(s, 2), "\u{1F600}c");
        assert_eq!(char_prefix(s, 50), s);
        assert_eq!(char_suffix(s, 50), s);
    }
}
