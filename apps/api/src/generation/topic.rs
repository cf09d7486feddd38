//! Topic Classifier — decides whether a requested topic is personal
//! (anecdote-appropriate) or external (factual/market, anecdote-inappropriate).
//!
//! This is a heuristic, not a guarantee. The contract is determinism:
//! the same input always yields the same category.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::generation::post_types::PostType;

/// Two-valued classification shared by the prompt assembler and the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicCategory {
    Personal,
    External,
}

/// Signals that mark a topic as external: market/price/trading terms, named
/// crypto assets, regulatory and macro terms, "how to", numbered-listicle phrasing.
static EXTERNAL_SIGNALS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bprice\b",
        r"\bmarket\b",
        r"\bbtc\b",
        r"\beth\b",
        r"\bcrypto\b",
        r"\bbitcoin\b",
        r"\btrading\b",
        r"\banalysis\b",
        r"\btrend\b",
        r"\bindustry\b",
        r"\beconomy\b",
        r"\bregulat",
        r"\bsec\b",
        r"\bfed\b",
        r"\binterest rate\b",
        r"\binflation\b",
        r"\bdefi\b",
        r"\bnft\b",
        r"\btoken\b",
        r"\bblockchain tech",
        r"\bhow to\b",
        r"\b\d+ (tips|mistakes|lessons|ways|steps)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("external signal pattern must compile"))
    .collect()
});

/// Classifies a topic as personal or external.
///
/// Story and case study posts are always personal regardless of topic text;
/// otherwise any external signal match wins.
pub fn classify_topic(topic: &str, post_type: PostType) -> TopicCategory {
    if post_type.is_narrative() {
        return TopicCategory::Personal;
    }
    let lower_topic = topic.to_lowercase();
    if EXTERNAL_SIGNALS.iter().any(|p| p.is_match(&lower_topic)) {
        TopicCategory::External
    } else {
        TopicCategory::Personal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_is_always_personal() {
        // Post-type override wins over content heuristics
        assert_eq!(
            classify_topic("bitcoin price analysis", PostType::Story),
            TopicCategory::Personal
        );
        assert_eq!(
            classify_topic("How I lost my first client", PostType::Story),
            TopicCategory::Personal
        );
    }

    #[test]
    fn test_case_study_is_always_personal() {
        assert_eq!(
            classify_topic("market trends in 2025", PostType::CaseStudy),
            TopicCategory::Personal
        );
    }

    #[test]
    fn test_market_topic_is_external() {
        assert_eq!(
            classify_topic("5 tips for raising prices in this market", PostType::Listicle),
            TopicCategory::External
        );
    }

    #[test]
    fn test_crypto_asset_names_are_external() {
        for topic in ["BTC halving", "why ETH matters", "crypto winter", "DeFi yields"] {
            assert_eq!(
                classify_topic(topic, PostType::Insight),
                TopicCategory::External,
                "{topic} should classify external"
            );
        }
    }

    #[test]
    fn test_regulatory_prefix_matches_variants() {
        // \bregulat matches regulation, regulatory, regulators
        assert_eq!(
            classify_topic("new regulation hitting fintech", PostType::Insight),
            TopicCategory::External
        );
        assert_eq!(
            classify_topic("regulators vs startups", PostType::Insight),
            TopicCategory::External
        );
    }

    #[test]
    fn test_how_to_is_external() {
        assert_eq!(
            classify_topic("how to hire your first engineer", PostType::Insight),
            TopicCategory::External
        );
    }

    #[test]
    fn test_numbered_listicle_phrasing_is_external() {
        assert_eq!(
            classify_topic("3 mistakes founders make", PostType::Listicle),
            TopicCategory::External
        );
        assert_eq!(
            classify_topic("7 lessons from shutting down", PostType::Insight),
            TopicCategory::External
        );
    }

    #[test]
    fn test_personal_experience_topic_stays_personal() {
        assert_eq!(
            classify_topic("the day I fired my co-founder", PostType::Insight),
            TopicCategory::Personal
        );
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(
            classify_topic("BITCOIN Going Up", PostType::Question),
            TopicCategory::External
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let topic = "interest rate hikes and seed rounds";
        let first = classify_topic(topic, PostType::Question);
        for _ in 0..10 {
            assert_eq!(classify_topic(topic, PostType::Question), first);
        }
    }

    #[test]
    fn test_serde_lowercase_labels() {
        assert_eq!(
            serde_json::to_string(&TopicCategory::External).unwrap(),
            r#""external""#
        );
        assert_eq!(
            serde_json::to_string(&TopicCategory::Personal).unwrap(),
            r#""personal""#
        );
    }
}
