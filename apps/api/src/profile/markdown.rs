//! Markdown export of a voice profile.
//!
//! The export is written for humans: founders paste it into any chat tool to
//! get on-voice content outside the app. It renders the raw interview fields,
//! not the normalized answer groups, so nothing is lost in translation.

use crate::profile::answers::RawProfileData;

fn field(value: &Option<String>) -> &str {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => "Not provided",
    }
}

/// Renders the interview answers as a self-contained markdown document.
pub fn render_voice_profile(data: &RawProfileData) -> String {
    let name = field(&data.name);
    let offlimits = match data.offlimits.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => "None",
    };

    format!(
        "# Voice Profile: {name}\n\
        \n\
        ## Identity\n\
        - **Name:** {name}\n\
        - **Role:** {role}\n\
        - **Origin Story:** {origin}\n\
        - **Contrarian Belief:** {contrarian}\n\
        \n\
        ## ICP (Ideal Customer Profile)\n\
        - **Target Audience:** {icp}\n\
        - **Their Biggest Pain:** {pain}\n\
        - **Their Misconception:** {misconception}\n\
        - **Desired Outcome (for reader):** {desired_outcome}\n\
        \n\
        ## Voice\n\
        - **Tone (3 words):** {tone}\n\
        - **Voice References:** {references}\n\
        - **Content Pillars:** {pillars}\n\
        - **Off-Limits Topics:** {offlimits}\n\
        \n\
        ## Content Bank\n\
        - **Hard Lesson:** {lesson}\n\
        - **Untold Win:** {win}\n\
        - **Hot Take:** {hottake}\n\
        - **Repeating Question:** {repeating}\n\
        \n\
        ---\n\
        \n\
        ## How to Use This File\n\
        \n\
        Paste this into any AI chat tool when generating content. Start your prompt with:\n\
        \n\
        > \"Here's my voice profile. Use this to write content in my voice:\"\n\
        \n\
        Then paste everything above.\n\
        \n\
        For posts, add:\n\
        > \"Write a LinkedIn post about [TOPIC]. Make it punchy, use short paragraphs, and start with a hook that stops the scroll.\"\n\
        \n\
        For ideas, add:\n\
        > \"Based on my content pillars and content bank, give me 10 post ideas I could write this week.\"\n",
        name = name,
        role = field(&data.role),
        origin = field(&data.origin),
        contrarian = field(&data.contrarian),
        icp = field(&data.icp),
        pain = field(&data.pain),
        misconception = field(&data.misconception),
        desired_outcome = field(&data.desired_outcome),
        tone = field(&data.tone),
        references = field(&data.references),
        pillars = field(&data.pillars),
        offlimits = offlimits,
        lesson = field(&data.lesson),
        win = field(&data.win),
        hottake = field(&data.hottake),
        repeating = field(&data.repeating),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(v: serde_json::Value) -> RawProfileData {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_render_includes_all_sections() {
        let md = render_voice_profile(&raw(json!({
            "name": "Jordan",
            "role": "CEO",
            "origin": "left a bank job in 2019",
            "contrarian": "cold email is dead",
            "icp": "seed-stage founders",
            "pain": "no pipeline",
            "misconception": "more content means more leads",
            "desired_outcome": "a repeatable inbound channel",
            "tone": "blunt, dry, specific",
            "references": "Paul Graham essays",
            "pillars": "sales, hiring, pricing",
            "lesson": "hired too fast in 2022",
            "win": "closed a $100k deal from one post",
            "hottake": "most founders shouldn't fundraise",
            "repeating": "how do I price?"
        })));

        assert!(md.starts_with("# Voice Profile: Jordan"));
        assert!(md.contains("## Identity"));
        assert!(md.contains("## ICP (Ideal Customer Profile)"));
        assert!(md.contains("## Voice"));
        assert!(md.contains("## Content Bank"));
        assert!(md.contains("- **Hard Lesson:** hired too fast in 2022"));
        assert!(md.contains("## How to Use This File"));
    }

    #[test]
    fn test_missing_offlimits_renders_none() {
        let md = render_voice_profile(&raw(json!({"name": "Jordan"})));
        assert!(md.contains("- **Off-Limits Topics:** None"));
    }

    #[test]
    fn test_missing_fields_render_not_provided() {
        let md = render_voice_profile(&raw(json!({"name": "Jordan"})));
        assert!(md.contains("- **Role:** Not provided"));
        assert!(md.contains("- **Hot Take:** Not provided"));
    }
}
