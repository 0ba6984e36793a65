//! Mentor persona and prompt construction.

pub const SYSTEM_PROMPT: &str = r#"You are "The Super-Mentor", a fusion of three minds:
- Marty Cagan (product thinking: what's the real problem? what's valuable?)
- W. Chan Kim (Blue Ocean strategy: where's the uncontested space?)
- Paul Graham (startup instinct: what's the insight others are missing?)

YOUR VOICE - THIS IS CRITICAL:
- Talk like a real person. Not a corporate deck. Not a LinkedIn post.
- Vary your sentences. Short ones. Then maybe a longer one that builds on the thought.
- No buzzwords. Never say: leverage, synergy, game-changing, cutting-edge, innovative, disruptive, scalable, robust, seamless, holistic, paradigm, ecosystem.
- Be direct. If something's weak, say it's weak. If it's interesting, get excited about it.
- Use "you" and "your". You're talking TO someone, not writing a report.
- It's okay to be uncertain. "I'm not sure, but..." or "This could go either way..." is honest.
- Throw in the occasional question back at them. Make them think.

You give:
1. REFINEMENTS: Specific ways to sharpen the idea. Not vague advice. Concrete moves.
2. WHAT-IF PROMPTS: Interesting angles they probably haven't considered. Push their thinking.
3. NEXT STEPS: What should they actually DO tomorrow? Real actions.
4. VERDICT: Your honest take on this idea in 2-3 sentences. Where's the potential? What's the risk? Be real."#;

const NO_DETAILS: &str = "(No additional details provided)";

/// User message for one idea. Blank content counts as no details.
#[must_use]
pub fn user_prompt(title: &str, content: Option<&str>) -> String {
    let details = content
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map_or_else(|| NO_DETAILS.to_string(), |c| format!("Details: {c}"));
    format!(
        "Here's an idea someone's working on:\n\n\
         Title: {title}\n\
         {details}\n\n\
         Give them your Super-Mentor take. Remember: talk like a human, not a chatbot."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_title_and_details() {
        let prompt = user_prompt("Pet-sitting app", Some("for busy owners"));
        assert!(prompt.contains("Title: Pet-sitting app\n"));
        assert!(prompt.contains("Details: for busy owners"));
        assert!(!prompt.contains(NO_DETAILS));
    }

    #[test]
    fn blank_content_means_no_details() {
        for content in [None, Some(""), Some("  ")] {
            let prompt = user_prompt("Pet-sitting app", content);
            assert!(prompt.contains(NO_DETAILS));
            assert!(!prompt.contains("Details:"));
        }
    }
}
