//! Prompt template sent to the text model.

use crate::models::ClipCount;

/// Build the generation prompt for `video_url`, asking for exactly `count`
/// ideas in the `{ "clips": [...] }` envelope.
pub fn build_prompt(video_url: &str, count: ClipCount) -> String {
    format!(
        r#"Analyze this video URL context: {video_url}
Generate exactly {count} viral short video ideas.
Each idea must include:
- "hook": Short punchy first sentence.
- "body": Main script (2-3 sentences).
- "tags": 12 hashtags.

Output JSON structure:
{{
  "clips": [
    {{ "id": 1, "hook": "...", "body": "...", "tags": "..." }}
  ]
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_url_and_count() {
        let prompt = build_prompt("http://example.com/v", ClipCount::Extended);

        assert!(prompt.contains("Analyze this video URL context: http://example.com/v"));
        assert!(prompt.contains("Generate exactly 50 viral short video ideas."));
    }

    #[test]
    fn standard_count_asks_for_twenty() {
        let prompt = build_prompt("http://example.com/v", ClipCount::Standard);

        assert!(prompt.contains("Generate exactly 20 viral short video ideas."));
        assert!(!prompt.contains("exactly 50"));
    }

    #[test]
    fn describes_every_field_and_the_envelope() {
        let prompt = build_prompt("u", ClipCount::Standard);

        for needle in [r#""hook""#, r#""body""#, r#""tags": 12 hashtags"#, r#""clips": ["#] {
            assert!(prompt.contains(needle), "missing {needle}");
        }
        assert!(prompt.contains(r#"{ "id": 1, "hook": "...", "body": "...", "tags": "..." }"#));
    }
}
