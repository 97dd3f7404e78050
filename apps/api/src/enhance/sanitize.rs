//! Cleanup for free-text completions before they reach the user.
//!
//! Models like to wrap answers in "Here's your summary:" lead-ins, quotes and
//! list markers. `sanitize_completion` removes those and repairs comma and
//! period runs. Every rule only ever shortens the text or settles a comma, so
//! the passes are repeated until nothing changes; the result is a fixed point
//! and sanitizing it again is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    Summary,
    Bullet,
}

static PREAMBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:here(?:'s|’s| is)[^:\n]*:|(?:professional |improved |enhanced )?summary:|improved:|enhanced:|better:)\s*",
    )
    .unwrap()
});

static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-•*▪◦●‣]\s*|\d+[.)]\s+)").unwrap());

static SPACE_BEFORE_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+,").unwrap());
static REPEATED_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*,+").unwrap());
// A digit after the comma is a thousands separator ("10,000").
static TIGHT_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",([^\s\d])").unwrap());
static REPEATED_PERIOD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").unwrap());

const QUOTE_PAIRS: [(char, char); 3] = [('"', '"'), ('“', '”'), ('‘', '’')];

const MAX_PASSES: usize = 16;

pub fn sanitize_completion(raw: &str, kind: CompletionKind) -> String {
    let mut current = raw.trim().to_string();
    for _ in 0..MAX_PASSES {
        let next = sanitize_pass(&current, kind);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn sanitize_pass(text: &str, kind: CompletionKind) -> String {
    let mut text = text.trim();
    loop {
        let before = text;
        text = strip_regex(&PREAMBLE, text);
        if kind == CompletionKind::Bullet {
            text = strip_regex(&LIST_MARKER, text);
        }
        text = strip_wrapping_quotes(text).trim();
        if text == before {
            break;
        }
    }

    let text = SPACE_BEFORE_COMMA.replace_all(text, ",");
    let text = REPEATED_COMMA.replace_all(&text, ",");
    let text = TIGHT_COMMA.replace_all(&text, ", $1");
    let text = REPEATED_PERIOD.replace_all(&text, ".");
    let text = text.trim();

    match kind {
        CompletionKind::Bullet => capitalize_first(text),
        CompletionKind::Summary => text.to_string(),
    }
}

fn strip_regex<'a>(pattern: &Regex, text: &'a str) -> &'a str {
    match pattern.find(text) {
        Some(m) => text[m.end()..].trim_start(),
        None => text,
    }
}

/// Drops one pair of quotes that encloses the whole text and nothing else.
fn strip_wrapping_quotes(text: &str) -> &str {
    for (open, close) in QUOTE_PAIRS {
        if let Some(inner) = text
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            if !inner.contains(open) && !inner.contains(close) {
                return inner;
            }
        }
    }
    text
}

pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_preamble_and_quotes_removed() {
        assert_eq!(
            sanitize_completion(r#"Here's your summary: "I am a great dev.""#, CompletionKind::Summary),
            "I am a great dev."
        );
    }

    #[test]
    fn test_stacked_preambles() {
        assert_eq!(
            sanitize_completion(
                "Here is the improved version:\nImproved Summary: Seasoned engineer shipping payments infrastructure.",
                CompletionKind::Summary
            ),
            "Seasoned engineer shipping payments infrastructure."
        );
    }

    #[test]
    fn test_curly_quotes_removed() {
        assert_eq!(
            sanitize_completion("“Led a team of five.”", CompletionKind::Summary),
            "Led a team of five."
        );
    }

    #[test]
    fn test_partial_quotes_kept() {
        let text = r#""Fast" and "reliable" delivery"#;
        assert_eq!(sanitize_completion(text, CompletionKind::Summary), text);
    }

    #[test]
    fn test_comma_and_period_repair() {
        assert_eq!(
            sanitize_completion(
                "Built APIs ,, services,and tools for 10,000 users..",
                CompletionKind::Summary
            ),
            "Built APIs, services, and tools for 10,000 users."
        );
    }

    #[test]
    fn test_bullet_markers_and_numbering() {
        assert_eq!(
            sanitize_completion("• reduced latency by 40%", CompletionKind::Bullet),
            "Reduced latency by 40%"
        );
        assert_eq!(
            sanitize_completion("1. Better: \"migrated billing to Postgres\"", CompletionKind::Bullet),
            "Migrated billing to Postgres"
        );
    }

    #[test]
    fn test_summary_keeps_leading_dash() {
        assert_eq!(
            sanitize_completion("- not a list", CompletionKind::Summary),
            "- not a list"
        );
    }

    fn completion_like() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                Just("Here's your summary: ".to_string()),
                Just("Improved: ".to_string()),
                Just("\"".to_string()),
                Just("“".to_string()),
                Just("”".to_string()),
                Just(",".to_string()),
                Just(" , ".to_string()),
                Just("..".to_string()),
                Just("- ".to_string()),
                Just("1. ".to_string()),
                Just(" ".to_string()),
                "[a-z0-9]{1,6}",
            ],
            0..12,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn prop_summary_sanitizer_is_idempotent(raw in completion_like()) {
            let once = sanitize_completion(&raw, CompletionKind::Summary);
            prop_assert_eq!(sanitize_completion(&once, CompletionKind::Summary), once);
        }

        #[test]
        fn prop_bullet_sanitizer_is_idempotent(raw in completion_like()) {
            let once = sanitize_completion(&raw, CompletionKind::Bullet);
            prop_assert_eq!(sanitize_completion(&once, CompletionKind::Bullet), once);
        }

        #[test]
        fn prop_no_comma_or_period_runs(raw in completion_like()) {
            let cleaned = sanitize_completion(&raw, CompletionKind::Summary);
            prop_assert!(!cleaned.contains(",,"));
            prop_assert!(!cleaned.contains(".."));
            prop_assert!(!cleaned.contains(" ,"));
        }
    }
}
