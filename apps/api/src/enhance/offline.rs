//! Phrase-level rewrites used when no completion is available.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::enhance::sanitize::capitalize_first;
use crate::parsing::offline::strip_bullet;

/// Applied in order; the longer phrases come before the shorter ones they contain.
static REWRITES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\bi am\b", "I am"),
        (r"(?i)\bwith\s+(\d+)\s*\+?\s*years?\b", "with ${1}+ years"),
        (r"(?i)\balso have experience in\b", "Additionally experienced in"),
        (r"(?i)\balso have\b", "Additionally experienced in"),
        (r"(?i)\bexperience in\b", "expertise in"),
        (r"(?i)\bteam handling\b", "team leadership and management"),
        (r"(?i)\bhandling\b", "managing"),
        (r"(?i)\bintegrating api\b", "API integration"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

pub fn offline_rewrite_summary(text: &str) -> String {
    rewrite(text.trim())
}

pub fn offline_rewrite_bullet(text: &str) -> String {
    let text = text.trim();
    rewrite(strip_bullet(text).unwrap_or(text))
}

fn rewrite(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut rewritten = text.to_string();
    for (pattern, replacement) in REWRITES.iter() {
        rewritten = pattern.replace_all(&rewritten, *replacement).into_owned();
    }
    let mut rewritten = capitalize_first(&rewritten);
    if !rewritten.ends_with(&['.', '!', '?'][..]) {
        rewritten.push('.');
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_rewrite() {
        assert_eq!(
            offline_rewrite_summary("i am a frontend dev with 3 year of experience in react and also have node"),
            "I am a frontend dev with 3+ years of expertise in react and Additionally experienced in node."
        );
    }

    #[test]
    fn test_team_handling_before_handling() {
        assert_eq!(
            offline_rewrite_summary("good at team handling and handling releases"),
            "Good at team leadership and management and managing releases."
        );
    }

    #[test]
    fn test_terminal_punctuation_kept() {
        assert_eq!(offline_rewrite_summary("Ready to ship!"), "Ready to ship!");
        assert_eq!(offline_rewrite_summary("Why not?"), "Why not?");
    }

    #[test]
    fn test_bullet_marker_dropped() {
        assert_eq!(
            offline_rewrite_bullet("• integrating api for payments"),
            "API integration for payments."
        );
        assert_eq!(offline_rewrite_bullet("- handling on-call"), "Managing on-call.");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(offline_rewrite_summary("   "), "");
        assert_eq!(offline_rewrite_bullet(""), "");
    }

    #[test]
    fn test_plus_years_not_doubled() {
        assert_eq!(
            offline_rewrite_summary("Engineer with 5+ years"),
            "Engineer with 5+ years."
        );
    }
}
