//! Certifications and achievements: short free-text lists.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::offline::sections::{self, find_section, SectionWindow};
use crate::parsing::offline::{all_matches, char_len, strip_bullet, Strategy};

/// `AWS Certified Solutions Architect`, `PMI Certificate in ...`
static ACRONYM_CERTIFIED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z]{2,} (?:Certified|Certificate)(?: (?:[A-Z][A-Za-z0-9+/-]*|of|in|and|for|-)){1,6}")
        .unwrap()
});

/// `Certified Scrum Master`, `Certification in Data Analytics`
static CERTIFIED_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:Certified|Certification)(?: (?:in|of|as))? [A-Z][A-Za-z0-9+/-]*(?: (?:[A-Z][A-Za-z0-9+/-]*|of|in|and|for)){0,5}")
        .unwrap()
});

const MAX_CERTIFICATIONS: usize = 5;
const MAX_ACHIEVEMENTS: usize = 5;

pub const CERTIFICATION_STRATEGIES: &[Strategy<Vec<String>>] = &[
    Strategy {
        name: "acronym_certified",
        run: |text| all_hits(&ACRONYM_CERTIFIED, text),
    },
    Strategy {
        name: "certified_phrase",
        run: |text| all_hits(&CERTIFIED_PHRASE, text),
    },
    Strategy {
        name: "section_lines",
        run: section_lines,
    },
];

pub fn extract_certifications(text: &str) -> Vec<String> {
    let mut certifications: Vec<String> = Vec::new();
    for candidate in all_matches(CERTIFICATION_STRATEGIES, text) {
        if certifications.len() == MAX_CERTIFICATIONS {
            break;
        }
        if !(5..100).contains(&char_len(&candidate)) {
            continue;
        }
        let lower = candidate.to_lowercase();
        let overlaps = certifications.iter().any(|existing| {
            let existing = existing.to_lowercase();
            existing.contains(&lower) || lower.contains(&existing)
        });
        if !overlaps {
            certifications.push(candidate);
        }
    }
    certifications
}

/// Lines 2 to 6 of the achievements section.
pub fn extract_achievements(text: &str) -> Vec<String> {
    let Some(window) = find_section(text, &sections::ACHIEVEMENTS) else {
        return Vec::new();
    };
    window
        .text
        .lines()
        .skip(1)
        .take(MAX_ACHIEVEMENTS)
        .map(|line| strip_bullet(line).unwrap_or(line).trim())
        .filter(|line| (10..150).contains(&char_len(line)))
        .map(String::from)
        .collect()
}

fn all_hits(pattern: &Regex, text: &str) -> Option<Vec<String>> {
    let hits: Vec<String> = pattern
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect();
    (!hits.is_empty()).then_some(hits)
}

/// Lines listed under a Certifications or Licenses heading.
fn section_lines(text: &str) -> Option<Vec<String>> {
    let SectionWindow { text: window, from_header } = find_section(text, &sections::CERTIFICATIONS)?;
    if !from_header {
        return None;
    }
    let lines: Vec<String> = window
        .lines()
        .skip(1)
        .map(|line| strip_bullet(line).unwrap_or(line).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    (!lines.is_empty()).then_some(lines)
}
