use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::Skills;

pub const TECHNICAL_VOCABULARY: &[&str] = &[
    "JavaScript", "TypeScript", "Python", "Java", "C++", "C#", "PHP", "Ruby", "Go", "Swift",
    "React", "Angular", "Vue", "Node.js", "Express", "Django", "Flask", "Spring",
    "HTML", "CSS", "SASS", "Bootstrap", "Tailwind",
    "SQL", "MongoDB", "PostgreSQL", "MySQL", "Redis", "Firebase",
    "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Jenkins",
    "Git", "GitHub", "GitLab", "CI/CD", "REST", "GraphQL", "API",
];

pub const SOFT_VOCABULARY: &[&str] = &[
    "Leadership",
    "Communication",
    "Teamwork",
    "Problem Solving",
    "Project Management",
    "Time Management",
    "Critical Thinking",
    "Adaptability",
    "Creativity",
    "Collaboration",
];

static TECHNICAL_TERMS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| TECHNICAL_VOCABULARY.iter().map(|t| (*t, term_pattern(t))).collect());
static SOFT_TERMS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| SOFT_VOCABULARY.iter().map(|t| (*t, term_pattern(t))).collect());

static SPOKEN_LANGUAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:English|Spanish|French|German|Italian|Portuguese|Russian|Chinese|Mandarin",
        r"|Japanese|Korean|Hindi|Arabic)\b",
        r"(?: ?\((?:Native|Fluent|Professional|Intermediate|Conversational|Basic)\))?",
    ))
    .unwrap()
});

const MAX_LANGUAGES: usize = 3;

/// Whole-term, case-insensitive. A term is not matched inside a longer word,
/// and `C` never matches `C++` or `C#`.
fn term_pattern(term: &str) -> Regex {
    let body = term
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    Regex::new(&format!(r"(?i)(?:^|[^A-Za-z0-9_]){body}(?:$|[^A-Za-z0-9_+#])")).unwrap()
}

pub fn extract_skills(text: &str) -> Skills {
    Skills {
        technical: vocabulary_hits(&TECHNICAL_TERMS, text),
        soft: vocabulary_hits(&SOFT_TERMS, text),
        languages: spoken_languages(text),
    }
}

/// Technical vocabulary terms present in `text`, in vocabulary order.
pub fn technical_terms_in(text: &str) -> Vec<String> {
    vocabulary_hits(&TECHNICAL_TERMS, text)
}

fn vocabulary_hits(terms: &[(&'static str, Regex)], text: &str) -> Vec<String> {
    terms
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(term, _)| term.to_string())
        .collect()
}

fn spoken_languages(text: &str) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for hit in SPOKEN_LANGUAGE.find_iter(text).take(MAX_LANGUAGES) {
        let language = hit.as_str().trim();
        if !languages.iter().any(|l| l.eq_ignore_ascii_case(language)) {
            languages.push(language.to_string());
        }
    }
    languages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::offline::fixtures::sample;

    #[test]
    fn test_sample_skills() {
        let skills = extract_skills(&sample());
        assert_eq!(
            skills.technical,
            vec![
                "JavaScript", "TypeScript", "Python", "React", "Node.js", "Express", "MongoDB",
                "PostgreSQL", "AWS", "Docker", "GitHub", "CI/CD",
            ]
        );
        assert_eq!(
            skills.soft,
            vec!["Leadership", "Communication", "Problem Solving", "Collaboration"]
        );
        assert_eq!(skills.languages, vec!["English (Native)", "Spanish (Fluent)"]);
    }

    #[test]
    fn test_terms_respect_boundaries() {
        let hits = technical_terms_in("Wrote C++ and C# services; JavaScript only; MySQL");
        assert_eq!(hits, vec!["JavaScript", "C++", "C#", "MySQL"]);
        assert!(technical_terms_in("Google Cloud").is_empty());
    }

    #[test]
    fn test_terms_are_case_insensitive_and_reported_canonically() {
        assert_eq!(technical_terms_in("used node.js and graphql"), vec!["Node.js", "GraphQL"]);
    }

    #[test]
    fn test_multi_word_soft_skills_span_line_breaks() {
        assert_eq!(extract_skills("Problem\nSolving").soft, vec!["Problem Solving"]);
    }

    #[test]
    fn test_languages_capped_and_deduplicated() {
        let skills = extract_skills("English, english (Native), French (Basic), German, Hindi");
        assert_eq!(skills.languages, vec!["English", "english (Native)", "French (Basic)"]);
        let skills = extract_skills("English, English, French, German");
        assert_eq!(skills.languages, vec!["English", "French"]);
    }
}
