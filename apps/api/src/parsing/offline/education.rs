use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::extraction::normalize::truncate_chars;
use crate::models::resume::Education;
use crate::parsing::offline::{all_matches, char_len, Strategy};

const INSTITUTION_WORD: &str = r"[A-Z][A-Za-z.&'-]*";
const INSTITUTION_KINDS: &str = r"(?:University|College|Institute|School|Academy)";
const PLACE: &str = r"(?P<location>[A-Z][a-z]+(?: [A-Z][a-z]+)?(?:, ?[A-Z]{2}\b)?)";
const GRAD_DATE: &str = r"(?P<date>(?:[A-Za-z]{3,9}\.? )?\d{4})";

/// `<degree> [in|of <field>] <sep> <institution>[, <location>][ <sep> <date>]`
static DEGREE_FIRST: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        concat!(
            r"\b(?P<degree>(?:Bachelor|Master)(?:'s)?(?: of [A-Z][a-z]+(?: [A-Z][a-z]+)?)?",
            r"|Associate(?: of [A-Z][a-z]+)?",
            r"|B\.S\.|B\.A\.|M\.S\.|M\.A\.|Ph\.D\.|(?:PhD|Ph\.D|MBA|BS|BA|MS|MA)\b)",
            r"(?: (?:in|of) (?P<field>[A-Z][A-Za-z&]*(?: [A-Z&][A-Za-z&]*){{0,4}}))?",
            r"(?P<sep> ?[,|\n-] ?| (?:from|at) | )",
            r"(?P<institution>{word}(?: (?:of|at|the|for|and|{word})){{0,6}})",
            r"(?:, ?{place})?",
            r"(?: ?[,|-] ?{date})?",
        ),
        word = INSTITUTION_WORD,
        place = PLACE,
        date = GRAD_DATE,
    );
    Regex::new(&pattern).unwrap()
});

/// `<...University|College|...> [, <location>] <sep> <date>`
static INSTITUTION_FIRST: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        concat!(
            r"(?P<institution>(?:{word} ){{0,4}}{kinds}(?: of(?: [A-Z][A-Za-z&'-]*){{1,3}})?)",
            r"(?:, ?{place})?",
            r" ?[,|-] ?{date}",
        ),
        word = INSTITUTION_WORD,
        kinds = INSTITUTION_KINDS,
        place = PLACE,
        date = GRAD_DATE,
    );
    Regex::new(&pattern).unwrap()
});

static INSTITUTION_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"University|College|Institute|School|Academy").unwrap());

static GPA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bGPA\b:? ?(\d(?:\.\d{1,2})?(?: ?/ ?\d(?:\.\d{1,2})?)?)").unwrap()
});

const MAX_ENTRIES: usize = 3;
const GPA_LOOKAHEAD_CHARS: usize = 200;

pub const EDUCATION_STRATEGIES: &[Strategy<Vec<Education>>] = &[
    Strategy {
        name: "degree_first",
        run: degree_first,
    },
    Strategy {
        name: "institution_first",
        run: institution_first,
    },
];

pub fn extract_education(text: &str) -> Vec<Education> {
    let mut entries: Vec<Education> = Vec::new();
    for candidate in all_matches(EDUCATION_STRATEGIES, text) {
        if entries.len() == MAX_ENTRIES {
            break;
        }
        if char_len(&candidate.institution) <= 3 {
            continue;
        }
        // "Computer Science University of California" repeats "University of California".
        let lower = candidate.institution.to_lowercase();
        let duplicate = entries.iter().any(|e| {
            let existing = e.institution.to_lowercase();
            existing.contains(&lower) || lower.contains(&existing)
        });
        if !duplicate {
            entries.push(candidate);
        }
    }
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.id = (index + 1).to_string();
    }
    entries
}

fn degree_first(text: &str) -> Option<Vec<Education>> {
    let entries: Vec<Education> = DEGREE_FIRST
        .captures_iter(text)
        .filter(|caps| {
            // A bare space only separates degree and school when the school says so.
            &caps["sep"] != " " || INSTITUTION_HINT.is_match(&caps["institution"])
        })
        .map(|caps| {
            let field = caps.name("field").map_or("", |m| m.as_str());
            entry_from(&caps, text, &caps["degree"], field)
        })
        .collect();
    (!entries.is_empty()).then_some(entries)
}

fn institution_first(text: &str) -> Option<Vec<Education>> {
    let entries: Vec<Education> = INSTITUTION_FIRST
        .captures_iter(text)
        .map(|caps| entry_from(&caps, text, "", ""))
        .collect();
    (!entries.is_empty()).then_some(entries)
}

/// `haystack` is the text `caps` was matched against.
fn entry_from(caps: &Captures, haystack: &str, degree: &str, field: &str) -> Education {
    let (degree, field) = if INSTITUTION_HINT.is_match(degree) {
        ("Bachelor of Science", "")
    } else {
        (degree.trim(), field.trim())
    };
    let match_end = caps.get(0).map_or(0, |m| m.end());

    Education {
        id: String::new(),
        institution: caps["institution"].trim().to_string(),
        degree: degree.to_string(),
        field: field.to_string(),
        graduation_date: caps
            .name("date")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        gpa: gpa_after(&haystack[match_end..]).unwrap_or_default(),
        location: caps
            .name("location")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
    }
}

/// A GPA stated shortly after an education entry.
fn gpa_after(rest: &str) -> Option<String> {
    let window = truncate_chars(rest, GPA_LOOKAHEAD_CHARS);
    GPA.captures(window).map(|caps| caps[1].replace(' ', ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::offline::fixtures::sample;

    #[test]
    fn test_sample_degree_first() {
        let entries = extract_education(&sample());
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.id, "1");
        assert_eq!(entry.degree, "Bachelor of Science");
        assert_eq!(entry.field, "Computer Science");
        assert_eq!(entry.institution, "University of California");
        assert_eq!(entry.location, "Berkeley");
        assert_eq!(entry.graduation_date, "May 2018");
        assert_eq!(entry.gpa, "3.8/4.0");
    }

    #[test]
    fn test_single_line_degree_and_school() {
        let entries =
            extract_education("Bachelor of Science in Computer Science University of Michigan 2016");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].field, "Computer Science");
        assert_eq!(entries[0].institution, "University of Michigan");
    }

    #[test]
    fn test_school_repeated_with_field_prefix() {
        let entries = extract_education(
            "Bachelor of Science in Computer Science University of California, Berkeley | May 2018",
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution, "University of California");
        assert_eq!(entries[0].field, "Computer Science");
        assert_eq!(entries[0].graduation_date, "May 2018");
    }

    #[test]
    fn test_institution_first() {
        let entries = extract_education("Boston College, Chestnut Hill, MA - 2012");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution, "Boston College");
        assert_eq!(entries[0].location, "Chestnut Hill, MA");
        assert_eq!(entries[0].graduation_date, "2012");
        assert_eq!(entries[0].degree, "");
    }

    #[test]
    fn test_bare_abbreviation_needs_a_school() {
        assert!(extract_education("Skilled in MS Office and Excel").is_empty());
    }

    #[test]
    fn test_missing_year_is_empty() {
        let entries = extract_education("MBA, Wharton School");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "MBA");
        assert_eq!(entries[0].institution, "Wharton School");
        assert_eq!(entries[0].graduation_date, "");
    }

    #[test]
    fn test_duplicates_and_cap() {
        let text = "B.S. in Physics, Reed College, 2010\n\
                    M.S. in Physics, Reed College, 2012\n\
                    Ph.D. in Physics, Caltech, 2016\n\
                    MBA, Stanford University, 2018\n\
                    MA, Oxford University, 2020";
        let entries = extract_education(text);
        let schools: Vec<&str> = entries.iter().map(|e| e.institution.as_str()).collect();
        assert_eq!(schools, vec!["Reed College", "Caltech", "Stanford University"]);
    }

    #[test]
    fn test_institution_looking_degree_is_replaced() {
        let text = "Hunter College, New York, NY - 2015";
        let caps = INSTITUTION_FIRST.captures(text).unwrap();
        let entry = entry_from(&caps, text, "Hunter College", "History");
        assert_eq!(entry.location, "New York, NY");
        assert_eq!(entry.degree, "Bachelor of Science");
        assert_eq!(entry.field, "");
    }
}
