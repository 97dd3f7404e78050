use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::normalize::truncate_chars;
use crate::models::resume::PersonalInfo;
use crate::parsing::offline::sections::{is_header_line, is_section_label};
use crate::parsing::offline::{char_len, first_match, Strategy};

static TITLE_CASE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][a-z]+(?: [A-Z][a-z]+){1,3})").unwrap());
static INITIALED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z.]+ [A-Z][a-z]+)").unwrap());
static UPPER_CASE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]{2,}(?: [A-Z]{2,}){1,2})\b").unwrap());

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static NORTH_AMERICAN_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?1?[\s.-]?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}").unwrap()
});
static PARENTHESIZED_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\d{3}\)\s*\d{3}-\d{4}").unwrap());
static GROUPED_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{3}[\s.-]\d{3}[\s.-]\d{4}").unwrap());
static INTERNATIONAL_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+\d{1,3}[\s.-]?\d{4,14}").unwrap());

static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/([A-Za-z0-9-]+)").unwrap());
static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)github\.com/([A-Za-z0-9-]+)").unwrap());
static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)[^\s|,;()<>]+").unwrap());

static CITY_STATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][a-z]+(?: [A-Z][a-z]+)?), ?([A-Z]{2})\b(?: \d{5})?").unwrap()
});
static CITY_COUNTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][a-z]+(?: [A-Z][a-z]+)?), ?([A-Z][a-z]+)").unwrap());

static INLINE_SUMMARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:professional summary|summary|objective|profile|about)\b:? ?(.+)")
        .unwrap()
});

const SUMMARY_LABELS: &[&str] = &[
    "professional summary",
    "summary",
    "objective",
    "career objective",
    "profile",
    "professional profile",
    "about",
    "about me",
];
const MIN_SUMMARY_CHARS: usize = 50;
const MAX_SUMMARY_CHARS: usize = 500;

pub const NAME_STRATEGIES: &[Strategy<String>] = &[
    Strategy {
        name: "title_case_words",
        run: title_case_words,
    },
    Strategy {
        name: "initialed_name",
        run: initialed_name,
    },
    Strategy {
        name: "upper_case_words",
        run: upper_case_words,
    },
];

pub const PHONE_STRATEGIES: &[Strategy<String>] = &[
    Strategy {
        name: "north_american",
        run: |text| first_hit(&NORTH_AMERICAN_PHONE, text),
    },
    Strategy {
        name: "parenthesized",
        run: |text| first_hit(&PARENTHESIZED_PHONE, text),
    },
    Strategy {
        name: "grouped_digits",
        run: |text| first_hit(&GROUPED_PHONE, text),
    },
    Strategy {
        name: "international",
        run: |text| first_hit(&INTERNATIONAL_PHONE, text),
    },
];

pub const LOCATION_STRATEGIES: &[Strategy<String>] = &[
    Strategy {
        name: "city_state",
        run: |text| city_and_region(&CITY_STATE, text),
    },
    Strategy {
        name: "city_country",
        run: |text| city_and_region(&CITY_COUNTRY, text),
    },
];

pub const SUMMARY_STRATEGIES: &[Strategy<String>] = &[
    Strategy {
        name: "labelled_section",
        run: labelled_section,
    },
    Strategy {
        name: "inline_label",
        run: inline_label,
    },
];

pub fn extract_personal_info(text: &str) -> PersonalInfo {
    PersonalInfo {
        full_name: first_match(NAME_STRATEGIES, text).unwrap_or_default(),
        email: first_hit(&EMAIL, text).unwrap_or_default(),
        phone: first_match(PHONE_STRATEGIES, text).unwrap_or_default(),
        location: first_match(LOCATION_STRATEGIES, text).unwrap_or_default(),
        linkedin: profile_link(&LINKEDIN, "linkedin.com/in", text).unwrap_or_default(),
        github: profile_link(&GITHUB, "github.com", text).unwrap_or_default(),
        website: website(text).unwrap_or_default(),
        summary: first_match(SUMMARY_STRATEGIES, text).unwrap_or_default(),
    }
}

fn first_hit(pattern: &Regex, text: &str) -> Option<String> {
    pattern.find(text).map(|m| m.as_str().trim().to_string())
}

fn title_case_words(text: &str) -> Option<String> {
    TITLE_CASE_NAME.captures(text).map(|c| c[1].to_string())
}

fn initialed_name(text: &str) -> Option<String> {
    INITIALED_NAME.captures(text).map(|c| c[1].to_string())
}

/// `JOHN SMITH` becomes `John Smith`. A heading such as `PROFESSIONAL SUMMARY`
/// is not a name.
fn upper_case_words(text: &str) -> Option<String> {
    let caps = UPPER_CASE_NAME.captures(text)?;
    if is_section_label(&caps[1]) {
        return None;
    }
    let name = caps[1]
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    Some(name)
}

fn city_and_region(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .map(|c| format!("{}, {}", &c[1], &c[2]))
}

fn profile_link(pattern: &Regex, prefix: &str, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .map(|c| format!("{prefix}/{}", &c[1]))
}

/// First URL that is not a LinkedIn or GitHub profile.
fn website(text: &str) -> Option<String> {
    URL.find_iter(text)
        .map(|m| m.as_str().trim_end_matches(&['.', ':'][..]))
        .find(|url| {
            let lower = url.to_ascii_lowercase();
            !lower.contains("linkedin.com") && !lower.contains("github.com")
        })
        .map(String::from)
}

/// A summary heading on its own line, followed by its paragraph.
fn labelled_section(text: &str) -> Option<String> {
    let mut lines = text.lines();
    lines.by_ref().find(|line| {
        is_header_line(line) && {
            let label = line.trim().trim_end_matches(':').trim_end();
            SUMMARY_LABELS.iter().any(|l| label.eq_ignore_ascii_case(l))
        }
    })?;
    let paragraph = lines
        .take_while(|line| !is_header_line(line))
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");
    accept_summary(&paragraph)
}

/// `Summary: ...` with the text on the same line.
fn inline_label(text: &str) -> Option<String> {
    text.lines()
        .filter_map(|line| INLINE_SUMMARY.captures(line))
        .find_map(|caps| accept_summary(&caps[1]))
}

fn accept_summary(candidate: &str) -> Option<String> {
    let candidate = candidate.trim();
    if char_len(candidate) < MIN_SUMMARY_CHARS {
        return None;
    }
    Some(truncate_chars(candidate, MAX_SUMMARY_CHARS).trim_end().to_string())
}
