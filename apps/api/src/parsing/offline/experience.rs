use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::resume::{is_ongoing, WorkExperience};
use crate::parsing::offline::sections::{
    self, find_section, is_header_line, is_section_label, next_inline_heading,
};
use crate::parsing::offline::{bullet_items, char_len, first_match, Strategy};

const DATE: &str = r"(?:[A-Za-z]{3,9}\.? \d{4}|\d{1,2}/\d{4}|\d{4})";

/// `<title> (at|@|-|–||) <company> [<sep> <location>] <sep> <start> (-|–|—|to) <end>`
///
/// Titles and companies are capitalised words. Connectors and `present/current`
/// match in any case.
static JOB_ENTRY: Lazy<Regex> = Lazy::new(|| job_entry_pattern(""));

/// The same entry shape with every word matched in any case
/// ("senior software engineer at tech corp | jan 2021 - present").
static JOB_ENTRY_ANY_CASE: Lazy<Regex> = Lazy::new(|| job_entry_pattern("(?i)"));

fn job_entry_pattern(flags: &str) -> Regex {
    let pattern = format!(
        concat!(
            "{flags}",
            r"(?P<title>[A-Z][A-Za-z0-9_&/.'+-]*(?: [A-Z][A-Za-z0-9_&/.'+-]*){{0,5}})",
            r" (?:(?i:at)|@|-|–|\|) ",
            r"(?P<company>[A-Z0-9][A-Za-z0-9_&.'+-]*(?: (?:&|[A-Z0-9][A-Za-z0-9_&.'+-]*)){{0,5}})",
            r"(?: ?[|,] ?(?P<location>[A-Z][A-Za-z .]*?, ?[A-Z][A-Za-z]+))?",
            r" ?(?:\||-|–|,|\n) ?",
            r"(?P<start>{date}) ?(?:-|–|—|(?i:to)) ?(?P<end>(?i:present|current)|{date})?",
        ),
        flags = flags,
        date = DATE
    );
    Regex::new(&pattern).unwrap()
}

pub const JOB_TITLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "analyst",
    "designer",
    "coordinator",
    "specialist",
    "consultant",
    "director",
    "lead",
    "architect",
    "administrator",
    "associate",
    "assistant",
    "intern",
];

const MAX_ENTRIES: usize = 5;
const MAX_BULLETS: usize = 8;
const MAX_FALLBACK_LINE_CHARS: usize = 100;

/// Run against the experience window; the first one that yields entries wins.
pub const ENTRY_STRATEGIES: &[Strategy<Vec<WorkExperience>>] = &[
    Strategy {
        name: "capitalised_entry",
        run: |scope| matched_entries(&JOB_ENTRY, scope),
    },
    Strategy {
        name: "any_case_entry",
        run: |scope| matched_entries(&JOB_ENTRY_ANY_CASE, scope),
    },
    Strategy {
        name: "keyword_lines",
        run: keyword_lines,
    },
];

pub fn extract_experience(text: &str) -> Vec<WorkExperience> {
    let scope = find_section(text, &sections::EXPERIENCE).map_or(text, |w| w.text);
    let mut entries = first_match(ENTRY_STRATEGIES, scope).unwrap_or_default();
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.id = (index + 1).to_string();
    }
    entries
}

pub fn has_job_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    JOB_TITLE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn matched_entries(pattern: &Regex, scope: &str) -> Option<Vec<WorkExperience>> {
    let matches: Vec<Captures> = pattern.captures_iter(scope).take(MAX_ENTRIES).collect();
    let mut entries = Vec::new();

    for (index, caps) in matches.iter().enumerate() {
        let position = strip_section_label(&caps["title"]);
        if !has_job_keyword(position) && char_len(position) <= 3 {
            continue;
        }

        let end_date = caps
            .name("end")
            .map_or("Present", |m| m.as_str())
            .to_string();

        // Bullets run from the end of this entry to the start of the next one,
        // or to an inline heading before that.
        let body_start = caps.get(0).map_or(0, |m| m.end());
        let next_entry = matches
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(scope.len(), |m| m.start());
        let body_end = next_inline_heading(scope, body_start, next_entry).unwrap_or(next_entry);

        entries.push(WorkExperience {
            id: String::new(),
            company: caps["company"].trim().to_string(),
            position: position.to_string(),
            location: caps
                .name("location")
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            start_date: caps["start"].to_string(),
            current: is_ongoing(&end_date),
            end_date,
            description: description_bullets(&scope[body_start..body_end]),
        });
    }
    (!entries.is_empty()).then_some(entries)
}

/// Drops a heading glued to the front of a title ("EXPERIENCE Senior Engineer").
fn strip_section_label(title: &str) -> &str {
    let words: Vec<&str> = title.split(' ').collect();
    for glued in (1..=2).rev() {
        if words.len() > glued && is_section_label(&words[..glued].join(" ")) {
            let skip: usize = words[..glued].iter().map(|w| w.len() + 1).sum();
            return title[skip..].trim();
        }
    }
    title.trim()
}

fn description_bullets(body: &str) -> Vec<String> {
    bullet_items(body)
        .into_iter()
        .filter(|item| (5..=300).contains(&char_len(item)))
        .take(MAX_BULLETS)
        .map(String::from)
        .collect()
}

/// Last resort when no entry matched: short lines naming a job title.
fn keyword_lines(scope: &str) -> Option<Vec<WorkExperience>> {
    let entries: Vec<WorkExperience> = scope
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && char_len(line) < MAX_FALLBACK_LINE_CHARS
                && !is_header_line(line)
                && has_job_keyword(line)
        })
        .take(MAX_ENTRIES)
        .map(|line| WorkExperience {
            position: line.to_string(),
            company: "Company".to_string(),
            start_date: "2020".to_string(),
            end_date: "Present".to_string(),
            current: true,
            ..Default::default()
        })
        .collect();
    (!entries.is_empty()).then_some(entries)
}
