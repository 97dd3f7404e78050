//! Section windows: the slice of resume text that belongs to one heading.
//!
//! Plain-text uploads keep their headings on lines of their own. PDF and DOCX
//! text arrives as a single line, where the only trace of a heading is an
//! upper-case label in running text ("... 2020 EDUCATION Bachelor of ...").

use once_cell::sync::Lazy;
use regex::Regex;

/// Headings recognised as a line of their own (case-insensitive, optional colon).
const SECTION_LABELS: &[&str] = &[
    "about",
    "about me",
    "achievements",
    "awards",
    "awards & honors",
    "awards and honors",
    "career objective",
    "certifications",
    "certifications & licenses",
    "contact",
    "education",
    "employment",
    "employment history",
    "experience",
    "honors",
    "interests",
    "languages",
    "licenses",
    "licenses & certifications",
    "objective",
    "portfolio",
    "professional experience",
    "professional profile",
    "professional summary",
    "profile",
    "projects",
    "publications",
    "references",
    "skills",
    "soft skills",
    "summary",
    "technical skills",
    "volunteer experience",
    "work experience",
    "work history",
];

/// A known label written in capitals, anywhere in the text.
static INLINE_HEADING: Lazy<Regex> = Lazy::new(|| {
    let mut labels: Vec<String> = SECTION_LABELS
        .iter()
        .map(|label| regex::escape(&label.to_uppercase()))
        .collect();
    // Longest first, so "WORK EXPERIENCE" wins over "EXPERIENCE".
    labels.sort_by_key(|label| std::cmp::Reverse(label.len()));
    Regex::new(&format!(r"\b(?:{})\b", labels.join("|"))).unwrap()
});

pub struct SectionWindow<'a> {
    pub text: &'a str,
    /// Whether the window was anchored on a heading line rather than a keyword
    /// found somewhere in running text.
    pub from_header: bool,
}

/// Where a section starts and how many characters it may span after its keyword.
pub struct SectionSpec {
    pub keywords: &'static [&'static str],
    pub max_chars: usize,
}

pub const EXPERIENCE: SectionSpec = SectionSpec {
    keywords: &["experience", "employment", "work history"],
    max_chars: 3000,
};

pub const PROJECTS: SectionSpec = SectionSpec {
    keywords: &["project", "portfolio"],
    max_chars: 2000,
};

pub const CERTIFICATIONS: SectionSpec = SectionSpec {
    keywords: &["certification", "license"],
    max_chars: 1000,
};

pub const ACHIEVEMENTS: SectionSpec = SectionSpec {
    keywords: &["achievement", "award", "honor"],
    max_chars: 1000,
};

pub fn is_section_label(text: &str) -> bool {
    let label = text.trim().trim_end_matches(':').trim_end();
    SECTION_LABELS
        .iter()
        .any(|known| label.eq_ignore_ascii_case(known))
}

pub fn is_header_line(line: &str) -> bool {
    let line = line.trim();
    line.len() <= 40 && is_section_label(line)
}

/// Where a window starts.
struct Anchor {
    start: usize,
    keyword_end: usize,
    /// End of the heading the keyword sits in; later headings close the window.
    heading_end: usize,
    from_header: bool,
}

/// Finds the window for `section`. The anchor is, in order of preference, the
/// first heading line containing a keyword, the first capitalised inline heading
/// containing one, or the first keyword occurrence anywhere. The window starts at
/// the keyword, spans at most `max_chars` characters past it and stops before the
/// next heading, on its own line or inline.
pub fn find_section<'a>(text: &'a str, section: &SectionSpec) -> Option<SectionWindow<'a>> {
    let lower = text.to_ascii_lowercase();
    let anchor = header_keyword(text, &lower, section.keywords)
        .or_else(|| inline_heading_keyword(text, &lower, section.keywords))
        .or_else(|| {
            earliest_keyword(&lower, section.keywords).map(|(start, len)| Anchor {
                start,
                keyword_end: start + len,
                heading_end: start + len,
                from_header: false,
            })
        })?;

    let limit = advance_chars(text, anchor.keyword_end, section.max_chars);
    let end = [
        next_header_after(text, anchor.start, limit),
        next_inline_heading(text, anchor.heading_end, limit),
    ]
    .into_iter()
    .flatten()
    .min()
    .unwrap_or(limit);

    Some(SectionWindow {
        text: text[anchor.start..end].trim_end(),
        from_header: anchor.from_header,
    })
}

/// Byte offset of the first capitalised heading starting in `from..limit`.
pub fn next_inline_heading(text: &str, from: usize, limit: usize) -> Option<usize> {
    INLINE_HEADING
        .find_at(text, from)
        .map(|m| m.start())
        .filter(|&start| start < limit)
}

fn header_keyword(text: &str, lower: &str, keywords: &[&str]) -> Option<Anchor> {
    let mut offset = 0;
    for line in text.split('\n') {
        if is_header_line(line) {
            let lower_line = &lower[offset..offset + line.len()];
            if let Some((pos, len)) = earliest_keyword(lower_line, keywords) {
                return Some(Anchor {
                    start: offset + pos,
                    keyword_end: offset + pos + len,
                    heading_end: offset + line.len(),
                    from_header: true,
                });
            }
        }
        offset += line.len() + 1;
    }
    None
}

fn inline_heading_keyword(text: &str, lower: &str, keywords: &[&str]) -> Option<Anchor> {
    INLINE_HEADING.find_iter(text).find_map(|heading| {
        let (pos, len) = earliest_keyword(&lower[heading.start()..heading.end()], keywords)?;
        Some(Anchor {
            start: heading.start() + pos,
            keyword_end: heading.start() + pos + len,
            heading_end: heading.end(),
            from_header: false,
        })
    })
}

fn earliest_keyword(lower: &str, keywords: &[&str]) -> Option<(usize, usize)> {
    keywords
        .iter()
        .filter_map(|keyword| lower.find(keyword).map(|pos| (pos, keyword.len())))
        .min_by_key(|&(pos, _)| pos)
}

fn advance_chars(text: &str, from: usize, chars: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(index, _)| from + index)
}

/// Byte offset of the first heading line that begins after the line holding
/// `start` and before `limit`.
fn next_header_after(text: &str, start: usize, limit: usize) -> Option<usize> {
    let mut offset = start + text[start..].find('\n')? + 1;
    while offset < limit {
        let line_end = text[offset..].find('\n').map_or(text.len(), |i| offset + i);
        if is_header_line(&text[offset..line_end]) {
            return Some(offset);
        }
        offset = line_end + 1;
    }
    None
}
