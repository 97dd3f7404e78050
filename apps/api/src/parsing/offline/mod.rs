//! Offline heuristic resume parser.
//!
//! Pure, deterministic and total: any input produces a fully-populated record.
//! Every field is extracted by an ordered list of named strategies so that each
//! heuristic can be tested on its own. Recall is favoured over precision.

pub mod credentials;
pub mod education;
pub mod experience;
pub mod personal;
pub mod projects;
pub mod sections;
pub mod skills;

use tracing::{debug, trace};

use crate::models::ResumeRecord;

/// A named heuristic for one field.
pub struct Strategy<T> {
    pub name: &'static str,
    pub run: fn(&str) -> Option<T>,
}

/// First-success-wins over an ordered strategy list.
pub fn first_match<T>(strategies: &[Strategy<T>], text: &str) -> Option<T> {
    strategies.iter().find_map(|strategy| {
        let found = (strategy.run)(text);
        if found.is_some() {
            trace!("strategy '{}' matched", strategy.name);
        }
        found
    })
}

/// Concatenates the hits of every strategy, in strategy order.
pub fn all_matches<T>(strategies: &[Strategy<Vec<T>>], text: &str) -> Vec<T> {
    strategies
        .iter()
        .filter_map(|strategy| {
            let found = (strategy.run)(text);
            if let Some(hits) = &found {
                trace!("strategy '{}' found {} items", strategy.name, hits.len());
            }
            found
        })
        .flatten()
        .collect()
}

pub fn parse_offline(text: &str) -> ResumeRecord {
    let text = preprocess(text);

    let record = ResumeRecord {
        personal_info: personal::extract_personal_info(&text),
        experience: experience::extract_experience(&text),
        education: education::extract_education(&text),
        skills: skills::extract_skills(&text),
        projects: projects::extract_projects(&text),
        certifications: credentials::extract_certifications(&text),
        achievements: credentials::extract_achievements(&text),
    };

    debug!(
        "Offline parse: {} experience, {} education, {} technical skills, {} projects",
        record.experience.len(),
        record.education.len(),
        record.skills.technical.len(),
        record.projects.len()
    );
    record
}

/// Drops control characters and collapses whitespace. A whitespace run that
/// contains a line break becomes a single `\n`; any other run a single space.
pub fn preprocess(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending: Option<char> = None;

    for c in text.chars() {
        if c.is_whitespace() {
            if c == '\n' {
                pending = Some('\n');
            } else if pending.is_none() {
                pending = Some(' ');
            }
        } else if !c.is_control() {
            if let Some(separator) = pending.take() {
                if !out.is_empty() {
                    out.push(separator);
                }
            }
            out.push(c);
        }
    }
    out
}

pub(crate) const BULLET_GLYPHS: [char; 5] = ['•', '▪', '◦', '●', '‣'];

/// Returns the text after a leading bullet marker, if the line has one.
pub(crate) fn strip_bullet(line: &str) -> Option<&str> {
    let line = line.trim_start();
    let rest = line
        .strip_prefix(&BULLET_GLYPHS[..])
        .or_else(|| line.strip_prefix("- "))
        .or_else(|| line.strip_prefix("* "))?;
    Some(rest.trim())
}

/// Bullet items in a block of text. Glyph bullets are also split out of a
/// single line, which is how PDF and DOCX text arrives.
pub(crate) fn bullet_items(block: &str) -> Vec<&str> {
    let mut items = Vec::new();
    for line in block.lines() {
        let mut pieces = line.split(&BULLET_GLYPHS[..]);
        let lead = pieces.next().unwrap_or_default();
        if let Some(rest) = strip_bullet(lead) {
            items.push(rest);
        }
        items.extend(pieces.map(str::trim));
    }
    items.retain(|item| !item.is_empty());
    items
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub const SAMPLE_RESUME: &str = "
John Smith
john.smith@email.com | +1 (555) 123-4567 | San Francisco, CA
linkedin.com/in/johnsmith | github.com/johnsmith

PROFESSIONAL SUMMARY
Results-driven Software Engineer with 5+ years of experience building scalable web applications.
Specialized in React, Node.js, and cloud technologies with a proven track record of delivering high-impact projects.

EXPERIENCE
Senior Software Engineer at Tech Corp | San Francisco, CA | Jan 2021 - Present
• Led development of microservices architecture serving 10M+ users, improving system reliability by 40%
• Reduced deployment time by 60% through implementation of CI/CD pipelines
• Mentored team of 5 junior engineers, improving code quality and team velocity

Software Developer at StartupXYZ | San Jose, CA | Jun 2018 - Dec 2020
• Built RESTful APIs using Node.js and Express, handling 1000+ requests per second
• Implemented React-based dashboard reducing customer support tickets by 30%
• Collaborated with product team to launch 3 major features

EDUCATION
Bachelor of Science in Computer Science
University of California, Berkeley | May 2018
GPA: 3.8/4.0

SKILLS
Technical: JavaScript, TypeScript, React, Node.js, Python, AWS, Docker, PostgreSQL, MongoDB
Soft Skills: Leadership, Problem Solving, Communication, Team Collaboration
Languages: English (Native), Spanish (Fluent)

PROJECTS
E-commerce Platform
Built full-stack platform processing $1M+ in monthly transactions using React, Node.js, and Stripe

Real-time Chat Application
Developed WebSocket-based chat app supporting 500+ concurrent users

CERTIFICATIONS
AWS Certified Solutions Architect
Google Cloud Professional Developer

ACHIEVEMENTS
• Hackathon Winner 2022 - Built AI-powered productivity tool
• Employee of the Quarter Q3 2023
";

    /// The sample preprocessed the way `parse_offline` sees it.
    pub fn sample() -> String {
        super::preprocess(SAMPLE_RESUME)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::fixtures::SAMPLE_RESUME;
    use super::*;
    use super::Strategy;
    use crate::extraction::normalize::normalize_pdf_text;

    #[test]
    fn test_preprocess_collapses_runs() {
        assert_eq!(preprocess("  a \t b \r\n\n  c\u{0}d  "), "a b\ncd");
        assert_eq!(preprocess("\n\n"), "");
    }

    #[test]
    fn test_first_match_respects_order() {
        let strategies = [
            Strategy::<&'static str> {
                name: "never",
                run: |_| None,
            },
            Strategy {
                name: "first",
                run: |_| Some("first"),
            },
            Strategy {
                name: "second",
                run: |_| Some("second"),
            },
        ];
        assert_eq!(first_match(&strategies, "x"), Some("first"));
    }

    #[test]
    fn test_bullet_items_lines_and_inline() {
        let block = "• one item\n- two item\nplain line\n*three\nlead • four • five";
        assert_eq!(
            bullet_items(block),
            vec!["one item", "two item", "four", "five"]
        );
    }

    #[test]
    fn test_empty_input_gives_empty_record() {
        assert_eq!(parse_offline(""), ResumeRecord::default());
        assert_eq!(parse_offline(" \n\t "), ResumeRecord::default());
    }

    #[test]
    fn test_sample_resume_end_to_end() {
        let record = parse_offline(SAMPLE_RESUME);
        let info = &record.personal_info;
        assert_eq!(info.full_name, "John Smith");
        assert_eq!(info.email, "john.smith@email.com");
        assert!(!info.phone.is_empty());
        assert_eq!(info.location, "San Francisco, CA");
        assert_eq!(info.linkedin, "linkedin.com/in/johnsmith");
        assert_eq!(info.github, "github.com/johnsmith");
        assert!(info.summary.starts_with("Results-driven Software Engineer"));

        assert_eq!(record.experience.len(), 2);
        assert_eq!(record.experience[0].position, "Senior Software Engineer");
        assert_eq!(record.experience[0].company, "Tech Corp");
        assert!(record.experience[0].current);
        assert_eq!(record.experience[1].end_date, "Dec 2020");
        assert!(!record.experience[1].current);

        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].gpa, "3.8/4.0");

        for skill in ["JavaScript", "React", "Node.js", "PostgreSQL", "Docker"] {
            assert!(record.skills.technical.iter().any(|s| s == skill), "{skill}");
        }
        assert_eq!(record.skills.languages, vec!["English (Native)", "Spanish (Fluent)"]);

        assert_eq!(record.projects.len(), 2);
        assert_eq!(
            record.certifications,
            vec![
                "AWS Certified Solutions Architect",
                "Google Cloud Professional Developer"
            ]
        );
        assert_eq!(record.achievements.len(), 2);
    }

    #[test]
    fn test_ids_are_unique_counters() {
        let record = parse_offline(SAMPLE_RESUME);
        let ids: Vec<&str> = record.experience.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        let ids: Vec<&str> = record.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_single_line_pdf_text() {
        let record = parse_offline(&normalize_pdf_text(SAMPLE_RESUME));

        let positions: Vec<&str> = record.experience.iter().map(|e| e.position.as_str()).collect();
        assert_eq!(positions, vec!["Senior Software Engineer", "Software Developer"]);
        assert_eq!(record.experience[0].company, "Tech Corp");
        assert_eq!(record.experience[0].description.len(), 3);
        assert_eq!(record.experience[1].description.len(), 3);
        assert!(record.experience[1].description[2].starts_with("Collaborated with product team"));
        assert!(record
            .experience
            .iter()
            .flat_map(|e| &e.description)
            .all(|bullet| !bullet.contains("Hackathon") && !bullet.contains("Employee of")));

        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].institution, "University of California");
        assert_eq!(record.education[0].graduation_date, "May 2018");
    }

    proptest! {
        #[test]
        fn prop_parse_offline_is_total(text in "\\PC{0,400}") {
            let record = parse_offline(&text);
            prop_assert!(record.experience.len() <= 5);
            prop_assert!(record.education.len() <= 3);
            prop_assert!(record.projects.len() <= 5);
            prop_assert!(record.certifications.len() <= 5);
            prop_assert!(record.achievements.len() <= 5);
            prop_assert!(record.skills.languages.len() <= 3);
        }

        #[test]
        fn prop_parse_offline_is_deterministic(text in "[A-Za-z0-9@.,:|()\\-• \n]{0,300}") {
            prop_assert_eq!(parse_offline(&text), parse_offline(&text));
        }

        #[test]
        fn prop_parse_offline_handles_resume_shaped_noise(
            prefix in "[A-Z][a-z]{2,8} [A-Z][a-z]{2,8}\n",
            body in "[A-Za-z0-9 ,.|\n•-]{0,200}",
        ) {
            let text = format!("{prefix}EXPERIENCE\n{body}\nEDUCATION\n{body}");
            let record = parse_offline(&text);
            prop_assert!(!record.personal_info.full_name.is_empty());
        }
    }
}
