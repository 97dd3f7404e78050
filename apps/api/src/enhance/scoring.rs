//! Resume score: a rule-based completeness check, pure and total.
//!
//! Base 60. Each rule adds its weight when met; the total is capped at 100.
//! Every rule contributes exactly one line: a strength when met, a suggestion
//! when not.

use serde::{Deserialize, Serialize};

use crate::models::ResumeRecord;

pub const BASE_SCORE: u32 = 60;
pub const MAX_SCORE: u32 = 100;

const MIN_SUMMARY_CHARS: usize = 50;
const FULL_SKILLS: usize = 8;
const PARTIAL_SKILLS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u32,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Rule outcomes
// ────────────────────────────────────────────────────────────────────────────

enum Outcome {
    Met { points: u32, strength: String },
    Partial { points: u32, suggestion: &'static str },
    Unmet { suggestion: &'static str },
}

fn contact(record: &ResumeRecord) -> Outcome {
    let info = &record.personal_info;
    if !info.email.trim().is_empty() && !info.phone.trim().is_empty() {
        Outcome::Met {
            points: 5,
            strength: "Complete contact information".to_string(),
        }
    } else {
        Outcome::Unmet {
            suggestion: "Add complete contact information (email and phone)",
        }
    }
}

fn summary(record: &ResumeRecord) -> Outcome {
    if record.personal_info.summary.chars().count() > MIN_SUMMARY_CHARS {
        Outcome::Met {
            points: 10,
            strength: "Professional summary present".to_string(),
        }
    } else {
        Outcome::Unmet {
            suggestion: "Add a compelling professional summary (3-4 sentences)",
        }
    }
}

fn experience(record: &ResumeRecord) -> Outcome {
    match record.experience.len() {
        0 => Outcome::Unmet {
            suggestion: "Add at least one work experience entry",
        },
        n => Outcome::Met {
            points: 10,
            strength: format!("{n} work experience entries"),
        },
    }
}

fn metrics(record: &ResumeRecord) -> Outcome {
    let quantified = record
        .experience
        .iter()
        .flat_map(|e| &e.description)
        .any(|bullet| bullet.chars().any(|c| c.is_ascii_digit()));
    if quantified {
        Outcome::Met {
            points: 10,
            strength: "Quantifiable achievements included".to_string(),
        }
    } else {
        Outcome::Unmet {
            suggestion: "Add metrics and numbers to your achievements",
        }
    }
}

fn education(record: &ResumeRecord) -> Outcome {
    if record.education.is_empty() {
        Outcome::Unmet {
            suggestion: "Add your educational background",
        }
    } else {
        Outcome::Met {
            points: 5,
            strength: "Education information included".to_string(),
        }
    }
}

fn skills(record: &ResumeRecord) -> Outcome {
    match record.skills.professional_count() {
        n if n >= FULL_SKILLS => Outcome::Met {
            points: 10,
            strength: format!("{n} skills listed"),
        },
        n if n >= PARTIAL_SKILLS => Outcome::Partial {
            points: 5,
            suggestion: "Consider adding more relevant skills (aim for 8-12)",
        },
        _ => Outcome::Unmet {
            suggestion: "Add more skills relevant to your target role",
        },
    }
}

const RULES: &[fn(&ResumeRecord) -> Outcome] =
    &[contact, summary, experience, metrics, education, skills];

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

pub fn score_resume(record: &ResumeRecord) -> ScoreReport {
    let mut score = BASE_SCORE;
    let mut strengths = Vec::new();
    let mut suggestions = Vec::new();

    for rule in RULES {
        match rule(record) {
            Outcome::Met { points, strength } => {
                score += points;
                strengths.push(strength);
            }
            Outcome::Partial { points, suggestion } => {
                score += points;
                suggestions.push(suggestion.to_string());
            }
            Outcome::Unmet { suggestion } => suggestions.push(suggestion.to_string()),
        }
    }

    ScoreReport {
        score: score.min(MAX_SCORE),
        strengths,
        suggestions,
    }
}
