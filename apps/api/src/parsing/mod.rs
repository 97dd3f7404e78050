//! Structured Resume Parser.
//!
//! The completion endpoint is tried first. Its output is only trusted after it
//! passes the response contract in `record_from_completion`; anything else, and
//! every enrichment failure, falls through to the offline heuristic parser.

pub mod handlers;
pub mod offline;
pub mod prompts;

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{strip_json_fences, CompletionProvider};
use crate::models::ResumeRecord;
use crate::parsing::offline::parse_offline;
use crate::parsing::prompts::build_extract_prompt;

/// Why a completion was not accepted as a resume record.
#[derive(Debug, Error)]
pub enum AiRecordError {
    #[error("completion contains no JSON object")]
    NoJsonObject,

    #[error("completion JSON is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("completion has no personalInfo.fullName")]
    MissingFullName,
}

#[derive(Debug, Clone, Copy)]
pub struct ParserConfig {
    /// Characters of resume text embedded in the extraction prompt.
    pub prompt_text_limit: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            prompt_text_limit: 3000,
        }
    }
}

#[derive(Clone)]
pub struct ResumeParser {
    provider: Arc<dyn CompletionProvider>,
    config: ParserConfig,
}

impl ResumeParser {
    pub fn new(provider: Arc<dyn CompletionProvider>, config: ParserConfig) -> Self {
        Self { provider, config }
    }

    /// Always returns a fully-populated record; the caller cannot tell which path
    /// produced it.
    pub async fn parse_resume(&self, text: &str) -> ResumeRecord {
        let chars = text.chars().count();
        let prompt = build_extract_prompt(text, self.config.prompt_text_limit);

        match self.provider.complete(&prompt).await {
            Ok(raw) => match record_from_completion(&raw) {
                Ok(record) => {
                    info!("Parsed resume ({chars} chars) via AI");
                    return record;
                }
                Err(e) => warn!("Rejected AI resume output: {e}"),
            },
            Err(e) => warn!("Resume enrichment unavailable: {e}"),
        }

        let record = parse_offline(text);
        info!("Parsed resume ({chars} chars) via offline parser");
        record
    }
}

/// Applies the response contract to a raw completion and normalizes the result.
pub fn record_from_completion(raw: &str) -> Result<ResumeRecord, AiRecordError> {
    let json = extract_json_object(strip_json_fences(raw)).ok_or(AiRecordError::NoJsonObject)?;
    let mut record: ResumeRecord = serde_json::from_str(json)?;
    if !record.has_meaningful_data() {
        return Err(AiRecordError::MissingFullName);
    }
    record.tidy();
    record.ensure_unique_ids();
    Ok(record)
}

/// Returns the first balanced `{ ... }` span. Braces inside JSON strings (and
/// escaped quotes within them) do not count towards the balance.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}
