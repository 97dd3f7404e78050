// Resume parsing prompt templates.

use crate::extraction::normalize::truncate_chars;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

pub const RESUME_EXTRACT_PROMPT: &str = r#"Extract structured data from this resume text. {json_only}

OUTPUT SCHEMA (return exactly this structure):
{
  "personalInfo": {"fullName": "", "email": "", "phone": "", "location": "", "linkedin": "", "github": "", "website": "", "summary": ""},
  "experience": [{"company": "", "position": "", "location": "", "startDate": "", "endDate": "", "current": false, "description": []}],
  "education": [{"institution": "", "degree": "", "field": "", "graduationDate": "", "gpa": "", "location": ""}],
  "skills": {"technical": [], "soft": [], "languages": []},
  "projects": [{"name": "", "description": "", "technologies": [], "link": ""}],
  "certifications": [],
  "achievements": []
}

Use an empty string or an empty list for anything the resume does not state.

Resume text:
{resume_text}"#;

/// Builds the extraction prompt from the first `limit` characters of the resume.
pub fn build_extract_prompt(resume_text: &str, limit: usize) -> String {
    RESUME_EXTRACT_PROMPT
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{resume_text}", truncate_chars(resume_text, limit))
}
