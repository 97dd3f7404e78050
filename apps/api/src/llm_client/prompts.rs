// Shared prompt fragments.
// Each service that needs completions defines its own prompts.rs alongside it.
// This file contains the cross-cutting pieces.

/// Opening line shared by every writing-assistance prompt.
pub const RESUME_WRITER_ROLE: &str = "You are an expert resume writer.";

/// Instruction appended to structured-extraction prompts.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY a JSON object. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";

/// Punctuation rules shared by the rewrite prompts.
pub const PLAIN_PROSE_RULES: &str = "\
- Avoid excessive punctuation and multiple commas
- Use proper sentence structure
- Make it ATS-friendly and professional";
