// Enhancement prompt templates.

use crate::llm_client::prompts::{PLAIN_PROSE_RULES, RESUME_WRITER_ROLE};

pub const SUMMARY_PROMPT: &str = r#"{role} Improve this professional summary for a {job_title} position.

Original: "{text}"

Requirements:
- Make it concise (3-4 sentences, under 100 words)
- Use strong action verbs and quantifiable achievements
{prose_rules}
- Focus on value proposition and key skills

Return ONLY the improved summary text, nothing else."#;

pub const BULLET_PROMPT: &str = r#"{role} Improve this job responsibility for a {job_title} position.

Original: "{text}"

Requirements:
- Start with a strong action verb (Led, Developed, Implemented, Managed, etc.)
- Add quantifiable metrics or impact (percentages, numbers, scale)
- Make it concise and impactful (one clear sentence)
{prose_rules}
- Keep it under 150 characters if possible

Return ONLY ONE improved version, nothing else. No bullet points, no numbering, just the improved text."#;

pub const SKILLS_PROMPT: &str = "List 10 important technical skills for a {job_title} position. \
Exclude these skills already listed: {current}. \
Return ONLY a comma-separated list of skills, nothing else.";

/// Falls back to a neutral title so the prompt never reads "for a  position".
fn title_or_default(job_title: &str) -> &str {
    match job_title.trim() {
        "" => "professional",
        title => title,
    }
}

fn fill_rewrite(template: &str, text: &str, job_title: &str) -> String {
    template
        .replace("{role}", RESUME_WRITER_ROLE)
        .replace("{prose_rules}", PLAIN_PROSE_RULES)
        .replace("{job_title}", title_or_default(job_title))
        .replace("{text}", text.trim())
}

pub fn build_summary_prompt(text: &str, job_title: &str) -> String {
    fill_rewrite(SUMMARY_PROMPT, text, job_title)
}

pub fn build_bullet_prompt(text: &str, job_title: &str) -> String {
    fill_rewrite(BULLET_PROMPT, text, job_title)
}

pub fn build_skills_prompt(job_title: &str, current: &[String]) -> String {
    SKILLS_PROMPT
        .replace("{job_title}", title_or_default(job_title))
        .replace("{current}", &current.join(", "))
}
