//! Enhancement & Scoring.
//!
//! Rewrites go to the completion provider first. A completion is sanitized and
//! then accepted only above a minimum length; an unavailable provider or a
//! rejected completion falls back to the offline rewrite, so every call
//! returns usable text.

pub mod handlers;
pub mod offline;
pub mod prompts;
pub mod sanitize;
pub mod scoring;
pub mod suggestions;

use std::sync::Arc;

use tracing::{info, warn};

use crate::enhance::offline::{offline_rewrite_bullet, offline_rewrite_summary};
use crate::enhance::prompts::{build_bullet_prompt, build_skills_prompt, build_summary_prompt};
use crate::enhance::sanitize::{sanitize_completion, CompletionKind};
use crate::enhance::suggestions::{category_for_job_title, technical_skill_suggestions};
use crate::llm_client::CompletionProvider;

const MIN_SUMMARY_CHARS: usize = 50;
const MIN_BULLET_CHARS: usize = 10;
const MAX_SKILL_SUGGESTIONS: usize = 10;

#[derive(Clone)]
pub struct Enhancer {
    provider: Arc<dyn CompletionProvider>,
}

impl Enhancer {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn enhance_summary(&self, text: &str, job_title: &str) -> String {
        let prompt = build_summary_prompt(text, job_title);
        match self
            .rewrite(&prompt, CompletionKind::Summary, MIN_SUMMARY_CHARS)
            .await
        {
            Some(enhanced) => enhanced,
            None => offline_rewrite_summary(text),
        }
    }

    pub async fn enhance_bullet(&self, text: &str, job_title: &str) -> String {
        let prompt = build_bullet_prompt(text, job_title);
        match self
            .rewrite(&prompt, CompletionKind::Bullet, MIN_BULLET_CHARS)
            .await
        {
            Some(enhanced) => enhanced,
            None => offline_rewrite_bullet(text),
        }
    }

    /// Up to ten skills not already in `current` (case-insensitive).
    pub async fn suggest_skills(&self, job_title: &str, current: &[String]) -> Vec<String> {
        let prompt = build_skills_prompt(job_title, current);
        match self.provider.complete(&prompt).await {
            Ok(raw) => {
                let skills = new_skills(raw.split(','), current);
                if !skills.is_empty() {
                    info!("Suggested {} skills via AI", skills.len());
                    return skills;
                }
                warn!("Skill suggestion completion had no new skills");
            }
            Err(e) => warn!("Skill suggestion unavailable: {e}"),
        }

        let category = category_for_job_title(job_title);
        new_skills(technical_skill_suggestions(category).iter().copied(), current)
    }

    /// Sanitized completion, or `None` when the provider failed or the answer is too short.
    async fn rewrite(&self, prompt: &str, kind: CompletionKind, min_chars: usize) -> Option<String> {
        let raw = match self.provider.complete(prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("{kind:?} enhancement unavailable: {e}");
                return None;
            }
        };
        let cleaned = sanitize_completion(&raw, kind);
        if cleaned.chars().count() < min_chars {
            warn!(
                "{kind:?} enhancement too short ({} chars); using offline rewrite",
                cleaned.chars().count()
            );
            return None;
        }
        Some(cleaned)
    }
}

fn new_skills<'a>(candidates: impl Iterator<Item = &'a str>, current: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = current.iter().map(|s| s.trim().to_lowercase()).collect();
    let mut skills = Vec::new();
    for candidate in candidates.map(str::trim).filter(|s| !s.is_empty()) {
        if skills.len() == MAX_SKILL_SUGGESTIONS {
            break;
        }
        let key = candidate.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        skills.push(candidate.to_string());
    }
    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedProvider;

    fn enhancer(provider: ScriptedProvider) -> (Arc<ScriptedProvider>, Enhancer) {
        let provider = Arc::new(provider);
        (provider.clone(), Enhancer::new(provider))
    }

    #[tokio::test]
    async fn test_summary_uses_sanitized_completion() {
        let (provider, enhancer) = enhancer(ScriptedProvider::replying(
            "Here's your summary: \"Backend engineer with 6+ years building payment systems at scale.\"",
        ));
        let summary = enhancer.enhance_summary("i am backend dev", "Backend Engineer").await;
        assert_eq!(
            summary,
            "Backend engineer with 6+ years building payment systems at scale."
        );
        assert!(provider
            .last_prompt()
            .is_some_and(|p| p.contains("Original: \"i am backend dev\"")));
    }

    #[tokio::test]
    async fn test_short_summary_falls_back() {
        let (_, enhancer) = enhancer(ScriptedProvider::replying("Summary: Great dev."));
        assert_eq!(
            enhancer.enhance_summary("i am a dev", "").await,
            "I am a dev."
        );
    }

    #[tokio::test]
    async fn test_unavailable_summary_falls_back() {
        let (_, enhancer) = enhancer(ScriptedProvider::unavailable());
        assert_eq!(
            enhancer
                .enhance_summary("developer with 4 years experience in python", "Developer")
                .await,
            "Developer with 4+ years expertise in python."
        );
    }

    #[tokio::test]
    async fn test_bullet_completion_cleaned() {
        let (_, enhancer) = enhancer(ScriptedProvider::replying(
            "1. reduced deploy time by 40% ,,using GitHub Actions",
        ));
        assert_eq!(
            enhancer.enhance_bullet("made deploys faster", "DevOps").await,
            "Reduced deploy time by 40%, using GitHub Actions"
        );
    }

    #[tokio::test]
    async fn test_bullet_falls_back_when_too_short() {
        let (_, enhancer) = enhancer(ScriptedProvider::replying("- Did it"));
        assert_eq!(
            enhancer.enhance_bullet("• handling support tickets", "").await,
            "Managing support tickets."
        );
    }

    #[tokio::test]
    async fn test_skills_from_completion_skip_current() {
        let (_, enhancer) = enhancer(ScriptedProvider::replying(
            "Rust, python , , Kubernetes, Terraform, rust",
        ));
        let skills = enhancer
            .suggest_skills("Platform Engineer", &["Python".to_string()])
            .await;
        assert_eq!(skills, vec!["Rust", "Kubernetes", "Terraform"]);
    }

    #[tokio::test]
    async fn test_skills_capped_at_ten() {
        let (_, enhancer) = enhancer(ScriptedProvider::replying(
            "a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12",
        ));
        assert_eq!(enhancer.suggest_skills("Engineer", &[]).await.len(), 10);
    }

    #[tokio::test]
    async fn test_skills_fall_back_to_category_table() {
        let (_, enhancer) = enhancer(ScriptedProvider::unavailable());
        let skills = enhancer
            .suggest_skills("Data Scientist", &["python".to_string(), "SQL".to_string()])
            .await;
        assert_eq!(skills.first().map(String::as_str), Some("R"));
        assert!(!skills.iter().any(|s| s == "Python" || s == "SQL"));
        assert_eq!(skills.len(), 9);
    }
}
