// src/ai/mod.rs
//! Generative-AI capabilities used by the services.
//!
//! Services depend on [`SkillAnalyst`] only; [`GeminiClient`] is the
//! production implementation and tests plug in a deterministic stub.

use anyhow::Result;
use std::future::Future;

pub mod gemini;
pub(crate) mod types;

pub use gemini::GeminiClient;

/// Sentinel answer meaning no candidate fits.
pub const NO_MATCH: &str = "none";

pub trait SkillAnalyst: Send + Sync {
    /// Skills, tools and technologies mentioned in `text`. May be empty.
    fn extract_skills(&self, text: &str) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Best match for `job_title` among `candidates`, `None` when nothing fits.
    fn match_job_file(
        &self,
        job_title: &str,
        candidates: &[String],
    ) -> impl Future<Output = Result<Option<String>>> + Send;
}

/// Accept a model answer only when it names one of the candidates.
pub fn resolve_job_file(answer: Option<&str>, candidates: &[String]) -> Option<String> {
    let answer = answer?.trim();
    if answer.is_empty() || answer.eq_ignore_ascii_case(NO_MATCH) {
        return None;
    }
    candidates.iter().find(|c| c.as_str() == answer).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files() -> Vec<String> {
        vec![
            "backend_developer.html".to_string(),
            "frontend_developer.html".to_string(),
        ]
    }

    #[test]
    fn test_resolve_job_file_accepts_listed_names() {
        assert_eq!(
            resolve_job_file(Some("backend_developer.html"), &files()),
            Some("backend_developer.html".to_string())
        );
    }

    #[test]
    fn test_resolve_job_file_rejects_sentinel_and_unknown() {
        assert_eq!(resolve_job_file(Some("none"), &files()), None);
        assert_eq!(resolve_job_file(Some("NONE"), &files()), None);
        assert_eq!(resolve_job_file(Some("data_scientist.html"), &files()), None);
        assert_eq!(resolve_job_file(Some(""), &files()), None);
        assert_eq!(resolve_job_file(None, &files()), None);
    }
}
