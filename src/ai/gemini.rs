// src/ai/gemini.rs
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;
use tracing::{error, info, warn};

use super::types::{FunctionDeclaration, GenerateContentRequest, GenerateContentResponse};
use super::{resolve_job_file, SkillAnalyst};
use crate::environment::AiSettings;

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from settings, reading the key from `GEMINI_API_KEY`.
    pub fn new(settings: &AiSettings) -> Result<Self> {
        let api_key =
            env::var("GEMINI_API_KEY").context("GEMINI_API_KEY environment variable not set")?;
        Self::with_api_key(api_key, settings)
    }

    pub fn with_api_key(api_key: String, settings: &AiSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn generate(
        &self,
        context: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        info!("Sending request to Gemini ({}): {}", self.model, context);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error {}: {}", status, error_text);
            anyhow::bail!("Gemini API returned error {}: {}", status, error_text);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        info!("Received response from Gemini: {}", context);
        Ok(body)
    }
}

impl SkillAnalyst for GeminiClient {
    async fn extract_skills(&self, text: &str) -> Result<Vec<String>> {
        let request = GenerateContentRequest::user_prompt(
            skills_prompt(text),
            skills_declaration(),
        );
        let response = self.generate("Skill Extraction", &request).await?;

        let skills = skills_from_args(response.first_function_args());
        if skills.is_empty() {
            warn!("Gemini returned no skills");
        }
        Ok(skills)
    }

    async fn match_job_file(&self, job_title: &str, candidates: &[String]) -> Result<Option<String>> {
        let request = GenerateContentRequest::user_prompt(
            job_match_prompt(job_title, candidates),
            job_match_declaration(),
        );
        let response = self.generate("Job File Matching", &request).await?;

        let answer = response
            .first_function_args()
            .and_then(|args| args.get("matchedFile"))
            .and_then(Value::as_str);
        Ok(resolve_job_file(answer, candidates))
    }
}

fn skills_prompt(text: &str) -> String {
    format!("Extract all technical skills from: {}", text)
}

fn job_match_prompt(job_title: &str, candidates: &[String]) -> String {
    format!(
        r#"Given the job title "{}", find the best matching file name from this list: {}

Consider:
- Semantic similarity (e.g., "Backend Engineer" matches "backend_developer.html")
- Common job title variations (e.g., "Full Stack" matches "fullstack" or "full_stack")
- Technology-specific roles (e.g., "React Developer" matches "frontend_developer.html")
- Seniority levels are less important than role type

Return the exact file name from the list that best matches. If no good match exists, return "none"."#,
        job_title,
        candidates.join(", ")
    )
}

fn skills_declaration() -> FunctionDeclaration {
    FunctionDeclaration {
        name: "extract_skills",
        description: "Extract skills, tools, and technologies from text.",
        parameters: json!({
            "type": "object",
            "properties": {
                "skills": {
                    "type": "array",
                    "description": "List of skills",
                    "items": { "type": "string" }
                }
            },
            "required": ["skills"]
        }),
    }
}

fn job_match_declaration() -> FunctionDeclaration {
    FunctionDeclaration {
        name: "match_job_file",
        description:
            "Match a job title to the most appropriate job file name from a list of available files.",
        parameters: json!({
            "type": "object",
            "properties": {
                "matchedFile": {
                    "type": "string",
                    "description": "The best matching job file name from the provided list"
                },
                "confidence": {
                    "type": "string",
                    "description": "Confidence level: high, medium, or low"
                }
            },
            "required": ["matchedFile"]
        }),
    }
}

/// The `skills` array of a function call, as returned. Missing means empty.
fn skills_from_args(args: Option<&Value>) -> Vec<String> {
    args.and_then(|args| args.get("skills"))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
