// src/ai/types.rs
//! Wire format of the `generateContent` endpoint, only the parts we use.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Tool {
    pub function_declarations: Vec<FunctionDeclaration>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct FunctionDeclaration {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Content,
}

impl GenerateContentRequest {
    pub fn user_prompt(prompt: String, declaration: FunctionDeclaration) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt),
                    function_call: None,
                }],
            }],
            tools: vec![Tool {
                function_declarations: vec![declaration],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Arguments of the first function call in the first candidate.
    pub fn first_function_args(&self) -> Option<&Value> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|part| part.function_call.as_ref())
            .map(|call| &call.args)
    }
}
