// src/error.rs
use thiserror::Error;

use crate::file_parser::DocumentKind;

pub type Result<T> = std::result::Result<T, JobError>;

#[derive(Debug, Error)]
pub enum JobError {
    /// No posting matched the title, or no file was supplied.
    #[error("{0}")]
    NotFound(String),

    #[error("failed to decode {kind} document: {source}")]
    Decode {
        kind: DocumentKind,
        #[source]
        source: anyhow::Error,
    },

    /// Error raised by the skill-extraction or job-matching capability.
    #[error("skill analysis failed: {0:#}")]
    Capability(#[source] anyhow::Error),

    #[error("description extraction did not finish: {0}")]
    Extraction(#[source] tokio::task::JoinError),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl JobError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
