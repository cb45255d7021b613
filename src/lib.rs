// src/lib.rs
//! Skill extraction from job postings and résumés, and skill-gap comparison.

pub mod ai;
pub mod cli;
pub mod environment;
pub mod error;
pub mod file_parser;
pub mod job_scraper;
pub mod services;
pub mod skills_matcher;
pub mod utils;

pub use ai::{GeminiClient, SkillAnalyst};
pub use environment::EnvironmentConfig;
pub use error::{JobError, Result};
pub use file_parser::{DocumentKind, FileParser, UploadedFile};
pub use job_scraper::{extract_job_description, Extraction, ExtractionLayer};
pub use services::JobService;
pub use skills_matcher::{compare_skills, SkillComparison};
