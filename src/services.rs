// src/services.rs
//! Job skills, résumé parsing and skill comparison, wired to a [`SkillAnalyst`].

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::ai::SkillAnalyst;
use crate::error::{JobError, Result};
use crate::file_parser::{FileParser, UploadedFile};
use crate::job_scraper::JobScraper;
use crate::skills_matcher::{compare_skills, SkillComparison};

pub const JOB_NOT_FOUND: &str = "Job not found";
pub const FILE_NOT_FOUND: &str = "File not found";

pub struct JobService<A> {
    analyst: A,
    job_listings_dir: PathBuf,
}

impl<A: SkillAnalyst> JobService<A> {
    pub fn new(analyst: A, job_listings_dir: impl Into<PathBuf>) -> Self {
        Self {
            analyst,
            job_listings_dir: job_listings_dir.into(),
        }
    }

    pub fn analyst(&self) -> &A {
        &self.analyst
    }

    /// Skills required by the saved posting that best matches `job_title`.
    pub async fn job_skills(&self, job_title: &str) -> Result<Vec<String>> {
        info!("Looking up job skills for title: {}", job_title);

        let files = list_job_files(&self.job_listings_dir).await?;
        if files.is_empty() {
            warn!(
                "No job listings in {}",
                self.job_listings_dir.display()
            );
            return Err(JobError::not_found(JOB_NOT_FOUND));
        }

        let matched = self
            .analyst
            .match_job_file(job_title, &files)
            .await
            .map_err(JobError::Capability)?;
        let Some(file_name) = matched else {
            info!("No job listing matches title: {}", job_title);
            return Err(JobError::not_found(JOB_NOT_FOUND));
        };

        let path = self.job_listings_dir.join(&file_name);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| JobError::io(format!("Failed to read job listing {}", path.display()), e))?;
        // Scraped pages are not always UTF-8
        let html = String::from_utf8_lossy(&bytes).into_owned();

        let extraction = tokio::task::spawn_blocking(move || JobScraper::extract(&html))
            .await
            .map_err(JobError::Extraction)?;
        info!(
            "Extracted {} chars from {} via {:?}",
            extraction.text.chars().count(),
            file_name,
            extraction.layer
        );

        let skills = self
            .analyst
            .extract_skills(&extraction.text)
            .await
            .map_err(JobError::Capability)?;

        if skills.is_empty() {
            return Err(JobError::not_found(JOB_NOT_FOUND));
        }
        Ok(skills)
    }

    /// Skills found in an uploaded résumé.
    pub async fn parse_resume(&self, file: Option<UploadedFile>) -> Result<Vec<String>> {
        let file = file.ok_or_else(|| JobError::not_found(FILE_NOT_FOUND))?;

        let text = FileParser::to_text(file).await?;
        self.analyst
            .extract_skills(&text)
            .await
            .map_err(JobError::Capability)
    }

    pub fn compare_skills(
        &self,
        job_skills: Vec<String>,
        resume_skills: Vec<String>,
    ) -> SkillComparison {
        compare_skills(job_skills, resume_skills)
    }
}

/// File names in the listings directory, sorted.
async fn list_job_files(dir: &Path) -> Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| JobError::io(format!("Failed to read directory {}", dir.display()), e))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| JobError::io("Failed to read directory entry", e))?
    {
        match entry.file_type().await {
            Ok(file_type) if file_type.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                warn!("Skipping {}: failed to read file type: {}", entry.path().display(), e);
                continue;
            }
        }
        if let Some(name) = entry.file_name().to_str() {
            files.push(name.to_string());
        }
    }

    files.sort();
    Ok(files)
}
