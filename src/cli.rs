// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::ai::GeminiClient;
use crate::environment::EnvironmentConfig;
use crate::file_parser::UploadedFile;
use crate::job_scraper::JobScraper;
use crate::services::JobService;
use crate::utils::{media_type_for_file, split_skill_list};

#[derive(Parser)]
#[command(name = "jobskills")]
#[command(about = "Extract skills from job postings and résumés and compare them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Overrides the configured job listings directory
    #[arg(long, global = true)]
    pub job_listings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the job description extracted from a saved posting
    Extract { html_file: PathBuf },
    /// Print the skills of the saved posting that best matches a title
    JobSkills { job_title: String },
    /// Print the skills found in a résumé file
    ParseResume {
        file: PathBuf,
        /// Declared media type, guessed from the extension when omitted
        #[arg(long)]
        mime: Option<String>,
    },
    /// Compare comma separated job and résumé skill lists
    Compare {
        #[arg(long)]
        job: String,
        #[arg(long)]
        resume: String,
    },
}

/// What the caller should report after a command ran.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Printed,
    NotFound(String),
}

pub async fn handle_command(cli: Cli) -> Result<Outcome> {
    match cli.command {
        Command::Extract { html_file } => {
            let html = tokio::fs::read_to_string(&html_file)
                .await
                .with_context(|| format!("Failed to read {}", html_file.display()))?;
            let extraction = JobScraper::extract(&html);
            info!("Description extracted via {:?}", extraction.layer);
            println!("{}", extraction.text);
            Ok(Outcome::Printed)
        }

        Command::Compare { job, resume } => {
            let result =
                crate::skills_matcher::compare_skills(split_skill_list(&job), split_skill_list(&resume));
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(Outcome::Printed)
        }

        Command::JobSkills { job_title } => {
            let service = build_service(cli.job_listings)?;
            finish(service.job_skills(&job_title).await)
        }

        Command::ParseResume { file, mime } => {
            let service = build_service(cli.job_listings)?;
            let file_name = file.display().to_string();
            let media_type = mime.unwrap_or_else(|| media_type_for_file(&file_name).to_string());
            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file_name))?;

            let upload = UploadedFile::new(bytes, media_type).with_file_name(file_name);
            finish(service.parse_resume(Some(upload)).await)
        }
    }
}

fn build_service(job_listings: Option<PathBuf>) -> Result<JobService<GeminiClient>> {
    let config = EnvironmentConfig::load()?;
    let listings = job_listings.unwrap_or(config.job_listings_path);
    info!("Job listings: {}", listings.display());

    let client = GeminiClient::new(&config.ai)?;
    Ok(JobService::new(client, listings))
}

fn finish(result: crate::Result<Vec<String>>) -> Result<Outcome> {
    match result {
        Ok(skills) => {
            println!("{}", serde_json::to_string_pretty(&skills)?);
            Ok(Outcome::Printed)
        }
        Err(e) if e.is_not_found() => Ok(Outcome::NotFound(e.to_string())),
        Err(e) => Err(e.into()),
    }
}
