// src/environment.rs
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{JobError, Result};

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Directory holding the saved job-posting HTML files.
    pub job_listings_path: PathBuf,
    pub ai: AiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    pub model: String,
    pub api_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentConfig,
    #[serde(default)]
    production: EnvironmentConfig,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            job_listings_path: PathBuf::from("job_listings"),
            ai: AiSettings::default(),
        }
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            api_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_seconds: 60,
        }
    }
}

impl EnvironmentConfig {
    /// Load configuration for the current environment from `config.yaml`
    /// in the working directory, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config_path = PathBuf::from(CONFIG_FILE);
        let config = if config_path.exists() {
            Self::load_from_file(&config_path, &environment)?
        } else {
            warn!("{} not found, using default configuration", CONFIG_FILE);
            Self::default()
        };

        config.apply_env_overrides().resolved()
    }

    fn get_environment() -> String {
        std::env::var("JOBSKILLS_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    pub fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| JobError::io(format!("Failed to read {}", path.display()), e))?;
        Self::from_yaml(&content, environment)
    }

    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile = serde_yaml::from_str(content)
            .map_err(|e| JobError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    fn apply_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("JOB_LISTINGS_PATH") {
            self.job_listings_path = PathBuf::from(path);
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            self.ai.model = model;
        }
        if let Ok(url) = std::env::var("GEMINI_API_URL") {
            self.ai.api_url = url;
        }
        self
    }

    /// Make relative paths absolute against the working directory.
    fn resolved(mut self) -> Result<Self> {
        self.job_listings_path = Self::resolve_path(&self.job_listings_path)?;
        Ok(self)
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir()
                .map_err(|e| JobError::io("Failed to get current directory", e))?;
            Ok(current_dir.join(path))
        }
    }
}
