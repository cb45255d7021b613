// src/job_scraper/mod.rs
//! Job description extraction from arbitrary job-posting pages.
//!
//! A page goes through a noise-filtered view, then three layers are tried in
//! order: known description selectors, keyword headings, and finally the
//! largest remaining content block. The winning text is whitespace-normalized.

pub mod collector;
pub mod extractor;
pub mod noise;
pub mod selectors;

pub use extractor::{
    extract_job_description, Extraction, ExtractionLayer, JobScraper, MIN_DESCRIPTION_CHARS,
    MIN_FALLBACK_CHARS,
};
