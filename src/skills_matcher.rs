// src/skills_matcher.rs
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::utils::normalize_skill;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillComparison {
    pub job_skills: Vec<String>,
    pub resume_skills: Vec<String>,
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub total_job_skills: usize,
    pub total_resume_skills: usize,
}

/// Compare the skills a posting asks for against the skills on a résumé.
///
/// Skills are equal when their trimmed, lowercased forms are equal. Matched
/// and missing lists follow the job list's order and casing; duplicates in the
/// job list are kept in whichever list they fall into.
pub fn compare_skills(job_skills: Vec<String>, resume_skills: Vec<String>) -> SkillComparison {
    let resume_set: HashSet<String> = resume_skills.iter().map(|s| normalize_skill(s)).collect();

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = job_skills
        .iter()
        .cloned()
        .partition(|skill| resume_set.contains(&normalize_skill(skill)));

    let match_percentage = match_percentage(matched_skills.len(), job_skills.len());

    SkillComparison {
        total_job_skills: job_skills.len(),
        total_resume_skills: resume_skills.len(),
        job_skills,
        resume_skills,
        match_percentage,
        matched_skills,
        missing_skills,
    }
}

/// Rounded share of matched skills, 0 when nothing was required.
fn match_percentage(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matched as f64 / total as f64) * 100.0).round() as u32
}
