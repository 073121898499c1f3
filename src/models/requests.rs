use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateProfile, JobPosting};

/// Request to normalize free text
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NormalizeRequest {
    #[validate(length(max = 10000))]
    #[serde(default)]
    pub text: Option<String>,
}

/// Request to score two skill lists against each other
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillMatchRequest {
    #[validate(length(max = 200))]
    #[serde(default, alias = "candidate_skills", rename = "candidateSkills")]
    pub candidate_skills: Option<Vec<String>>,
    #[validate(length(max = 200))]
    #[serde(default, alias = "job_requirements", rename = "jobRequirements")]
    pub job_requirements: Option<Vec<String>>,
}

/// Request to score one candidate against one job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreMatchRequest {
    #[validate(nested)]
    pub candidate: CandidateProfile,
    #[validate(nested)]
    pub job: JobPosting,
}

/// Request to rank several jobs for one candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankJobsRequest {
    #[validate(nested)]
    pub candidate: CandidateProfile,
    #[validate(length(min = 1, max = 500), nested)]
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub limit: Option<u16>,
    #[validate(range(max = 100))]
    #[serde(default, alias = "min_score", rename = "minScore")]
    pub min_score: Option<u8>,
}
