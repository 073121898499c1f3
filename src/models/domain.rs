use serde::{Deserialize, Serialize};
use validator::Validate;

/// Candidate profile fields used for matching
///
/// Missing fields deserialize as empty; empty skills and titles score 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CandidateProfile {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub skills: Vec<String>,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub title: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub location: String,
}

/// Job posting fields used for matching
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct JobPosting {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub requirements: Vec<String>,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub title: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub location: String,
}

/// Compatibility between one candidate and one job, each field an integer percentage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall: u8,
    pub skills: u8,
    pub location: u8,
    pub title: u8,
}

/// Job scored against a candidate, as returned by ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedJob {
    #[serde(rename = "jobId")]
    pub job_id: Option<String>,
    pub title: String,
    pub location: String,
    pub score: MatchResult,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub location: f64,
    pub title: f64,
}

impl ScoringWeights {
    pub const DEFAULT: ScoringWeights = ScoringWeights {
        skills: 0.6,
        location: 0.3,
        title: 0.1,
    };

    pub fn sum(&self) -> f64 {
        self.skills + self.location + self.title
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
