// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateProfile, JobPosting, MatchResult, RankedJob, ScoringWeights};
pub use requests::{NormalizeRequest, RankJobsRequest, ScoreMatchRequest, SkillMatchRequest};
pub use responses::{
    ApiResponse, ErrorResponse, HealthResponse, NormalizeResponse, RankJobsResponse,
    SkillMatchResponse,
};
