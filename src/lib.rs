//! JobMatch - candidate/job matching engine
//!
//! This library provides the scoring used to match candidates with job postings:
//! text normalization, skill overlap and a weighted job/candidate compatibility score.

pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{job_match, normalize, skill_match, Matcher};
pub use models::{CandidateProfile, JobPosting, MatchResult, ScoringWeights};
