use crate::core::{normalizer::normalize_str, skills::skill_match};
use crate::models::{CandidateProfile, JobPosting, MatchResult, ScoringWeights};

/// Calculate the compatibility between a candidate and a job with the default weights
///
/// Scoring formula:
/// overall = (
///     skills_score * 0.6 +      # Skill overlap with the job requirements
///     location_score * 0.3 +    # Same city, case-insensitive
///     title_score * 0.1         # Share of candidate title words in the job title
/// )
pub fn job_match(candidate: &CandidateProfile, job: &JobPosting) -> MatchResult {
    job_match_with_weights(candidate, job, &ScoringWeights::DEFAULT)
}

/// Calculate the compatibility between a candidate and a job with explicit weights
///
/// Each field of the result is rounded on its own from the unrounded component
/// scores; the overall score is never derived from rounded components.
pub fn job_match_with_weights(
    candidate: &CandidateProfile,
    job: &JobPosting,
    weights: &ScoringWeights,
) -> MatchResult {
    let skills = skill_match(Some(&candidate.skills[..]), Some(&job.requirements[..]));
    let location = location_score(&candidate.location, &job.location);
    let title = title_score(&candidate.title, &job.title);

    let overall = skills * weights.skills + location * weights.location + title * weights.title;

    let result = MatchResult {
        overall: to_percent(overall),
        skills: to_percent(skills),
        location: to_percent(location),
        title: to_percent(title),
    };

    tracing::debug!(
        "Match scored: overall={} skills={} location={} title={}",
        result.overall,
        result.skills,
        result.location,
        result.title
    );

    result
}

/// Location score: 100 for a case-insensitive exact match, 0 otherwise
#[inline]
pub fn location_score(candidate_location: &str, job_location: &str) -> f64 {
    if candidate_location.to_lowercase() == job_location.to_lowercase() {
        100.0
    } else {
        0.0
    }
}

/// Title score (0-100): share of candidate title tokens found in the job title
///
/// Tokens are compared exactly after normalization. A candidate title that
/// yields no tokens scores 0.
pub fn title_score(candidate_title: &str, job_title: &str) -> f64 {
    let title_tokens = normalize_str(candidate_title);
    if title_tokens.is_empty() {
        return 0.0;
    }

    let job_title_tokens = normalize_str(job_title);
    let matching = title_tokens
        .iter()
        .filter(|token| job_title_tokens.contains(token))
        .count();

    matching as f64 / title_tokens.len() as f64 * 100.0
}

/// Round half away from zero and clamp into 0-100
#[inline]
fn to_percent(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}
