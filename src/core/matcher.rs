use crate::core::{scoring::job_match_with_weights, skills::matched_skills};
use crate::models::{CandidateProfile, JobPosting, MatchResult, RankedJob, ScoringWeights};

/// Result of ranking jobs for one candidate
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<RankedJob>,
    pub total_jobs: usize,
}

/// Main matching orchestrator - scores candidate/job pairs with a fixed set of weights
///
/// # Ranking Stages
/// 1. Score every job against the candidate
/// 2. Drop jobs below the minimum overall score
/// 3. Sort by overall score, then skills score
/// 4. Truncate to the requested limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single candidate/job pair
    pub fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchResult {
        job_match_with_weights(candidate, job, &self.weights)
    }

    /// Rank jobs for a candidate
    ///
    /// # Arguments
    /// * `candidate` - The candidate profile
    /// * `jobs` - Job postings to score
    /// * `min_score` - Jobs with a lower overall score are dropped
    /// * `limit` - Maximum number of jobs to return
    ///
    /// # Returns
    /// RankResult with jobs ordered best first; ties keep their input order
    pub fn rank_jobs(
        &self,
        candidate: &CandidateProfile,
        jobs: Vec<JobPosting>,
        min_score: u8,
        limit: usize,
    ) -> RankResult {
        let total_jobs = jobs.len();

        let mut ranked: Vec<RankedJob> = jobs
            .into_iter()
            .filter_map(|job| {
                let score = self.score(candidate, &job);

                if score.overall < min_score {
                    return None;
                }

                let matched_skills = matched_skills(&candidate.skills, &job.requirements);

                Some(RankedJob {
                    job_id: job.id,
                    title: job.title,
                    location: job.location,
                    score,
                    matched_skills,
                })
            })
            .collect();

        // Stable sort: overall desc, then skills desc
        ranked.sort_by(|a, b| {
            b.score
                .overall
                .cmp(&a.score.overall)
                .then_with(|| b.score.skills.cmp(&a.score.skills))
        });

        ranked.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} jobs (min score {})",
            ranked.len(),
            total_jobs,
            min_score
        );

        RankResult {
            matches: ranked,
            total_jobs,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
