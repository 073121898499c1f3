use std::collections::HashSet;

use crate::core::normalizer::normalize_str;

const MAX_SCORE: f64 = 100.0;

/// Calculate the skill overlap score (0-100) between candidate skills and job requirements
///
/// Every phrase is normalized and the tokens of each side are flattened into one
/// sequence. A candidate token counts towards the intersection when some
/// requirement token equals it or either one contains the other. Duplicate
/// candidate tokens are counted each time, while the union is the number of
/// distinct tokens across both sides.
///
/// Returns exactly 0 when either side is absent or empty. Repeated candidate
/// tokens can push the raw ratio past 100, so the result is capped at 100.
/// The result is not rounded.
pub fn skill_match<S: AsRef<str>>(
    candidate_skills: Option<&[S]>,
    job_requirements: Option<&[S]>,
) -> f64 {
    let (candidate_skills, job_requirements) = match (candidate_skills, job_requirements) {
        (Some(c), Some(j)) if !c.is_empty() && !j.is_empty() => (c, j),
        _ => return 0.0,
    };

    let candidate_tokens = flatten_tokens(candidate_skills);
    let requirement_tokens = flatten_tokens(job_requirements);

    let intersection = candidate_tokens
        .iter()
        .filter(|token| overlaps_any(token, &requirement_tokens))
        .count();

    let union: HashSet<&str> = candidate_tokens
        .iter()
        .chain(requirement_tokens.iter())
        .map(String::as_str)
        .collect();

    if union.is_empty() {
        return 0.0;
    }

    let score = (intersection as f64 / union.len() as f64 * 100.0).min(MAX_SCORE);

    tracing::trace!(
        "Skill overlap: {} matching of {} distinct tokens -> {:.2}",
        intersection,
        union.len(),
        score
    );

    score
}

/// Distinct candidate tokens that overlap with the job requirements, in first-seen order
pub fn matched_skills<S: AsRef<str>>(candidate_skills: &[S], job_requirements: &[S]) -> Vec<String> {
    let requirement_tokens = flatten_tokens(job_requirements);
    let mut seen = HashSet::new();

    flatten_tokens(candidate_skills)
        .into_iter()
        .filter(|token| overlaps_any(token, &requirement_tokens))
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

fn flatten_tokens<S: AsRef<str>>(phrases: &[S]) -> Vec<String> {
    phrases
        .iter()
        .flat_map(|phrase| normalize_str(phrase.as_ref()))
        .collect()
}

/// Equality or substring containment in either direction
#[inline]
fn overlaps_any(token: &str, others: &[String]) -> bool {
    others
        .iter()
        .any(|other| other == token || other.contains(token) || token.contains(other.as_str()))
}
