use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{normalize, skill_match, Matcher};
use crate::errors::ApiError;
use crate::models::{
    ApiResponse, HealthResponse, NormalizeRequest, NormalizeResponse, RankJobsRequest,
    RankJobsResponse, ScoreMatchRequest, SkillMatchRequest, SkillMatchResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/normalize", web::get().to(normalize_query))
        .route("/normalize", web::post().to(normalize_text))
        .route("/matches/skills", web::post().to(score_skills))
        .route("/matches/score", web::post().to(score_match))
        .route("/matches/rank", web::post().to(rank_jobs));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Normalize text given as a query parameter
///
/// GET /api/v1/normalize?text={text}
async fn normalize_query(query: web::Query<NormalizeRequest>) -> Result<HttpResponse, ApiError> {
    normalize_request(query.into_inner())
}

/// Normalize text given in the body
///
/// POST /api/v1/normalize
///
/// Request body:
/// ```json
/// { "text": "string" }
/// ```
async fn normalize_text(req: web::Json<NormalizeRequest>) -> Result<HttpResponse, ApiError> {
    normalize_request(req.into_inner())
}

fn normalize_request(req: NormalizeRequest) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let tokens = normalize(req.text.as_deref());

    Ok(HttpResponse::Ok().json(ApiResponse::ok(NormalizeResponse { tokens })))
}

/// Skill overlap endpoint
///
/// POST /api/v1/matches/skills
///
/// Request body:
/// ```json
/// {
///   "candidateSkills": ["string"],
///   "jobRequirements": ["string"]
/// }
/// ```
async fn score_skills(req: web::Json<SkillMatchRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let score = skill_match(
        req.candidate_skills.as_deref(),
        req.job_requirements.as_deref(),
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok(SkillMatchResponse { score })))
}

/// Candidate/job compatibility endpoint
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "candidate": { "skills": ["string"], "title": "string", "location": "string" },
///   "job": { "requirements": ["string"], "title": "string", "location": "string" }
/// }
/// ```
async fn score_match(
    state: web::Data<AppState>,
    req: web::Json<ScoreMatchRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let result = state.matcher.score(&req.candidate, &req.job);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(result)))
}

/// Rank jobs for a candidate
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "candidate": { "skills": ["string"], "title": "string", "location": "string" },
///   "jobs": [{ "id": "string", "requirements": ["string"], "title": "string", "location": "string" }],
///   "limit": 20,
///   "minScore": 0
/// }
/// ```
async fn rank_jobs(
    state: web::Data<AppState>,
    req: web::Json<RankJobsRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let RankJobsRequest { candidate, jobs, limit, min_score } = req.into_inner();

    // Cap limit to the configured maximum
    let limit = limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;
    let min_score = min_score.unwrap_or(state.matching.min_score);

    tracing::info!("Ranking {} jobs, limit: {}, min score: {}", jobs.len(), limit, min_score);

    let result = state.matcher.rank_jobs(&candidate, jobs, min_score, limit);

    tracing::info!(
        "Returning {} ranked jobs (from {} submitted)",
        result.matches.len(),
        result.total_jobs
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok(RankJobsResponse {
        matches: result.matches,
        total_jobs: result.total_jobs,
    })))
}
