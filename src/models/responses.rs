use serde::{Deserialize, Serialize};
use crate::models::domain::RankedJob;

/// Success envelope: `{ "success": true, "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}

/// Response for the normalize endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeResponse {
    pub tokens: Vec<String>,
}

/// Response for the skill match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatchResponse {
    pub score: f64,
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankJobsResponse {
    pub matches: Vec<RankedJob>,
    #[serde(rename = "totalJobs")]
    pub total_jobs: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}
