// Integration tests for JobMatch

use actix_web::{http::StatusCode, test, web, App};
use job_match::config::MatchingSettings;
use job_match::core::Matcher;
use job_match::errors::handle_json_payload_error;
use job_match::routes::{configure_routes, matches::AppState};
use serde_json::{json, Value};

fn create_state() -> AppState {
    AppState {
        matcher: Matcher::with_default_weights(),
        matching: MatchingSettings {
            default_limit: 2,
            max_limit: 3,
            min_score: 0,
        },
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_normalize_endpoint() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/normalize")
        .set_json(json!({ "text": "The developers of Paris" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["tokens"], json!(["develop", "pari"]));
}

#[actix_web::test]
async fn test_normalize_query_endpoint() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/normalize?text=Developing%20APIs")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["tokens"], json!(["develop", "api"]));
}

#[actix_web::test]
async fn test_skill_match_endpoint() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/skills")
        .set_json(json!({
            "candidateSkills": ["JavaScript", "React"],
            "jobRequirements": ["javascript", "Node.js"]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let score = body["data"]["score"].as_f64().unwrap();
    assert!(score > 0.0 && score < 100.0);
}

#[actix_web::test]
async fn test_skill_match_endpoint_missing_side() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/skills")
        .set_json(json!({ "candidateSkills": ["Rust"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["score"].as_f64(), Some(0.0));
}

#[actix_web::test]
async fn test_score_endpoint_success_envelope() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({
            "candidate": { "skills": ["Python"], "title": "Backend Engineer", "location": "Paris" },
            "job": { "requirements": ["Python"], "title": "Backend Engineer", "location": "Paris" }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({
            "success": true,
            "data": { "overall": 100, "skills": 100, "location": 100, "title": 100 }
        })
    );
}

#[actix_web::test]
async fn test_score_endpoint_validation_error() {
    let app = init_app!();

    let too_many: Vec<String> = (0..201).map(|i| format!("skill{i}")).collect();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({
            "candidate": { "skills": too_many, "title": "Engineer", "location": "Paris" },
            "job": { "requirements": ["Python"], "title": "Engineer", "location": "Paris" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["statusCode"], 422);
}

#[actix_web::test]
async fn test_invalid_json_rejected() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_rank_endpoint_orders_and_caps() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "candidate": { "skills": ["Rust", "PostgreSQL"], "title": "Backend Engineer", "location": "Paris" },
            "jobs": [
                { "id": "berlin", "requirements": ["Rust"], "title": "Backend Engineer", "location": "Berlin" },
                { "id": "paris", "requirements": ["Rust", "PostgreSQL"], "title": "Backend Engineer", "location": "Paris" },
                { "id": "tokyo", "requirements": ["Cooking"], "title": "Chef", "location": "Tokyo" },
                { "id": "lyon", "requirements": ["PostgreSQL"], "title": "DBA", "location": "Lyon" }
            ],
            "limit": 50
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let matches = body["data"]["matches"].as_array().unwrap();
    // Limit is capped at max_limit = 3
    assert_eq!(matches.len(), 3);
    assert_eq!(body["data"]["totalJobs"], 4);
    assert_eq!(matches[0]["jobId"], "paris");
    assert_eq!(matches[0]["score"]["overall"], 100);
    assert_eq!(matches[0]["matchedSkills"], json!(["rust", "postgresql"]));
}

#[actix_web::test]
async fn test_rank_endpoint_min_score_and_default_limit() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "candidate": { "skills": ["Rust"], "title": "Engineer", "location": "Paris" },
            "jobs": [
                { "id": "a", "requirements": ["Rust"], "title": "Engineer", "location": "Paris" },
                { "id": "b", "requirements": ["Rust"], "title": "Engineer", "location": "Paris" },
                { "id": "c", "requirements": ["Rust"], "title": "Engineer", "location": "Paris" },
                { "id": "d", "requirements": ["Cooking"], "title": "Chef", "location": "Tokyo" }
            ],
            "minScore": 10
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<&str> = body["data"]["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["jobId"].as_str().unwrap())
        .collect();

    // default_limit = 2, "d" is below the minimum score
    assert_eq!(ids, vec!["a", "b"]);
}

#[actix_web::test]
async fn test_rank_endpoint_requires_jobs() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "candidate": { "skills": ["Rust"], "title": "Engineer", "location": "Paris" },
            "jobs": []
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
