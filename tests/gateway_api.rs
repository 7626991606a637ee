//! HTTP-level tests for the gateway, driven through `tower::ServiceExt`
//! with a canned text generator standing in for the hosted model.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use mindspace::chat::Companion;
use mindspace::error::LlmError;
use mindspace::gateway::{router, AppState, AuthState, PerUserRateLimiter};
use mindspace::llm::{FinishReason, GenerationRequest, GenerationResponse, TextGenerator};
use mindspace::store::MemoryStore;
use mindspace::story::StoryTeller;

const TOKEN: &str = "test-token";

/// Replies with a fixed string regardless of input.
struct CannedGenerator {
    reply: String,
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _req: GenerationRequest) -> Result<GenerationResponse, LlmError> {
        Ok(GenerationResponse {
            text: self.reply.clone(),
            finish_reason: FinishReason::Stop,
            input_tokens: 0,
            output_tokens: 0,
        })
    }

    fn model_name(&self) -> &str {
        "canned"
    }
}

fn app_with(reply: &str, rate_limit: u64) -> Router {
    let generator: Arc<dyn TextGenerator> = Arc::new(CannedGenerator {
        reply: reply.to_string(),
    });
    let state = Arc::new(AppState {
        store: Arc::new(MemoryStore::new()),
        storyteller: StoryTeller::new(generator.clone()),
        companion: Companion::new(generator),
        model_rate_limiter: PerUserRateLimiter::new(rate_limit, 60),
    });
    router(state, AuthState::single(TOKEN, "alice"))
}

fn app(reply: &str) -> Router {
    app_with(reply, 100)
}

fn request(method: &str, path: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_is_public() {
    let app = app("unused");
    let (status, body) = send(&app, request("GET", "/api/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "mindspace");
}

#[tokio::test]
async fn protected_routes_reject_missing_or_wrong_token() {
    let app = app("unused");

    let (status, _) = send(&app, request("GET", "/api/profile", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, request("GET", "/api/profile", Some("bad"), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn assess_classifies_a_complete_answer_set() {
    let app = app("unused");
    let answers: Vec<&str> = vec!["A"; 12];
    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/assess",
            Some(TOKEN),
            Some(json!({ "answers": answers })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "STEADY");
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);
    assert!(!body["scenario_prompt"].as_str().unwrap().is_empty());
    assert!(!body["title"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn assess_rejects_incomplete_answers() {
    let app = app("unused");

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/assess",
            Some(TOKEN),
            Some(json!({ "answers": vec!["A"; 11] })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("12"));

    let mut answers = vec!["A".to_string(); 12];
    answers[4] = "E".to_string();
    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/assess",
            Some(TOKEN),
            Some(json!({ "answers": answers })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("5"), "1-based index");
}

#[tokio::test]
async fn questions_endpoint_lists_all_twelve() {
    let app = app("unused");
    let (status, body) = send(&app, request("GET", "/api/assess/questions", Some(TOKEN), None)).await;
    assert_eq!(status, StatusCode::OK);
    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), 12);
    assert_eq!(questions[0]["id"], 1);
    assert_eq!(questions[0]["section"], "mood");
}

#[tokio::test]
async fn chat_returns_model_reply() {
    let app = app("That sounds heavy. Try one slow breath.");
    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/chat",
            Some(TOKEN),
            Some(json!({ "message": "I feel overwhelmed" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "That sounds heavy. Try one slow breath.");
}

#[tokio::test]
async fn chat_rejects_blank_message() {
    let app = app("unused");
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/chat",
            Some(TOKEN),
            Some(json!({ "message": "   " })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn story_parses_model_json() {
    let app = app(r#"{"title": "The Banyan", "story": "Rohan sat beneath the tree."}"#);
    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/story",
            Some(TOKEN),
            Some(json!({ "scenario_prompt": "a howling wind" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "The Banyan");
    assert_eq!(body["story"], "Rohan sat beneath the tree.");
}

#[tokio::test]
async fn generated_stories_are_listed_back() {
    let app = app(r#"{"title": "Fireflies", "story": "Meera watched them rise."}"#);

    let (status, body) = send(&app, request("GET", "/api/stories", Some(TOKEN), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["stories"].as_array().unwrap().is_empty());

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/story",
            Some(TOKEN),
            Some(json!({ "scenario_prompt": "a world gone grey" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, request("GET", "/api/stories", Some(TOKEN), None)).await;
    assert_eq!(status, StatusCode::OK);
    let stories = body["stories"].as_array().unwrap();
    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0]["title"], "Fireflies");
    assert_eq!(stories[0]["scenario_prompt"], "a world gone grey");
}

#[tokio::test]
async fn story_rejects_empty_scenario() {
    let app = app("unused");
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/story",
            Some(TOKEN),
            Some(json!({ "scenario_prompt": "" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn model_routes_are_rate_limited_per_user() {
    let app = app_with("ok", 1);
    let chat = || {
        request(
            "POST",
            "/api/chat",
            Some(TOKEN),
            Some(json!({ "message": "hi" })),
        )
    };

    let (status, _) = send(&app, chat()).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, chat()).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(body["error"].as_str().unwrap().contains("Too many"));
}

#[tokio::test]
async fn profile_create_requires_terms_then_round_trips() {
    let app = app("unused");

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/profile",
            Some(TOKEN),
            Some(json!({ "name": "Priya" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Terms"));

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/profile",
            Some(TOKEN),
            Some(json!({ "name": "Priya", "age": 21, "terms_accepted": true })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Priya");
    assert_eq!(body["terms_accepted"], true);

    let (status, body) = send(&app, request("GET", "/api/profile", Some(TOKEN), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["name"], "Priya");
    assert_eq!(body["profile"]["age"], 21);
}

#[tokio::test]
async fn profile_rejects_out_of_range_age() {
    let app = app("unused");
    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/profile",
            Some(TOKEN),
            Some(json!({ "age": 150, "terms_accepted": true })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("age"));
}

#[tokio::test]
async fn checkin_validation_and_dashboard_numbers() {
    let app = app("unused");

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/checkins",
            Some(TOKEN),
            Some(json!({ "mood": 11, "energy": 5, "stress": 5 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/checkins",
            Some(TOKEN),
            Some(json!({
                "date": "2024-01-15",
                "mood": 8,
                "energy": 6,
                "stress": 3,
                "gratitude": "morning chai"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mood"], 8);
    assert_eq!(body["date"], "2024-01-15");

    let (status, body) = send(&app, request("GET", "/api/checkins", Some(TOKEN), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"].as_array().unwrap().len(), 1);
    assert_eq!(body["average_mood"], 8);
    // A check-in from 2024 cannot be part of a current streak.
    assert_eq!(body["streak_days"], 0);
}

#[tokio::test]
async fn content_endpoints_serve_catalog() {
    let app = app("unused");

    let (status, body) = send(
        &app,
        request("GET", "/api/content/articles", Some(TOKEN), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["articles"].as_array().unwrap().len(), 6);
    assert_eq!(body["categories"].as_array().unwrap().len(), 6);

    let (status, body) = send(
        &app,
        request(
            "GET",
            "/api/content/articles?category=Student%20Life",
            Some(TOKEN),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["category"], "Student Life");

    let (status, body) = send(&app, request("GET", "/api/content/quote", Some(TOKEN), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["quote"].as_str().unwrap().is_empty());

    let (status, body) = send(
        &app,
        request("GET", "/api/content/helplines", Some(TOKEN), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["helplines"].as_array().unwrap().len(), 4);
}
