//! Axum HTTP gateway.
//!
//! Exposes the check-in classifier, story and chat generation, profiles,
//! daily check-ins, and the static content catalog as a JSON API. Every
//! route except `/api/health` sits behind bearer-token auth; the
//! model-backed routes additionally pass a per-user rate limiter.

pub mod auth;
pub mod limit;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::assessment::{self, AnswerSet, Category, Question, Suggestion, QUESTIONS};
use crate::chat::{Companion, HistoryMessage};
use crate::content;
use crate::error::{GatewayError, LlmError, StoreError};
use crate::store::{CheckinEntry, Profile, ProfileStore, ProfileUpdate, StoredStory};
use crate::story::{GeneratedStory, StoryTeller};

pub use auth::{AuthState, AuthenticatedUser, UserIdentity, auth_middleware};
pub use limit::PerUserRateLimiter;

/// Shared state handed to every handler.
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub storyteller: StoryTeller,
    pub companion: Companion,
    /// Budget shared by the story and chat endpoints.
    pub model_rate_limiter: PerUserRateLimiter,
}

/// JSON error body returned by every failing route.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

fn llm_error(err: LlmError) -> ApiError {
    tracing::warn!(error = %err, "model request failed");
    match err {
        LlmError::RateLimited { .. } => api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "The model is busy right now, please try again shortly",
        ),
        _ => api_error(StatusCode::BAD_GATEWAY, "Failed to reach the model"),
    }
}

fn store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::TermsNotAccepted | StoreError::InvalidField { .. } => {
            api_error(StatusCode::BAD_REQUEST, err.to_string())
        }
        StoreError::NotFound { .. } => api_error(StatusCode::NOT_FOUND, err.to_string()),
        StoreError::Serialization(_) => {
            tracing::error!(error = %err, "store failure");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Storage failure")
        }
    }
}

fn rate_limited() -> ApiError {
    api_error(
        StatusCode::TOO_MANY_REQUESTS,
        "Too many requests, please slow down",
    )
}

/// Build the full route tree.
///
/// Public routes are merged with the protected tree so the auth layer
/// never sees the health check.
pub fn router(state: Arc<AppState>, auth: AuthState) -> Router {
    let protected = Router::new()
        .route("/api/assess", post(assess_handler))
        .route("/api/assess/questions", get(questions_handler))
        .route("/api/story", post(story_handler))
        .route("/api/stories", get(stories_get_handler))
        .route("/api/chat", post(chat_handler))
        .route(
            "/api/profile",
            get(profile_get_handler).post(profile_post_handler),
        )
        .route(
            "/api/checkins",
            get(checkins_get_handler).post(checkin_post_handler),
        )
        .route("/api/content/articles", get(articles_handler))
        .route("/api/content/quote", get(quote_handler))
        .route("/api/content/helplines", get(helplines_handler))
        .layer(middleware::from_fn_with_state(auth, auth_middleware))
        .with_state(state.clone());

    let public = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    public.merge(protected).layer(TraceLayer::new_for_http()).layer(
        // The browser frontend is served from a different origin.
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

/// Bind and serve until the process is stopped.
pub async fn serve(
    state: Arc<AppState>,
    auth: AuthState,
    addr: std::net::SocketAddr,
) -> Result<(), GatewayError> {
    let app = router(state, auth);
    let listener =
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::BindFailed {
                addr: addr.to_string(),
                reason: e.to_string(),
            })?;
    tracing::info!(%addr, "gateway listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| GatewayError::Serve(e.to_string()))
}

// ---------------------------------------------------------------------------
// Health

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "mindspace",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ---------------------------------------------------------------------------
// Assessment

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    /// Twelve answer letters in question order; `""` marks unanswered.
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AssessResponse {
    pub category: Category,
    pub title: &'static str,
    pub observation: &'static str,
    pub suggestions: [Suggestion; 3],
    pub scenario_prompt: &'static str,
}

async fn assess_handler(
    State(_state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(body): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, ApiError> {
    let answers = AnswerSet::parse(&body.answers)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;
    let result = assessment::classify(&answers);
    tracing::info!(
        user_id = %user.user_id,
        category = result.category.as_str(),
        "check-in classified"
    );
    let title = assessment::guidance::for_category(result.category).title;
    Ok(Json(AssessResponse {
        category: result.category,
        title,
        observation: result.observation,
        suggestions: result.suggestions,
        scenario_prompt: result.scenario_prompt,
    }))
}

async fn questions_handler() -> Json<&'static [Question; 12]> {
    Json(&QUESTIONS)
}

// ---------------------------------------------------------------------------
// Story

#[derive(Debug, Deserialize)]
pub struct StoryRequest {
    pub scenario_prompt: String,
}

async fn story_handler(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(body): Json<StoryRequest>,
) -> Result<Json<GeneratedStory>, ApiError> {
    if !state.model_rate_limiter.check(&user.user_id) {
        return Err(rate_limited());
    }
    let scenario = body.scenario_prompt.trim();
    if scenario.is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "scenario_prompt must not be empty",
        ));
    }

    let story = state
        .storyteller
        .generate(scenario)
        .await
        .map_err(llm_error)?;

    // The story is still returned if persistence fails.
    let record = StoredStory {
        id: Uuid::new_v4(),
        user_id: user.user_id.clone(),
        scenario_prompt: scenario.to_string(),
        title: story.title.clone(),
        story: story.story.clone(),
        created_at: Utc::now(),
    };
    if let Err(e) = state.store.record_story(record).await {
        tracing::warn!(user_id = %user.user_id, error = %e, "failed to persist story");
    }

    Ok(Json(story))
}

#[derive(Debug, Serialize)]
pub struct StoriesResponse {
    pub stories: Vec<StoredStory>,
}

async fn stories_get_handler(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<StoriesResponse>, ApiError> {
    let stories = state
        .store
        .stories(&user.user_id)
        .await
        .map_err(store_error)?;
    Ok(Json(StoriesResponse { stories }))
}

// ---------------------------------------------------------------------------
// Chat

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

async fn chat_handler(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if !state.model_rate_limiter.check(&user.user_id) {
        return Err(rate_limited());
    }
    let message = body.message.trim();
    if message.is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "message must not be empty",
        ));
    }

    let reply = state
        .companion
        .reply(message, &body.history)
        .await
        .map_err(llm_error)?;

    Ok(Json(ChatResponse { reply }))
}

// ---------------------------------------------------------------------------
// Profile

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Option<Profile>,
}

async fn profile_get_handler(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = state
        .store
        .get_profile(&user.user_id)
        .await
        .map_err(store_error)?;
    Ok(Json(ProfileResponse { profile }))
}

async fn profile_post_handler(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<Profile>, ApiError> {
    let profile = state
        .store
        .upsert_profile(&user.user_id, update)
        .await
        .map_err(store_error)?;
    Ok(Json(profile))
}

// ---------------------------------------------------------------------------
// Check-ins

#[derive(Debug, Deserialize)]
pub struct CheckinRequest {
    /// Defaults to today when absent.
    pub date: Option<NaiveDate>,
    pub mood: u8,
    pub energy: u8,
    pub stress: u8,
    #[serde(default)]
    pub gratitude: String,
    #[serde(default)]
    pub challenge: String,
}

#[derive(Debug, Serialize)]
pub struct CheckinsResponse {
    pub entries: Vec<CheckinEntry>,
    pub average_mood: u8,
    pub streak_days: u32,
}

async fn checkin_post_handler(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(body): Json<CheckinRequest>,
) -> Result<Json<CheckinEntry>, ApiError> {
    for (field, value) in [
        ("mood", body.mood),
        ("energy", body.energy),
        ("stress", body.stress),
    ] {
        if !(1..=10).contains(&value) {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                format!("{field} must be between 1 and 10"),
            ));
        }
    }

    let entry = CheckinEntry {
        date: body.date.unwrap_or_else(|| Utc::now().date_naive()),
        mood: body.mood,
        energy: body.energy,
        stress: body.stress,
        gratitude: body.gratitude,
        challenge: body.challenge,
    };
    state
        .store
        .record_checkin(&user.user_id, entry.clone())
        .await
        .map_err(store_error)?;
    Ok(Json(entry))
}

async fn checkins_get_handler(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<CheckinsResponse>, ApiError> {
    let entries = state
        .store
        .checkins(&user.user_id)
        .await
        .map_err(store_error)?;
    let average_mood = content::mood_average(&entries);
    let streak_days = content::checkin_streak(&entries, Utc::now().date_naive());
    Ok(Json(CheckinsResponse {
        entries,
        average_mood,
        streak_days,
    }))
}

// ---------------------------------------------------------------------------
// Content

#[derive(Debug, Deserialize)]
struct ArticlesQuery {
    category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<&'static content::Article>,
    pub categories: [&'static str; 6],
}

async fn articles_handler(Query(query): Query<ArticlesQuery>) -> Json<ArticlesResponse> {
    Json(ArticlesResponse {
        articles: content::articles_in(query.category.as_deref()),
        categories: content::CATEGORIES,
    })
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote: &'static str,
    pub date: NaiveDate,
}

async fn quote_handler() -> Json<QuoteResponse> {
    let date = Utc::now().date_naive();
    Json(QuoteResponse {
        quote: content::quote_of_the_day(date),
        date,
    })
}

#[derive(Debug, Serialize)]
pub struct HelplinesResponse {
    pub helplines: [content::Helpline; 4],
}

async fn helplines_handler() -> Json<HelplinesResponse> {
    Json(HelplinesResponse {
        helplines: content::HELPLINES,
    })
}
