//! JSON API for the dashboard frontend
//!
//! All endpoints live under `/api`. The session is a single shared state
//! behind a mutex; the dashboard has no multi-user concerns.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::info;

use crate::{
    analytics,
    config::AtlasConfig,
    landmarks,
    map::{self, FlyTo, TileStyle},
    models::{ChatMessage, Landmark},
    session::{QueryOutcome, Session, View},
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub config: Arc<AtlasConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AtlasConfig) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            config: Arc::new(config),
        }
    }
}

#[derive(Deserialize)]
pub struct QueryRequest {
    pub prompt: String,
}

#[derive(Deserialize)]
pub struct ViewRequest {
    pub view: View,
}

#[derive(Serialize)]
pub struct SessionSnapshot {
    pub active_view: View,
    pub messages: Vec<ChatMessage>,
    pub map_ready: bool,
}

#[derive(Serialize)]
pub struct StylePayload {
    pub style: &'static str,
    pub document: Value,
    pub load_timeout_seconds: u64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/landmarks", get(get_landmarks))
        .route("/landmarks/{id}", get(get_landmark))
        .route("/assistant/query", post(post_query))
        .route("/session", get(get_session))
        .route("/session/view", post(post_view))
        .route("/map/ready", post(post_map_ready))
        .route("/map/focus/{id}", post(post_map_focus))
        .route("/map/reset", post(post_map_reset))
        .route("/map/style/{style}", get(get_map_style))
        .route("/map/markers", get(get_map_markers))
        .route("/analytics", get(get_analytics))
        .with_state(state)
}

async fn get_landmarks() -> Json<&'static [Landmark]> {
    Json(landmarks::all())
}

async fn get_landmark(Path(id): Path<String>) -> Result<Json<Landmark>, StatusCode> {
    landmarks::by_id(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn post_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryOutcome>, StatusCode> {
    if request.prompt.trim().is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let mut session = state.session.lock().await;
    let outcome = session.submit_query(&request.prompt);
    info!(
        show_map = outcome.response.should_show_map,
        landmark = ?outcome.response.landmark_id,
        "answered query"
    );
    Ok(Json(outcome))
}

async fn get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let session = state.session.lock().await;
    Json(SessionSnapshot {
        active_view: session.active_view(),
        messages: session.messages().to_vec(),
        map_ready: session.map_ready(),
    })
}

async fn post_view(
    State(state): State<AppState>,
    Json(request): Json<ViewRequest>,
) -> StatusCode {
    let mut session = state.session.lock().await;
    session.set_view(request.view);
    StatusCode::OK
}

async fn post_map_ready(State(state): State<AppState>) -> Json<Option<FlyTo>> {
    let mut session = state.session.lock().await;
    Json(session.mark_map_ready())
}

async fn post_map_focus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Option<FlyTo>> {
    let mut session = state.session.lock().await;
    // Unknown ids are a deliberate no-op, not an error
    Json(session.focus_landmark(&id))
}

async fn post_map_reset() -> Json<FlyTo> {
    Json(map::reset_view())
}

async fn get_map_style(
    State(state): State<AppState>,
    Path(style): Path<String>,
) -> Json<StylePayload> {
    let style = TileStyle::from_slug(&style);
    Json(StylePayload {
        style: style.slug(),
        document: map::style_document(style),
        load_timeout_seconds: state.config.map.load_timeout_seconds,
    })
}

async fn get_map_markers() -> Json<Vec<map::Marker>> {
    Json(map::all_markers())
}

async fn get_analytics() -> Json<analytics::AnalyticsSnapshot> {
    Json(analytics::snapshot())
}
