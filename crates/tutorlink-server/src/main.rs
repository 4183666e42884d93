//! Tutorlink chat relay — forwards student conversations to the GLM
//! completion provider without ever exposing the provider credential to
//! the browser.
//!
//! The relay holds the credential server-side.  On each request it:
//!
//! 1. Validates the caller's message sequence.
//! 2. Prepends the fixed tutoring directive.
//! 3. Signs a short-lived HMAC-SHA256 bearer token from the credential.
//! 4. Forwards the augmented conversation to the provider and relays the
//!    reply verbatim, or a normalized error, back to the caller.

mod config;
mod error;
mod provider;
mod token;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};
use tracing::{info, warn};
use tutorlink_models::ChatRequest;

use crate::config::AppConfig;
use crate::error::RelayError;

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// State shared across all Axum handlers.
struct AppState {
    /// Immutable service configuration, read once at startup.
    config: AppConfig,
    /// Shared HTTP client for outbound provider calls.
    http: reqwest::Client,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `POST /api/chat` — relay one conversation to the completion provider.
async fn relay_chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Value>, RelayError> {
    // 1. Validate the conversation body
    let Json(request) =
        payload.map_err(|rejection| RelayError::InvalidPayload(rejection.body_text()))?;
    if request.messages.is_empty() {
        return Err(RelayError::InvalidPayload(
            "messages array is required".to_string(),
        ));
    }

    info!(turns = request.messages.len(), "chat request received");

    // 2. Prepend the steering directive
    let messages = provider::augment(&request.messages);

    // 3. Sign a fresh bearer token from the configured credential
    let credential = state
        .config
        .credential
        .as_deref()
        .ok_or_else(|| RelayError::Config("ZHIPU_API_KEY is not set".to_string()))?;
    let bearer = token::sign_bearer_token(credential)?;

    // 4. Forward to the provider and normalize the reply
    let reply = provider::complete(&state.http, &state.config, &bearer, messages).await?;

    info!("completion relayed");

    Ok(Json(reply))
}

/// `OPTIONS /api/chat` — CORS preflight for browser clients.
async fn chat_preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                "Content-Type, Authorization",
            ),
        ],
    )
}

/// `GET /api/health` — liveness probe.
async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// Build the relay router over the shared state.
fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chat", post(relay_chat).options(chat_preflight))
        .route("/api/health", get(health))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Configuration
    let config = AppConfig::from_env();

    if config.credential.is_none() {
        warn!("ZHIPU_API_KEY is not set; chat requests will fail with a configuration error");
    }
    info!(api_url = %config.api_url, "completion provider configured");

    let listen_port = config.listen_port;

    let state = Arc::new(AppState {
        config,
        http: reqwest::Client::new(),
    });

    let app = router(state);

    let addr = format!("0.0.0.0:{listen_port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");

    info!(address = %addr, "chat relay listening");
    axum::serve(listener, app).await.expect("server error");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
