use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use serde_json::{json, Value};
use tutorlink_models::{CompletionRequest, Role};

#[tokio::main]
async fn main() {
    let app = Router::new().route("/api/paas/v4/chat/completions", post(completions));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:4010").await.unwrap();
    println!("MOCK-GLM: Listening on http://localhost:4010");
    println!("MOCK-GLM: Point the relay at it with ZHIPU_API_URL=http://localhost:4010/api/paas/v4/chat/completions");
    axum::serve(listener, app).await.unwrap();
}

async fn completions(
    headers: HeaderMap,
    Json(req): Json<CompletionRequest>,
) -> (StatusCode, Json<Value>) {
    // The relay signs three-segment bearer tokens; reject anything else
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or_default();

    if token.split('.').count() != 3 {
        println!("MOCK-GLM: Rejecting request without a well-formed bearer token");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": { "code": "401", "message": "invalid or missing bearer token" }
            })),
        );
    }

    // The claims segment must decode to JSON carrying api_key/exp/iat
    let claims = token
        .split('.')
        .nth(1)
        .and_then(|segment| URL_SAFE_NO_PAD.decode(segment).ok())
        .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).ok())
        .filter(|claims| {
            claims["api_key"].is_string() && claims["exp"].is_u64() && claims["iat"].is_u64()
        });
    let claims = match claims {
        Some(claims) => claims,
        None => {
            println!("MOCK-GLM: Rejecting token with unreadable claims");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": { "code": "401", "message": "unreadable token claims" }
                })),
            );
        }
    };
    let api_key = claims["api_key"].as_str().unwrap_or_default();

    let last_user = req
        .messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.clone())
        .unwrap_or_default();

    println!(
        "MOCK-GLM: Completion request api_key='{}' model='{}' messages={} last_user='{}'",
        api_key,
        req.model,
        req.messages.len(),
        last_user
    );

    // Magic content to exercise the relay's upstream-error path; only an
    // exact match triggers it, so the marker can be talked about in a question
    if last_user == "__error__" {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "error": { "code": "503", "message": "mock provider overloaded" }
            })),
        );
    }

    // Tutoring register: guide with a question instead of answering
    let reply = format!("好问题！关于「{last_user}」，你自己先想到了什么？可以从身边的例子入手。");
    let prompt_tokens: u32 = req
        .messages
        .iter()
        .map(|m| m.content.chars().count() as u32)
        .sum();
    let completion_tokens = reply.chars().count() as u32;

    (
        StatusCode::OK,
        Json(json!({
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": reply },
                "finish_reason": "stop"
            }],
            "created": Utc::now().timestamp(),
            "id": uuid::Uuid::new_v4().to_string(),
            "model": req.model,
            "request_id": uuid::Uuid::new_v4().to_string(),
            "usage": {
                "prompt_tokens": prompt_tokens,
                "completion_tokens": completion_tokens,
                "total_tokens": prompt_tokens + completion_tokens
            }
        })),
    )
}
