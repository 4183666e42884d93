//! Outbound call to the GLM completion provider.
//!
//! Builds the fixed-parameter completion body, POSTs it with a freshly
//! signed bearer token, and normalizes the provider's reply.  Successful
//! payloads are passed through verbatim so callers keep full access to
//! choices, usage, and identifiers.

use serde_json::Value;
use tutorlink_models::{ChatMessage, CompletionRequest};

use crate::config::AppConfig;
use crate::error::RelayError;

/// Model requested on every completion call.
pub const GLM_MODEL: &str = "glm-4";
/// Sampling temperature for every completion call.
pub const TEMPERATURE: f64 = 0.7;
/// Generation cap for every completion call.
pub const MAX_TOKENS: u32 = 1500;

/// Steering directive prepended to every conversation.
///
/// Keeps the model in the register of a patient middle-school tutor that
/// guides rather than answers outright.
pub const SYSTEM_DIRECTIVE: &str = "你是一位有耐心、善于引导的中学老师。在回答学生问题时，请遵循以下原则：
1. 使用适合中学生认知水平的语言
2. 不直接给出答案，而是通过提问引导学生思考
3. 鼓励学生独立思考和探索
4. 在学生遇到困难时给予适当的提示
5. 用生活中的例子来解释抽象概念
6. 肯定学生的思考过程
7. 培养学生的批判性思维
8. 如果涉及解题，引导学生理解解题思路而不是记忆答案

记住：你的目标是培养学生的学习能力和思维方式，而不是简单地提供答案。";

// ---------------------------------------------------------------------------
// Augmentation
// ---------------------------------------------------------------------------

/// Prepend the steering directive to the caller's conversation.
///
/// The directive is always the first message, exactly once; the caller's
/// messages follow in their original order, system-role ones included.
pub fn augment(messages: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut augmented = Vec::with_capacity(messages.len() + 1);
    augmented.push(ChatMessage::system(SYSTEM_DIRECTIVE));
    augmented.extend_from_slice(messages);
    augmented
}

// ---------------------------------------------------------------------------
// Forwarding
// ---------------------------------------------------------------------------

/// POST the augmented conversation to the provider and normalize the reply.
///
/// Exactly one attempt is made per call.  Transport faults, non-2xx
/// statuses, and unparseable or content-less bodies each map to their own
/// [`RelayError`] variant; a conforming reply comes back as raw JSON,
/// untouched.
pub async fn complete(
    http: &reqwest::Client,
    config: &AppConfig,
    bearer: &str,
    messages: Vec<ChatMessage>,
) -> Result<Value, RelayError> {
    let body = CompletionRequest {
        model: GLM_MODEL.to_string(),
        messages,
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    };

    let res = http
        .post(&config.api_url)
        .bearer_auth(bearer)
        .header(reqwest::header::ACCEPT, "application/json")
        .json(&body)
        .send()
        .await?;

    // Keep the raw text around so every later failure can report it.
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        return Err(RelayError::UpstreamError {
            status: status.as_u16(),
            body: text,
        });
    }

    let reply: Value = serde_json::from_str(&text)
        .map_err(|_| RelayError::MalformedUpstreamResponse { body: text.clone() })?;

    // A usable completion carries text in its first choice, even when the
    // provider said 200.
    reply
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .ok_or(RelayError::UnexpectedResponseShape)?;

    Ok(reply)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
