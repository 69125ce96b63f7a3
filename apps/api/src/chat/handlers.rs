use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::prompts::REPLY_SIGNATURE;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
}

/// POST /api/chat
///
/// Stateless per request: the widget transcript is never forwarded, so the
/// upstream model sees each turn in isolation. The body is inspected by hand
/// so a missing or mistyped `message` produces the documented 400 rather
/// than a deserialization rejection.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<ChatReply>, AppError> {
    let message = body
        .as_ref()
        .and_then(|Json(value)| value.get("message"))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            AppError::BadRequest("Please provide a valid \"message\" string".to_string())
        })?;

    // One upstream attempt, no retry; every failure becomes the support
    // fallback at the error boundary.
    let completion = state
        .llm
        .complete(message)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(ChatReply {
        reply: format!("{}\n\n{}", completion.text, REPLY_SIGNATURE),
        model: completion.model,
        tokens_used: completion.total_tokens,
    }))
}

/// Any verb other than POST on /api/chat.
pub async fn handle_chat_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
