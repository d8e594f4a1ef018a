//! Axum route handlers for the AI endpoints.
//!
//! Completion failures (missing credential, upstream errors) deliberately
//! answer 200 with a flat `{error}` payload; only request-shape problems are
//! 4xx. Parse fallbacks are 200 `{rawText}` and are not errors at all.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::assistant::{chat, interpret_compound, interpret_dashboard, CompoundInfo, DashboardInfo};
use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::llm_client::extract::Extraction;
use crate::llm_client::ChatMessage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct InterpretCompoundRequest {
    pub compound: CompoundInfo,
}

#[derive(Debug, Deserialize)]
pub struct InterpretDashboardRequest {
    pub dashboard: DashboardInfo,
}

/// AI endpoint reply: either the successful payload or a flat `{error}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AiReply<T> {
    Ok(T),
    Error { error: String },
}

/// POST /api/chat/
///
/// Body `{messages: [{role, content}, ...]}`; 400 when the list is absent or
/// empty. Success answers `{role: "assistant", content}`.
pub async fn handle_chat(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChatRequest>,
) -> Result<Json<AiReply<ChatMessage>>, AppError> {
    if request.messages.is_empty() {
        return Err(AppError::Validation("messages must not be empty".to_string()));
    }

    let reply = match chat(state.llm.as_ref(), &request.messages).await {
        Ok(message) => AiReply::Ok(message),
        Err(e) => {
            error!("chat completion failed: {e}");
            AiReply::Error {
                error: e.to_string(),
            }
        }
    };
    Ok(Json(reply))
}

/// POST /api/interpret/compound/
///
/// Body `{compound: {...}}`; 400 when absent or malformed. Success answers
/// the structured interpretation object or `{rawText}`.
pub async fn handle_interpret_compound(
    State(state): State<AppState>,
    AppJson(request): AppJson<InterpretCompoundRequest>,
) -> Json<AiReply<Extraction>> {
    let reply = match interpret_compound(state.llm.as_ref(), &request.compound).await {
        Ok(extraction) => AiReply::Ok(extraction),
        Err(e) => {
            error!("compound interpretation failed: {e}");
            AiReply::Error {
                error: e.to_string(),
            }
        }
    };
    Json(reply)
}

/// POST /api/interpret/dashboard/
///
/// Body `{dashboard: {crop_a, crop_b, environment?}}`; 400 when absent or
/// malformed.
pub async fn handle_interpret_dashboard(
    State(state): State<AppState>,
    AppJson(request): AppJson<InterpretDashboardRequest>,
) -> Json<AiReply<Extraction>> {
    let reply = match interpret_dashboard(state.llm.as_ref(), &request.dashboard).await {
        Ok(extraction) => AiReply::Ok(extraction),
        Err(e) => {
            error!("dashboard interpretation failed: {e}");
            AiReply::Error {
                error: e.to_string(),
            }
        }
    };
    Json(reply)
}
