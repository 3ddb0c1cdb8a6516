//! 聊天处理器

use axum::{extract::State, response::Json};

use super::service::{ChatReply, ChatRequest};
use crate::app::AppState;
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;

pub async fn post_chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ApiResponse<ChatReply>>, CoreError> {
    let reply = state.chat.reply(&payload.message).await?;
    Ok(Json(ApiResponse::success(reply)))
}
