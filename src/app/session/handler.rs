//! 页面会话处理器
//!
//! 页面脚本调用的接口，路径都以 `/api/session/:id` 开头。

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::{ChatExchange, ChatUpdate, FrameRequest, PagePatch};
use crate::app::chat::service::ChatRequest;
use crate::app::chat::widget::ChatEvent;
use crate::app::AppState;
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct ChatEventRequest {
    pub event: ChatEvent,
}

/// `POST /api/session/:id/settle`
pub async fn settle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FrameRequest>,
) -> Result<Json<ApiResponse<PagePatch>>, CoreError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(ApiResponse::success(session.settle(&request).await)))
}

/// `POST /api/session/:id/scroll`
pub async fn scroll(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FrameRequest>,
) -> Result<Json<ApiResponse<PagePatch>>, CoreError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(ApiResponse::success(session.scroll(&request).await)))
}

/// `POST /api/session/:id/resize`
pub async fn resize(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FrameRequest>,
) -> Result<Json<ApiResponse<PagePatch>>, CoreError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(ApiResponse::success(session.resize(&request).await)))
}

/// `POST /api/session/:id/chat/events`
pub async fn chat_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ChatEventRequest>,
) -> Result<Json<ApiResponse<ChatUpdate>>, CoreError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(ApiResponse::success(
        session.chat_event(request.event).await,
    )))
}

/// `POST /api/session/:id/chat/messages`
pub async fn chat_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ApiResponse<ChatExchange>>, CoreError> {
    let session = state.sessions.get(id).await?;
    let exchange = session
        .chat_message(&request.message, state.scheduler.as_ref())
        .await?;
    Ok(Json(ApiResponse::success(exchange)))
}
