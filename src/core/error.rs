//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// 核心错误类型（JSON API 使用）
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(String),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error_message, user_message) = match self {
            CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            CoreError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                msg,
            ),
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

/// 商品数据加载与查找错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP {0}")]
    Http(u16),
    #[error("读取商品数据失败: {0}")]
    Io(String),
    #[error("商品数据解析失败: {0}")]
    Parse(String),
    #[error("缺少商品 id 参数")]
    MissingId,
    #[error("商品不存在: {0}")]
    NotFound(String),
}

/// 页面层面只区分两类失败
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 拉取或解析失败，显示通用失败信息
    Load,
    /// 缺少 id 或找不到商品
    NotFound,
}

impl CatalogError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CatalogError::Http(_) | CatalogError::Io(_) | CatalogError::Parse(_) => {
                FailureKind::Load
            }
            CatalogError::MissingId | CatalogError::NotFound(_) => FailureKind::NotFound,
        }
    }
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match err.kind() {
            FailureKind::NotFound => match err {
                CatalogError::MissingId => CoreError::BadRequest(err.to_string()),
                _ => CoreError::NotFound(err.to_string()),
            },
            FailureKind::Load => CoreError::InternalServerError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind() {
        assert_eq!(CatalogError::Http(503).kind(), FailureKind::Load);
        assert_eq!(CatalogError::Parse("eof".into()).kind(), FailureKind::Load);
        assert_eq!(CatalogError::MissingId.kind(), FailureKind::NotFound);
        assert_eq!(
            CatalogError::NotFound("x".into()).kind(),
            FailureKind::NotFound
        );
    }

    #[test]
    fn test_core_error_status() {
        let resp = CoreError::from(CatalogError::MissingId).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = CoreError::from(CatalogError::NotFound("a".into())).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = CoreError::from(CatalogError::Io("boom".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
