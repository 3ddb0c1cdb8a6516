//! 详情页处理器

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;

use super::view::{render_detail, DetailView};
use crate::app::session::PageBehaviour;
use crate::app::{render_page, AppState};

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub id: Option<String>,
}

/// `GET /detail.html?id=..`
pub async fn detail_page(
    State(state): State<AppState>,
    Query(query): Query<DetailQuery>,
) -> (StatusCode, Html<String>) {
    let view = state.detail.load(query.id.as_deref()).await;
    let (status, title) = match &view {
        DetailView::Loaded(model) => (StatusCode::OK, model.title.clone()),
        DetailView::MissingId => (StatusCode::BAD_REQUEST, "Detail".to_string()),
        DetailView::NotFound => (StatusCode::NOT_FOUND, "Detail".to_string()),
        DetailView::Failed | DetailView::Loading => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Detail".to_string())
        }
    };
    let content = render_detail(&view);
    let html = render_page(
        &state,
        &title,
        "productDetail",
        content,
        PageBehaviour::Detail(None),
    )
    .await;
    (status, Html(html))
}
