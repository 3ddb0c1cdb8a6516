//! 列表页处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Json},
};

use super::model::Product;
use super::page::CatalogPage;
use super::view::CatalogView;
use crate::app::session::PageBehaviour;
use crate::app::{render_page, AppState};
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;

/// `GET /`、`GET /index.html`
///
/// 卡片先以未显现状态发出，页面脚本回传首次测量后才加上 `show`。
pub async fn catalog_page(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let mut page = CatalogPage::new(
        state.catalog.clone(),
        state.scheduler.clone(),
        state.reveal_delay,
    );
    page.load().await;

    let status = match page.view() {
        CatalogView::Failed => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };
    let content = page.render();
    let behaviour = PageBehaviour::Catalog(Box::new(page));
    let html = render_page(&state, "Audio Collection", "productList", content, behaviour).await;
    (status, Html(html))
}

/// `GET /api/products`
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Product>>>, CoreError> {
    let catalog = state.catalog.fetch_catalog().await?;
    let message = format!("{} produk", catalog.len());
    Ok(Json(
        ApiResponse::success(catalog.into_products()).with_message(message),
    ))
}

/// `GET /api/products/:id`
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, CoreError> {
    let product = state.detail.find(Some(&id)).await?;
    Ok(Json(ApiResponse::success(product)))
}
