//! 应用层：列表页、详情页、滚动效果、聊天挂件
//!
//! 路由：
//! - `GET /`、`GET /index.html` 商品列表
//! - `GET /detail.html?id=..` 商品详情
//! - `GET /api/products`、`GET /api/products/:id` 商品 JSON
//! - `POST /api/chat` 聊天回复
//! - `POST /api/session/:id/..` 页面脚本回传测量与聊天事件
//! - `GET /health` 健康检查
//! - `/assets/*` 静态资源（含 `data.json` 与 `catalog.js`）

pub mod catalog;
pub mod chat;
pub mod detail;
pub mod effects;
pub mod layout;
pub mod session;

use axum::{
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::core::config::AppConfig;
use crate::core::middleware::request_logging_middleware;
use crate::core::scheduler::Scheduler;
use crate::infrastructure::data_source::{FileProductSource, ProductSource};
use catalog::service::CatalogLoader;
use chat::service::ChatService;
use chat::widget::ChatWidget;
use detail::service::DetailLoader;
use layout::PageShell;
use session::{PageBehaviour, PageSession, SessionStore};

/// 默认的卡片首次显现等待
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(300);
/// 默认的页面会话容量
pub const DEFAULT_SESSION_CAPACITY: usize = 1024;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogLoader,
    pub detail: DetailLoader,
    pub chat: ChatService,
    pub sessions: SessionStore,
    pub scheduler: Arc<dyn Scheduler>,
    pub reveal_delay: Duration,
    pub reply_delay: (Duration, Duration),
}

impl AppState {
    pub fn new(
        source: Arc<dyn ProductSource>,
        scheduler: Arc<dyn Scheduler>,
        reply_delay: (Duration, Duration),
    ) -> Self {
        Self {
            catalog: CatalogLoader::new(source.clone()),
            detail: DetailLoader::new(source),
            chat: ChatService::new(scheduler.clone(), reply_delay),
            sessions: SessionStore::new(DEFAULT_SESSION_CAPACITY),
            scheduler,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            reply_delay,
        }
    }

    pub fn with_reveal_delay(mut self, reveal_delay: Duration) -> Self {
        self.reveal_delay = reveal_delay;
        self
    }

    pub fn with_session_capacity(mut self, capacity: usize) -> Self {
        self.sessions = SessionStore::new(capacity);
        self
    }

    pub fn from_config(config: &AppConfig, scheduler: Arc<dyn Scheduler>) -> Self {
        let source = Arc::new(FileProductSource::new(&config.catalog.data_path));
        Self::new(source, scheduler, config.chat.reply_delay_range())
            .with_reveal_delay(config.catalog.reveal_delay())
            .with_session_capacity(config.session.capacity)
    }
}

/// 登记页面会话，并用页面外壳包裹主容器内容
///
/// 聊天挂件按会话初始状态渲染，之后的交互都落在同一个实例上。
pub(crate) async fn render_page(
    state: &AppState,
    title: &str,
    container_id: &str,
    content: String,
    behaviour: PageBehaviour,
) -> String {
    let id = Uuid::new_v4();
    let chat = ChatWidget::new(state.reply_delay);
    let html = {
        let mut rng = rand::thread_rng();
        PageShell::new(&mut rng, id, title, container_id, content, &chat).render()
    };
    state
        .sessions
        .insert(id, PageSession::new(behaviour, chat))
        .await;
    html
}

/// 健康检查
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// 组装路由
pub fn router(state: AppState, assets_dir: &Path, timeout: Duration) -> Router {
    Router::new()
        .route("/", get(catalog::handler::catalog_page))
        .route("/index.html", get(catalog::handler::catalog_page))
        .route("/detail.html", get(detail::handler::detail_page))
        .route("/api/products", get(catalog::handler::list_products))
        .route("/api/products/:id", get(catalog::handler::get_product))
        .route("/api/chat", post(chat::handler::post_chat))
        .route("/api/session/:id/settle", post(session::handler::settle))
        .route("/api/session/:id/scroll", post(session::handler::scroll))
        .route("/api/session/:id/resize", post(session::handler::resize))
        .route("/api/session/:id/chat/events", post(session::handler::chat_event))
        .route("/api/session/:id/chat/messages", post(session::handler::chat_message))
        .route("/health", get(health_check))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::ImmediateScheduler;

    #[tokio::test]
    async fn test_state_from_config() {
        let mut config = AppConfig::default();
        config.catalog.reveal_delay_ms = 150;
        config.session.capacity = 2;

        let state = AppState::from_config(&config, Arc::new(ImmediateScheduler::new()));
        assert_eq!(state.reveal_delay, Duration::from_millis(150));
        assert_eq!(
            state.reply_delay,
            (Duration::from_millis(1000), Duration::from_millis(2000))
        );
        assert!(state.sessions.is_empty().await);
    }
}
