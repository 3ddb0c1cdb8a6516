//! 商品目录服务器

use audio_catalog::core::config::AppConfig;
use audio_catalog::core::scheduler::TokioScheduler;
use audio_catalog::infrastructure::logger::Logger;
use audio_catalog::{router, AppState};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个参数可指定配置文件
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;
    config.validate()?;

    let _log_guard = Logger::init(&config.logging)?;
    info!(
        data = %config.catalog.data_path.display(),
        assets = %config.catalog.assets_dir.display(),
        reveal_delay_ms = config.catalog.reveal_delay_ms,
        sessions = config.session.capacity,
        "启动商品目录服务器..."
    );

    let state = AppState::from_config(&config, Arc::new(TokioScheduler));
    let app = router(
        state,
        &config.catalog.assets_dir,
        Duration::from_secs(config.http.timeout_seconds),
    );

    let address = config.http.socket_address();
    let listener = TcpListener::bind(&address).await?;

    info!("🚀 服务器运行在 http://{}", address);
    info!("📖 可用的路由:");
    info!("   GET  /                   - 商品列表");
    info!("   GET  /detail.html?id=..  - 商品详情");
    info!("   GET  /api/products       - 商品 JSON");
    info!("   POST /api/chat           - 聊天回复");
    info!("   POST /api/session/:id/*  - 页面脚本回传");
    info!("   GET  /assets/*           - 静态资源");
    info!("   GET  /health             - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "无法监听退出信号");
    }
}
