//! 延迟调度
//!
//! 页面里所有"人为等待"（卡片首次显现前的等待、聊天回复的模拟延迟、
//! 输入框聚焦）都经过 [`Scheduler`]，生产环境用 tokio 定时器，
//! 测试中注入 [`ImmediateScheduler`] 让流程同步完成。

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[async_trait]
pub trait Scheduler: Send + Sync {
    /// 等待给定时长后返回，不支持取消
    async fn delay(&self, duration: Duration);
}

/// 基于 tokio 定时器的调度器
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn delay(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// 立即返回的调度器，记录每次请求的延迟
#[derive(Debug, Clone, Default)]
pub struct ImmediateScheduler {
    requested: Arc<Mutex<Vec<Duration>>>,
}

impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 目前为止请求过的所有延迟
    pub fn requested(&self) -> Vec<Duration> {
        self.requested
            .lock()
            .map(|delays| delays.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Scheduler for ImmediateScheduler {
    async fn delay(&self, duration: Duration) {
        if let Ok(mut delays) = self.requested.lock() {
            delays.push(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_immediate_scheduler_records() {
        let scheduler = ImmediateScheduler::new();
        scheduler.delay(Duration::from_millis(300)).await;
        scheduler.delay(Duration::from_millis(1500)).await;

        assert_eq!(
            scheduler.requested(),
            vec![Duration::from_millis(300), Duration::from_millis(1500)]
        );
    }

    #[tokio::test]
    async fn test_tokio_scheduler_waits() {
        let start = tokio::time::Instant::now();
        TokioScheduler.delay(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
