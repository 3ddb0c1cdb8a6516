//! 列表页组件
//!
//! 一次页面访问构造一个 [`CatalogPage`]：先显示加载占位，拉取完成后替换为卡片，
//! 等待一小段时间后开始响应滚动，并初始化页面的滚动效果。
//! 页面渲染后它保存在页面会话里，由页面脚本发回的测量结果驱动。

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::reveal::CardReveal;
use super::service::CatalogLoader;
use super::view::{render_catalog, CatalogView};
use crate::app::effects::{Rect, ScrollEffects, ScrollFrame};
use crate::core::scheduler::Scheduler;

pub struct CatalogPage {
    loader: CatalogLoader,
    scheduler: Arc<dyn Scheduler>,
    reveal_delay: Duration,
    view: CatalogView,
    reveal: CardReveal,
    armed: bool,
    effects: Option<ScrollEffects>,
}

impl CatalogPage {
    pub fn new(loader: CatalogLoader, scheduler: Arc<dyn Scheduler>, reveal_delay: Duration) -> Self {
        Self {
            loader,
            scheduler,
            reveal_delay,
            view: CatalogView::Loading,
            reveal: CardReveal::default(),
            armed: false,
            effects: None,
        }
    }

    /// 拉取商品并渲染卡片
    pub async fn load(&mut self) {
        self.view = self.loader.load().await;
        self.reveal = CardReveal::new(self.view.cards().len());
        self.armed = false;
    }

    /// 等待后做首次显现扫描，之后 scroll/resize 才生效
    ///
    /// 加载失败时不做任何事。`card_rects` 与 `frame` 是等待结束时的测量结果。
    pub async fn settle(&mut self, card_rects: &[Rect], frame: &ScrollFrame) -> Vec<usize> {
        if !matches!(self.view, CatalogView::Cards(_)) {
            return Vec::new();
        }

        self.scheduler.delay(self.reveal_delay).await;
        self.armed = true;
        let newly = self.reveal.reveal(card_rects, frame.viewport_height);
        self.effects = Some(ScrollEffects::init(frame));
        debug!(shown = newly.len(), "首次显现扫描完成");
        newly
    }

    /// 滚动时重新扫描卡片并更新滚动效果
    pub fn on_scroll(&mut self, card_rects: &[Rect], frame: &ScrollFrame) -> Vec<usize> {
        if !self.armed {
            return Vec::new();
        }
        if let Some(effects) = self.effects.as_mut() {
            effects.on_scroll(frame);
        }
        self.reveal.reveal(card_rects, frame.viewport_height)
    }

    /// 窗口尺寸变化时重新扫描卡片
    pub fn on_resize(&mut self, card_rects: &[Rect], frame: &ScrollFrame) -> Vec<usize> {
        if !self.armed {
            return Vec::new();
        }
        if let Some(effects) = self.effects.as_mut() {
            effects.on_resize(frame);
        }
        self.reveal.reveal(card_rects, frame.viewport_height)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn reveal(&self) -> &CardReveal {
        &self.reveal
    }

    pub fn effects(&self) -> Option<&ScrollEffects> {
        self.effects.as_ref()
    }

    /// 当前 `#productList` 的内容
    pub fn render(&self) -> String {
        render_catalog(&self.view, &self.reveal)
    }
}
