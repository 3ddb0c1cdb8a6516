//! 页面会话
//!
//! 每渲染一次列表页或详情页都登记一个会话。页面脚本把 scroll/resize
//! 的测量结果和聊天挂件事件发回来，会话里的 [`CatalogPage`]、
//! [`ScrollEffects`] 与 [`ChatWidget`] 计算结果，再以 [`PagePatch`] /
//! [`ChatUpdate`] 的形式交给脚本应用到 DOM 上。

pub mod handler;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::app::catalog::page::CatalogPage;
use crate::app::chat::rules::Topic;
use crate::app::chat::widget::{ChatEvent, ChatMessage, ChatWidget, WidgetCommand, WidgetState};
use crate::app::effects::{Rect, ScrollEffects, ScrollFrame};
use crate::core::error::CoreError;
use crate::core::scheduler::Scheduler;

/// 页面脚本发回的一次测量
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrameRequest {
    #[serde(flatten)]
    pub frame: ScrollFrame,
    /// `#productList .product` 的位置，详情页为空
    #[serde(default)]
    pub cards: Vec<Rect>,
}

/// 需要应用到页面上的状态
///
/// 下标集合都是累计结果，脚本只加类不减类。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PagePatch {
    /// 已加 `show` 的卡片下标
    pub shown_cards: Vec<usize>,
    /// 已加 `visible` 的动画元素下标
    pub visible: Vec<usize>,
    /// `#scrollProgress` 的宽度，效果尚未初始化时为 `None`
    pub progress_width: Option<String>,
    /// 每个 `.parallax-element` 的 transform
    pub parallax: Vec<Option<String>>,
}

impl PagePatch {
    fn with_effects(mut self, effects: Option<&ScrollEffects>) -> Self {
        if let Some(effects) = effects {
            self.progress_width = Some(effects.progress().width_css());
            self.parallax = effects
                .parallax()
                .iter()
                .map(|layer| layer.transform_css())
                .collect();
            self.visible = effects.observer().visible_indices();
        }
        self
    }
}

/// 页面部分的行为
pub enum PageBehaviour {
    Catalog(Box<CatalogPage>),
    /// 详情页只有滚动效果，首次测量时初始化
    Detail(Option<ScrollEffects>),
}

impl PageBehaviour {
    fn patch(&self) -> PagePatch {
        match self {
            PageBehaviour::Catalog(page) => PagePatch {
                shown_cards: page.reveal().shown_indices(),
                ..Default::default()
            }
            .with_effects(page.effects()),
            PageBehaviour::Detail(effects) => PagePatch::default().with_effects(effects.as_ref()),
        }
    }
}

/// 聊天事件的处理结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatUpdate {
    pub state: WidgetState,
    pub badge_visible: bool,
    pub commands: Vec<WidgetCommand>,
}

/// 一次提问的结果
#[derive(Debug, Clone, Serialize)]
pub struct ChatExchange {
    pub topic: Topic,
    pub question: ChatMessage,
    pub reply: ChatMessage,
}

/// 一个已渲染页面的全部交互状态
///
/// 页面与聊天分开加锁，聊天回复等待期间滚动仍能处理。
pub struct PageSession {
    page: Mutex<PageBehaviour>,
    chat: Mutex<ChatWidget>,
}

impl PageSession {
    pub fn new(page: PageBehaviour, chat: ChatWidget) -> Self {
        Self {
            page: Mutex::new(page),
            chat: Mutex::new(chat),
        }
    }

    /// 页面就绪后的第一次测量
    ///
    /// 列表页会先经调度器等待一段时间再做首次显现扫描；
    /// 详情页直接初始化滚动效果。重复调用只刷新一次滚动状态。
    pub async fn settle(&self, request: &FrameRequest) -> PagePatch {
        let mut page = self.page.lock().await;
        match &mut *page {
            PageBehaviour::Catalog(catalog) => {
                if catalog.is_armed() {
                    catalog.on_scroll(&request.cards, &request.frame);
                } else {
                    catalog.settle(&request.cards, &request.frame).await;
                }
            }
            PageBehaviour::Detail(Some(effects)) => effects.on_scroll(&request.frame),
            PageBehaviour::Detail(slot @ None) => *slot = Some(ScrollEffects::init(&request.frame)),
        }
        page.patch()
    }

    pub async fn scroll(&self, request: &FrameRequest) -> PagePatch {
        let mut page = self.page.lock().await;
        match &mut *page {
            PageBehaviour::Catalog(catalog) => {
                catalog.on_scroll(&request.cards, &request.frame);
            }
            PageBehaviour::Detail(Some(effects)) => effects.on_scroll(&request.frame),
            PageBehaviour::Detail(None) => {}
        }
        page.patch()
    }

    pub async fn resize(&self, request: &FrameRequest) -> PagePatch {
        let mut page = self.page.lock().await;
        match &mut *page {
            PageBehaviour::Catalog(catalog) => {
                catalog.on_resize(&request.cards, &request.frame);
            }
            PageBehaviour::Detail(Some(effects)) => effects.on_resize(&request.frame),
            PageBehaviour::Detail(None) => {}
        }
        page.patch()
    }

    pub async fn chat_event(&self, event: ChatEvent) -> ChatUpdate {
        let mut chat = self.chat.lock().await;
        let commands = chat.handle(event);
        ChatUpdate {
            state: chat.state(),
            badge_visible: chat.badge_visible(),
            commands,
        }
    }

    /// 提交一条消息，等待模拟延迟后返回回复
    ///
    /// 挂件关闭或输入为空白时拒绝，不追加任何消息。
    pub async fn chat_message(
        &self,
        input: &str,
        scheduler: &dyn Scheduler,
    ) -> Result<ChatExchange, CoreError> {
        let (pending, question) = {
            let mut chat = self.chat.lock().await;
            if !chat.is_open() {
                return Err(CoreError::BadRequest("Chat belum dibuka".to_string()));
            }
            let pending = chat
                .submit(input)
                .ok_or_else(|| CoreError::BadRequest("Pesan tidak boleh kosong".to_string()))?;
            let question = chat.messages().last().cloned();
            (pending, question)
        };
        let question = question
            .ok_or_else(|| CoreError::InternalServerError("用户消息未记录".to_string()))?;

        scheduler.delay(pending.delay).await;

        let topic = pending.topic;
        let reply = self.chat.lock().await.deliver(pending);
        Ok(ChatExchange {
            topic,
            question,
            reply,
        })
    }

    pub async fn chat_messages(&self) -> Vec<ChatMessage> {
        self.chat.lock().await.messages().to_vec()
    }
}

#[derive(Default)]
struct SessionMap {
    sessions: HashMap<Uuid, Arc<PageSession>>,
    order: VecDeque<Uuid>,
}

/// 有上限的会话表，满了以后淘汰最早登记的会话
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<SessionMap>>,
    capacity: usize,
}

impl SessionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionMap::default())),
            capacity: capacity.max(1),
        }
    }

    pub async fn insert(&self, id: Uuid, session: PageSession) {
        let mut map = self.inner.lock().await;
        while map.order.len() >= self.capacity {
            if let Some(oldest) = map.order.pop_front() {
                map.sessions.remove(&oldest);
                debug!(session = %oldest, "淘汰最早的页面会话");
            }
        }
        map.sessions.insert(id, Arc::new(session));
        map.order.push_back(id);
        info!(session = %id, active = map.order.len(), "登记页面会话");
    }

    pub async fn get(&self, id: Uuid) -> Result<Arc<PageSession>, CoreError> {
        self.inner
            .lock()
            .await
            .sessions
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("Sesi {} tidak ditemukan", id)))
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog::model::fixtures::product;
    use crate::app::catalog::service::CatalogLoader;
    use crate::app::chat::rules;
    use crate::app::chat::widget::{Sender, FOCUS_DELAY};
    use crate::core::scheduler::ImmediateScheduler;
    use crate::infrastructure::data_source::InMemoryProductSource;
    use rand::{rngs::StdRng, SeedableRng};
    use std::time::Duration;

    fn chat() -> ChatWidget {
        ChatWidget::with_rng(
            (Duration::from_millis(1000), Duration::from_millis(2000)),
            StdRng::seed_from_u64(5),
        )
    }

    async fn catalog_session(scheduler: &ImmediateScheduler) -> PageSession {
        let products: Vec<_> = ["a", "b", "c"].iter().map(|id| product(id, id)).collect();
        let mut page = CatalogPage::new(
            CatalogLoader::new(Arc::new(InMemoryProductSource::from_products(&products))),
            Arc::new(scheduler.clone()),
            Duration::from_millis(300),
        );
        page.load().await;
        PageSession::new(PageBehaviour::Catalog(Box::new(page)), chat())
    }

    fn request(offset: f64) -> FrameRequest {
        FrameRequest {
            frame: ScrollFrame {
                scroll_top: offset,
                scroll_height: 3000.0,
                viewport_height: 1000.0,
                parallax_rects: vec![Rect::new(100.0 - offset, 300.0 - offset)],
                animated_rects: vec![Rect::new(50.0 - offset, 150.0 - offset)],
            },
            cards: (0..3)
                .map(|i| Rect::new(i as f64 * 700.0 - offset, i as f64 * 700.0 + 500.0 - offset))
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_catalog_session_reveals_cards() {
        let scheduler = ImmediateScheduler::new();
        let session = catalog_session(&scheduler).await;

        // 首次测量前的滚动不显现卡片
        let early = session.scroll(&request(0.0)).await;
        assert!(early.shown_cards.is_empty());
        assert_eq!(early.progress_width, None);

        let settled = session.settle(&request(0.0)).await;
        assert_eq!(settled.shown_cards, vec![0, 1]);
        assert_eq!(settled.visible, vec![0]);
        assert_eq!(settled.progress_width.as_deref(), Some("0%"));
        assert_eq!(scheduler.requested(), vec![Duration::from_millis(300)]);

        let scrolled = session.scroll(&request(1000.0)).await;
        assert_eq!(scrolled.shown_cards, vec![0, 1, 2]);
        assert_eq!(scrolled.progress_width.as_deref(), Some("50%"));
        assert_eq!(scrolled.parallax, vec![Some("translateY(-450px)".to_string())]);

        // 再次 settle 不会重复等待
        session.settle(&request(0.0)).await;
        assert_eq!(scheduler.requested().len(), 1);
    }

    #[tokio::test]
    async fn test_detail_session_initialises_effects() {
        let session = PageSession::new(PageBehaviour::Detail(None), chat());
        assert_eq!(session.resize(&request(0.0)).await, PagePatch::default());

        let patch = session.settle(&request(0.0)).await;
        assert!(patch.shown_cards.is_empty());
        assert_eq!(patch.visible, vec![0]);
        assert_eq!(patch.parallax, vec![None]);

        let resized = session.resize(&request(2000.0)).await;
        assert_eq!(resized.progress_width.as_deref(), Some("100%"));
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let scheduler = ImmediateScheduler::new();
        let session = PageSession::new(PageBehaviour::Detail(None), chat());

        let closed = session.chat_message("harga", &scheduler).await;
        assert!(matches!(closed, Err(CoreError::BadRequest(_))));

        let update = session.chat_event(ChatEvent::TriggerClick).await;
        assert_eq!(update.state, WidgetState::Open);
        assert!(!update.badge_visible);
        assert_eq!(
            update.commands,
            vec![
                WidgetCommand::HideBadge,
                WidgetCommand::FocusInput { after: FOCUS_DELAY }
            ]
        );

        let blank = session.chat_message("   ", &scheduler).await;
        assert!(matches!(blank, Err(CoreError::BadRequest(_))));
        assert!(scheduler.requested().is_empty());

        let exchange = session.chat_message(" harga? ", &scheduler).await.unwrap();
        assert_eq!(exchange.topic, Topic::Price);
        assert_eq!(exchange.question.text, "harga?");
        assert!(rules::responses_for(Topic::Price).contains(&exchange.reply.text.as_str()));

        let delays = scheduler.requested();
        assert_eq!(delays.len(), 1);
        assert!(delays[0] >= Duration::from_millis(1000) && delays[0] < Duration::from_millis(2000));

        let senders: Vec<_> = session.chat_messages().await.iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Bot]);
    }

    #[tokio::test]
    async fn test_store_evicts_oldest() {
        let store = SessionStore::new(2);
        let ids: Vec<_> = (0..3).map(|_| Uuid::new_v4()).collect();
        for id in &ids {
            store
                .insert(*id, PageSession::new(PageBehaviour::Detail(None), chat()))
                .await;
        }

        assert_eq!(store.len().await, 2);
        assert!(matches!(store.get(ids[0]).await, Err(CoreError::NotFound(_))));
        assert!(store.get(ids[2]).await.is_ok());
    }
}
