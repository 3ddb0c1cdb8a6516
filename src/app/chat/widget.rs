//! 聊天挂件状态机
//!
//! closed ⇄ open。打开状态下提交非空文本会立即追加用户消息，
//! 并在随机延迟后追加一条预设回复。等待由页面会话经调度器完成，
//! 这样等待期间挂件仍能响应关闭等事件。

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::rules::{self, Topic};
use crate::utils::serialize_millis;

/// 打开后聚焦输入框前的等待
pub const FOCUS_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatEvent {
    /// 点击悬浮按钮
    TriggerClick,
    /// 点击关闭按钮
    CloseClick,
    /// 点击挂件与按钮以外的区域
    OutsideClick,
    EscapeKey,
    /// Ctrl/Cmd + K，等同点击悬浮按钮
    Shortcut,
}

/// 状态迁移后需要页面执行的副作用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetCommand {
    HideBadge,
    FocusInput {
        #[serde(rename = "after_ms", serialize_with = "serialize_millis")]
        after: Duration,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    /// 本地时间 `HH.MM`
    pub time: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            time: Local::now().format("%H.%M").to_string(),
        }
    }
}

/// 已选定、等待投递的回复
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub topic: Topic,
    pub text: &'static str,
    pub delay: Duration,
}

/// 在 `[min, max)` 内均匀取一个延迟；区间为空时取 `min`
pub fn random_delay<R: Rng + ?Sized>(rng: &mut R, min: Duration, max: Duration) -> Duration {
    if max <= min {
        return min;
    }
    let millis = rng.gen_range(min.as_millis() as u64..max.as_millis() as u64);
    Duration::from_millis(millis)
}

pub struct ChatWidget {
    state: WidgetState,
    badge_visible: bool,
    messages: Vec<ChatMessage>,
    reply_delay: (Duration, Duration),
    rng: StdRng,
}

impl ChatWidget {
    pub fn new(reply_delay: (Duration, Duration)) -> Self {
        Self::with_rng(reply_delay, StdRng::from_entropy())
    }

    pub fn with_rng(reply_delay: (Duration, Duration), rng: StdRng) -> Self {
        Self {
            state: WidgetState::Closed,
            badge_visible: true,
            messages: Vec::new(),
            reply_delay,
            rng,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == WidgetState::Open
    }

    pub fn badge_visible(&self) -> bool {
        self.badge_visible
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// 处理一次页面事件
    pub fn handle(&mut self, event: ChatEvent) -> Vec<WidgetCommand> {
        let mut commands = Vec::new();
        match (event, self.state) {
            (ChatEvent::TriggerClick | ChatEvent::Shortcut, WidgetState::Closed) => {
                self.state = WidgetState::Open;
                if self.badge_visible {
                    self.badge_visible = false;
                    commands.push(WidgetCommand::HideBadge);
                }
                commands.push(WidgetCommand::FocusInput { after: FOCUS_DELAY });
            }
            (ChatEvent::TriggerClick | ChatEvent::Shortcut, WidgetState::Open)
            | (ChatEvent::CloseClick | ChatEvent::OutsideClick | ChatEvent::EscapeKey, _) => {
                self.state = WidgetState::Closed;
            }
        }
        debug!(?event, state = ?self.state, "聊天挂件状态更新");
        commands
    }

    /// 提交输入；关闭状态或空白输入时什么都不做
    pub fn submit(&mut self, input: &str) -> Option<PendingReply> {
        let message = input.trim();
        if !self.is_open() || message.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::new(Sender::User, message));
        let (topic, text) = rules::respond(message, &mut self.rng);
        let (min, max) = self.reply_delay;
        Some(PendingReply {
            topic,
            text,
            delay: random_delay(&mut self.rng, min, max),
        })
    }

    /// 投递回复；即使挂件已关闭也会追加，重新打开后可见
    pub fn deliver(&mut self, reply: PendingReply) -> ChatMessage {
        let message = ChatMessage::new(Sender::Bot, reply.text);
        self.messages.push(message.clone());
        message
    }
}
