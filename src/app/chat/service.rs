//! 聊天回复服务（`POST /api/chat`）

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::rules::{self, Topic};
use super::widget::random_delay;
use crate::core::error::CoreError;
use crate::core::scheduler::Scheduler;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub topic: Topic,
    pub reply: String,
    pub delay_ms: u64,
}

#[derive(Clone)]
pub struct ChatService {
    scheduler: Arc<dyn Scheduler>,
    reply_delay: (Duration, Duration),
}

impl ChatService {
    pub fn new(scheduler: Arc<dyn Scheduler>, reply_delay: (Duration, Duration)) -> Self {
        Self {
            scheduler,
            reply_delay,
        }
    }

    /// 选出回复，等待模拟延迟后返回
    pub async fn reply(&self, message: &str) -> Result<ChatReply, CoreError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(CoreError::BadRequest("Pesan tidak boleh kosong".to_string()));
        }

        let (topic, reply, delay) = {
            let mut rng = rand::thread_rng();
            let (topic, reply) = rules::respond(message, &mut rng);
            let (min, max) = self.reply_delay;
            (topic, reply, random_delay(&mut rng, min, max))
        };

        self.scheduler.delay(delay).await;
        info!(?topic, delay_ms = delay.as_millis() as u64, "聊天回复已生成");

        Ok(ChatReply {
            topic,
            reply: reply.to_string(),
            delay_ms: delay.as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::ImmediateScheduler;

    fn service(scheduler: &ImmediateScheduler) -> ChatService {
        ChatService::new(
            Arc::new(scheduler.clone()),
            (Duration::from_millis(1000), Duration::from_millis(2000)),
        )
    }

    #[tokio::test]
    async fn test_price_reply() {
        let scheduler = ImmediateScheduler::new();
        let reply = service(&scheduler).reply("harga earbud?").await.unwrap();
        // "earbud" 命中产品规则，优先级更高
        assert_eq!(reply.topic, Topic::Product);

        let reply = service(&scheduler).reply("harga?").await.unwrap();
        assert_eq!(reply.topic, Topic::Price);
        assert!(rules::responses_for(Topic::Price).contains(&reply.reply.as_str()));
        assert!((1000..2000).contains(&reply.delay_ms));
        assert_eq!(scheduler.requested().len(), 2);
    }

    #[tokio::test]
    async fn test_blank_message_rejected_without_delay() {
        let scheduler = ImmediateScheduler::new();
        let result = service(&scheduler).reply("   ").await;
        assert!(matches!(result, Err(CoreError::BadRequest(_))));
        assert!(scheduler.requested().is_empty());
    }
}
