//! 聊天挂件渲染

use super::widget::{ChatMessage, ChatWidget, Sender};
use crate::utils::html_escape;

const GREETING: &str =
    "Halo! Selamat datang di Taqdir Tech Audio. Tanya apa saja soal headphone, earbud, harga, atau rekomendasi.";

fn render_message(message: &ChatMessage) -> String {
    let sender = match message.sender {
        Sender::User => "user",
        Sender::Bot => "bot",
    };
    format!(
        r#"<div class="message {}-message"><div class="message-content"><p>{}</p></div><div class="message-time">{}</div></div>"#,
        sender,
        html_escape(&message.text),
        html_escape(&message.time)
    )
}

/// 渲染悬浮按钮与弹窗
///
/// 外层默认 `hidden`，由页面脚本接管表单后再显示；表单本身不会提交到页面地址。
pub fn render_widget(widget: &ChatWidget) -> String {
    let popup_class = if widget.is_open() {
        "chat-popup show"
    } else {
        "chat-popup"
    };
    let badge = if widget.badge_visible() {
        r#"<span class="chat-badge">1</span>"#
    } else {
        ""
    };
    let greeting = ChatMessage::new(Sender::Bot, GREETING);
    let messages: String = std::iter::once(&greeting)
        .chain(widget.messages())
        .map(render_message)
        .collect();

    format!(
        r#"<div id="chatWidget" class="chat-widget" hidden>
<button id="chatButton" class="chat-button" aria-label="Chat">💬{badge}</button>
<div id="chatPopup" class="{popup_class}">
  <div class="chat-header"><span>Taqdir Tech Audio</span><button id="chatClose" class="chat-close" aria-label="Tutup">&times;</button></div>
  <div id="chatMessages" class="chat-messages">{messages}</div>
  <form id="chatForm" class="chat-form"><input id="chatInput" name="message" autocomplete="off" placeholder="Ketik pesan..."><button type="submit">Kirim</button></form>
</div>
</div>"#,
        badge = badge,
        popup_class = popup_class,
        messages = messages,
    )
}
