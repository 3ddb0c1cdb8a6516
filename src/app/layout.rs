//! 页面外壳：进度条、粒子背景、聊天挂件、页面脚本
//!
//! `<body>` 上的 `data-session` 是页面会话的 id，`catalog.js`
//! 用它回传 scroll/resize 测量和聊天事件。

use rand::Rng;
use uuid::Uuid;

use super::chat::{view::render_widget, widget::ChatWidget};
use super::effects::observer::animated_selector;
use super::effects::particles::{self, Particle};
use crate::utils::html_escape;

pub const SITE_NAME: &str = "Taqdir Tech Audio";
/// 页面脚本地址
pub const PAGE_SCRIPT: &str = "/assets/catalog.js";

/// 一个完整页面需要的内容
pub struct PageShell<'a> {
    pub session_id: Uuid,
    pub title: &'a str,
    /// 主容器 id（`productList` / `productDetail`）
    pub container_id: &'a str,
    pub content: String,
    pub particles: Vec<Particle>,
    pub chat: &'a ChatWidget,
}

impl<'a> PageShell<'a> {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        session_id: Uuid,
        title: &'a str,
        container_id: &'a str,
        content: String,
        chat: &'a ChatWidget,
    ) -> Self {
        Self {
            session_id,
            title,
            container_id,
            content,
            particles: particles::generate(rng, particles::PARTICLE_COUNT),
            chat,
        }
    }

    pub fn render(&self) -> String {
        let particles: String = self
            .particles
            .iter()
            .map(|p| format!(r#"<div class="particle" style="{}"></div>"#, p.style()))
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {site}</title>
    <link rel="stylesheet" href="/assets/style.css">
    <noscript><style>.product {{ opacity: 1; transform: none; }}</style></noscript>
</head>
<body data-session="{session}" data-animated="{animated}">
    <div id="scrollProgress" class="scroll-progress" style="width: 0%"></div>
    <div id="particles" class="particles">{particles}</div>
    <div class="parallax-element hero-glow"></div>
    <header class="site-header fade-in"><a href="/index.html" class="logo">{site}</a></header>
    <main id="{container}" class="container">{content}</main>
    {chat}
    <script src="{script}" defer></script>
</body>
</html>"#,
            session = self.session_id,
            animated = html_escape(&animated_selector()),
            script = PAGE_SCRIPT,
            title = html_escape(self.title),
            site = SITE_NAME,
            particles = particles,
            container = self.container_id,
            content = self.content,
            chat = render_widget(self.chat),
        )
    }
}
