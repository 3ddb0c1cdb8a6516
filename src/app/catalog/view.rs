//! 列表页视图模型与渲染

use serde::Serialize;
use std::time::Duration;

use super::model::{Product, StatField};
use super::reveal::CardReveal;
use crate::utils::{css_seconds, detail_url, html_escape};

pub const LOADING_TEXT: &str = "Loading Audio Collection...";
pub const FAILURE_TEXT: &str = "Gagal memuat data produk.";

/// 相邻卡片进场动画的间隔
pub const CARD_STAGGER: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub id: String,
    pub href: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub stats: Vec<StatField>,
    pub animation_delay: Duration,
}

impl CardView {
    pub fn new(index: usize, product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            href: detail_url(&product.id),
            title: product.title.clone(),
            subtitle: product.subtitle.clone(),
            image: product.image.clone(),
            stats: StatField::for_product(product),
            animation_delay: CARD_STAGGER * index as u32,
        }
    }
}

/// 列表容器的状态
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    Loading,
    Cards(Vec<CardView>),
    Failed,
}

impl CatalogView {
    pub fn from_products(products: &[Product]) -> Self {
        CatalogView::Cards(
            products
                .iter()
                .enumerate()
                .map(|(index, product)| CardView::new(index, product))
                .collect(),
        )
    }

    pub fn cards(&self) -> &[CardView] {
        match self {
            CatalogView::Cards(cards) => cards,
            _ => &[],
        }
    }
}

pub(crate) fn render_status(text: &str, spinner: bool) -> String {
    let spinner = if spinner {
        r#"<div class="loading-spinner"></div>"#
    } else {
        ""
    };
    format!(
        r#"<div class="loading-container">{}<div class="loading-text">{}</div></div>"#,
        spinner,
        html_escape(text)
    )
}

pub(crate) fn render_stats(stats: &[StatField]) -> String {
    stats
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="stat"><span class="label">{}</span><span class="value">{}</span></div>"#,
                html_escape(stat.label),
                html_escape(&stat.value)
            )
        })
        .collect()
}

fn render_card(card: &CardView, shown: bool) -> String {
    let class = if shown { "product fade-in show" } else { "product fade-in" };
    format!(
        r#"<div class="{class}" style="background-image: url('{image}'); animation-delay: {delay}"><a class="product-content" href="{href}"><h1 class="title">{title}</h1><p class="subtitle">{subtitle}</p><div class="product-stats">{stats}</div></a></div>"#,
        class = class,
        image = html_escape(&card.image),
        delay = css_seconds(card.animation_delay),
        href = html_escape(&card.href),
        title = html_escape(&card.title),
        subtitle = html_escape(&card.subtitle),
        stats = render_stats(&card.stats),
    )
}

/// 渲染 `#productList` 的内容，已显现的卡片带 `show`
pub fn render_catalog(view: &CatalogView, reveal: &CardReveal) -> String {
    match view {
        CatalogView::Loading => render_status(LOADING_TEXT, true),
        CatalogView::Failed => render_status(FAILURE_TEXT, false),
        CatalogView::Cards(cards) => cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                render_card(card, reveal.is_shown(index))
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
