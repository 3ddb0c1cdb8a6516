//! 详情页视图模型与渲染

use serde::Serialize;
use std::time::Duration;

use crate::app::catalog::model::{Product, StatField};
use crate::app::catalog::view::{render_stats, render_status, FAILURE_TEXT};
use crate::utils::{css_seconds, html_escape, INDEX_PAGE};

pub const LOADING_TEXT: &str = "Loading Product Details...";
pub const MISSING_ID_TEXT: &str = "ID Tidak Ditemukan!";
pub const NOT_FOUND_TEXT: &str = "Produk Tidak Ditemukan!";
pub const BACK_LABEL: &str = "← Kembali";

/// 段落进场动画的间隔
pub const PARAGRAPH_STAGGER: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub text: String,
    pub animation_delay: Duration,
}

/// 按换行拆分描述，丢弃空段落
///
/// 连续换行视为一个分隔符，开头的换行仍产生一个空的首段。
/// 延迟按段落在拆分结果中的位置计算，保持单调递增。
pub fn split_paragraphs(description: &str) -> Vec<Paragraph> {
    description
        .split(['\n', '\r'])
        .enumerate()
        .filter(|(position, segment)| *position == 0 || !segment.is_empty())
        .map(|(_, segment)| segment)
        .enumerate()
        .filter_map(|(index, segment)| {
            let text = segment.trim();
            (!text.is_empty()).then(|| Paragraph {
                text: text.to_string(),
                animation_delay: PARAGRAPH_STAGGER * index as u32,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailViewModel {
    pub accent: String,
    pub hero_image: String,
    pub back_href: &'static str,
    pub title: String,
    pub subtitle: String,
    pub stats: Vec<StatField>,
    pub paragraphs: Vec<Paragraph>,
}

impl DetailViewModel {
    pub fn new(product: &Product) -> Self {
        Self {
            accent: product.id.clone(),
            hero_image: product.image.clone(),
            back_href: INDEX_PAGE,
            title: product.title.clone(),
            subtitle: product.subtitle.clone(),
            stats: StatField::for_product(product),
            paragraphs: split_paragraphs(&product.detail_description),
        }
    }
}

/// 详情容器的状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Loading,
    MissingId,
    NotFound,
    Failed,
    Loaded(Box<DetailViewModel>),
}

impl DetailView {
    pub fn model(&self) -> Option<&DetailViewModel> {
        match self {
            DetailView::Loaded(model) => Some(model.as_ref()),
            _ => None,
        }
    }
}

fn render_paragraph(paragraph: &Paragraph) -> String {
    format!(
        r#"<p style="opacity: 0; transform: translateY(20px); animation: slideUp 0.6s cubic-bezier(0.4, 0, 0.2, 1) forwards; animation-delay: {}">{}</p>"#,
        css_seconds(paragraph.animation_delay),
        html_escape(&paragraph.text)
    )
}

fn render_model(model: &DetailViewModel) -> String {
    let paragraphs: String = model.paragraphs.iter().map(render_paragraph).collect();
    format!(
        r#"<div class="detail-card" data-accent="{accent}">
  <div class="detail-hero" style="background-image: url('{image}')"></div>
  <div class="detail-body">
    <a href="{back}" class="back">{back_label}</a>
    <h1>{title}</h1>
    <p>{subtitle}</p>
    <div id="detailBody">{paragraphs}</div>
    <div class="detail-stats">{stats}</div>
  </div>
</div>"#,
        accent = html_escape(&model.accent),
        image = html_escape(&model.hero_image),
        back = model.back_href,
        back_label = BACK_LABEL,
        title = html_escape(&model.title),
        subtitle = html_escape(&model.subtitle),
        paragraphs = paragraphs,
        stats = render_stats(&model.stats),
    )
}

/// 渲染 `#productDetail` 的内容
pub fn render_detail(view: &DetailView) -> String {
    match view {
        DetailView::Loading => render_status(LOADING_TEXT, true),
        DetailView::MissingId => render_status(MISSING_ID_TEXT, false),
        DetailView::NotFound => render_status(NOT_FOUND_TEXT, false),
        DetailView::Failed => render_status(FAILURE_TEXT, false),
        DetailView::Loaded(model) => render_model(model),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog::model::fixtures::product;

    #[test]
    fn test_split_on_blank_lines() {
        let paragraphs = split_paragraphs("Satu.\n\nDua.\n\n\n  Tiga.  \n");
        let texts: Vec<_> = paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["Satu.", "Dua.", "Tiga."]);

        let delays: Vec<_> = paragraphs.iter().map(|p| p.animation_delay).collect();
        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(100),
                Duration::from_millis(200)
            ]
        );
    }

    #[test]
    fn test_whitespace_only_segments_dropped() {
        let paragraphs = split_paragraphs("Satu.\n   \nDua.");
        assert_eq!(paragraphs.len(), 2);
        // 空白段落仍占一个位置，延迟保持单调
        assert!(paragraphs[1].animation_delay > paragraphs[0].animation_delay);
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n\n").is_empty());
    }

    #[test]
    fn test_leading_newline_keeps_first_slot() {
        let paragraphs = split_paragraphs("\n\nSatu.\nDua.");
        let delays: Vec<_> = paragraphs.iter().map(|p| p.animation_delay).collect();
        assert_eq!(
            delays,
            vec![Duration::from_millis(100), Duration::from_millis(200)]
        );
        assert_eq!(paragraphs[0].text, "Satu.");
    }

    #[test]
    fn test_windows_line_endings() {
        let texts: Vec<_> = split_paragraphs("A\r\n\r\nB")
            .into_iter()
            .map(|p| p.text)
            .collect();
        assert_eq!(texts, vec!["A", "B"]);
    }

    #[test]
    fn test_loaded_render() {
        let mut p = product("arc-eclipse", "Arc Eclipse");
        p.detail_description = "Bass dalam.\n\nANC adaptif.".to_string();
        let html = render_detail(&DetailView::Loaded(Box::new(DetailViewModel::new(&p))));

        assert!(html.contains(r#"data-accent="arc-eclipse""#));
        assert!(html.contains(r#"href="index.html""#));
        assert!(html.contains(BACK_LABEL));
        assert_eq!(html.matches(r#"<div class="stat">"#).count(), 5);
        assert!(html.contains(r#"<span class="value">$189</span>"#));
        assert!(html.contains("animation-delay: 0.1s\">ANC adaptif.</p>"));
    }

    #[test]
    fn test_failure_messages_are_distinct() {
        let missing = render_detail(&DetailView::MissingId);
        let not_found = render_detail(&DetailView::NotFound);
        let failed = render_detail(&DetailView::Failed);
        assert!(missing.contains(MISSING_ID_TEXT));
        assert!(not_found.contains(NOT_FOUND_TEXT));
        assert!(failed.contains(FAILURE_TEXT));
        assert_ne!(not_found, failed);
        for html in [missing, not_found, failed] {
            assert!(!html.contains("class=\"stat\""));
            assert!(!html.contains(LOADING_TEXT));
        }
    }
}
