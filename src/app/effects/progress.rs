//! 顶部滚动进度条

/// 滚动进度百分比，范围 [0, 100]
///
/// 内容不足一屏（无可滚动距离）时为 0。
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollProgress {
    percent: f64,
}

impl ScrollProgress {
    pub fn update(&mut self, scroll_top: f64, scroll_height: f64, viewport_height: f64) {
        self.percent = scroll_percent(scroll_top, scroll_height, viewport_height);
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// 进度条的 CSS 宽度
    pub fn width_css(&self) -> String {
        format!("{}%", self.percent)
    }
}
