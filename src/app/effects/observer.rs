//! 通用滚动显现（`visible` 类）
//!
//! 与商品卡片的显现规则相互独立：这里按元素与视口的相交比例判断，
//! 视口底部向内收缩 50px，比例达到 0.1 即显现。

use super::{Rect, RevealSet};

/// 相交比例阈值
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// 视口底部收缩量（px）
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;

/// 需要观察的动画类
pub const ANIMATED_CLASSES: [&str; 4] = ["fade-in", "slide-in-left", "slide-in-right", "scale-in"];

/// 页面脚本收集动画元素用的 CSS 选择器，顺序决定元素下标
pub fn animated_selector() -> String {
    ANIMATED_CLASSES
        .iter()
        .map(|class| format!(".{}", class))
        .collect::<Vec<_>>()
        .join(", ")
}

/// 元素与（收缩后）视口的相交比例
pub fn intersection_ratio(rect: Rect, viewport_height: f64) -> f64 {
    let root_bottom = (viewport_height - REVEAL_BOTTOM_MARGIN).max(0.0);
    let visible_top = rect.top.max(0.0);
    let visible_bottom = rect.bottom.min(root_bottom);
    let height = rect.height();

    if height <= 0.0 {
        // 零高度元素落在视口内即视为完全相交
        return if rect.top >= 0.0 && rect.top <= root_bottom { 1.0 } else { 0.0 };
    }
    ((visible_bottom - visible_top).max(0.0) / height).min(1.0)
}

pub fn crosses_threshold(rect: Rect, viewport_height: f64) -> bool {
    intersection_ratio(rect, viewport_height) >= REVEAL_THRESHOLD
}

/// 观察一组元素，只增不减地加上 `visible`
#[derive(Debug, Clone, Default)]
pub struct ElementObserver {
    visible: RevealSet,
}

impl ElementObserver {
    pub fn new(count: usize) -> Self {
        Self {
            visible: RevealSet::new(count),
        }
    }

    /// 返回本次新显现的元素下标
    pub fn observe(&mut self, rects: &[Rect], viewport_height: f64) -> Vec<usize> {
        self.visible
            .mark_where(rects, |rect| crosses_threshold(rect, viewport_height))
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.is_marked(index)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.marked_count()
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible.marked_indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        // 视口 800，有效底边 750
        assert_eq!(intersection_ratio(Rect::new(100.0, 300.0), 800.0), 1.0);
        assert_eq!(intersection_ratio(Rect::new(700.0, 800.0), 800.0), 0.5);
        assert_eq!(intersection_ratio(Rect::new(760.0, 900.0), 800.0), 0.0);
        assert_eq!(intersection_ratio(Rect::new(-150.0, 50.0), 800.0), 0.25);
    }

    #[test]
    fn test_threshold_uses_bottom_margin() {
        // 100px 高的元素在底边露出 8px，不足 0.1
        assert!(!crosses_threshold(Rect::new(742.0, 842.0), 800.0));
        assert!(crosses_threshold(Rect::new(740.0, 840.0), 800.0));
    }

    #[test]
    fn test_selector() {
        assert_eq!(
            animated_selector(),
            ".fade-in, .slide-in-left, .slide-in-right, .scale-in"
        );
    }

    #[test]
    fn test_observer_is_monotonic() {
        let mut observer = ElementObserver::new(2);
        let on_screen = [Rect::new(100.0, 200.0), Rect::new(1200.0, 1300.0)];
        assert_eq!(observer.observe(&on_screen, 800.0), vec![0]);

        let scrolled = [Rect::new(-900.0, -800.0), Rect::new(200.0, 300.0)];
        assert_eq!(observer.observe(&scrolled, 800.0), vec![1]);
        assert!(observer.is_visible(0));
        assert_eq!(observer.visible_count(), 2);
        assert_eq!(observer.visible_indices(), vec![0, 1]);
    }
}
