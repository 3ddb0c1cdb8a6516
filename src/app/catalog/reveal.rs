//! 商品卡片的进场显现（`show` 类）
//!
//! 卡片顶部高于视口 85%、底部低于视口 15% 时显现，之后不再收回。

use crate::app::effects::{Rect, RevealSet};

pub const BAND_TOP_RATIO: f64 = 0.85;
pub const BAND_BOTTOM_RATIO: f64 = 0.15;

/// 卡片是否落在显现带内
pub fn in_reveal_band(rect: Rect, viewport_height: f64) -> bool {
    rect.top < viewport_height * BAND_TOP_RATIO && rect.bottom > viewport_height * BAND_BOTTOM_RATIO
}

#[derive(Debug, Clone, Default)]
pub struct CardReveal {
    shown: RevealSet,
}

impl CardReveal {
    pub fn new(card_count: usize) -> Self {
        Self {
            shown: RevealSet::new(card_count),
        }
    }

    /// 按当前卡片位置扫描一遍，返回新显现的卡片下标
    pub fn reveal(&mut self, rects: &[Rect], viewport_height: f64) -> Vec<usize> {
        self.shown
            .mark_where(rects, |rect| in_reveal_band(rect, viewport_height))
    }

    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.is_marked(index)
    }

    pub fn shown_count(&self) -> usize {
        self.shown.marked_count()
    }

    pub fn shown_indices(&self) -> Vec<usize> {
        self.shown.marked_indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        // 视口 1000：顶部须 < 850，底部须 > 150
        assert!(in_reveal_band(Rect::new(849.0, 1200.0), 1000.0));
        assert!(!in_reveal_band(Rect::new(850.0, 1200.0), 1000.0));
        assert!(in_reveal_band(Rect::new(-200.0, 151.0), 1000.0));
        assert!(!in_reveal_band(Rect::new(-200.0, 150.0), 1000.0));
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut reveal = CardReveal::new(3);
        let first = [
            Rect::new(100.0, 500.0),
            Rect::new(600.0, 1000.0),
            Rect::new(1100.0, 1500.0),
        ];
        assert_eq!(reveal.reveal(&first, 1000.0), vec![0, 1]);

        // 向下滚动 1200px，第一张卡片离开视口
        let scrolled: Vec<_> = first
            .iter()
            .map(|r| Rect::new(r.top - 1200.0, r.bottom - 1200.0))
            .collect();
        assert_eq!(reveal.reveal(&scrolled, 1000.0), vec![2]);
        assert!(reveal.is_shown(0));
        assert_eq!(reveal.shown_count(), 3);

        assert!(reveal.reveal(&first, 1000.0).is_empty());
    }
}
