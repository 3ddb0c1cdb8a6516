//! 背景元素视差位移

/// 位移 = 滚动距离差 × 速度
pub const PARALLAX_SPEED: f64 = 0.5;
/// 位移绝对值达到该值后不再更新
pub const PARALLAX_MAX_OFFSET: f64 = 500.0;

/// 计算视差位移；超出上限时返回 `None`
pub fn parallax_offset(scroll_top: f64, rect_top: f64) -> Option<f64> {
    let element_top = rect_top + scroll_top;
    let offset = -(scroll_top - element_top) * PARALLAX_SPEED;
    (offset.abs() < PARALLAX_MAX_OFFSET).then_some(offset)
}

/// 单个视差元素，保留最后一次有效的位移
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParallaxLayer {
    offset: Option<f64>,
}

impl ParallaxLayer {
    pub fn update(&mut self, scroll_top: f64, rect_top: f64) {
        if let Some(offset) = parallax_offset(scroll_top, rect_top) {
            self.offset = Some(offset);
        }
    }

    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    /// `translateY(..px)`，从未更新过时为 `None`
    pub fn transform_css(&self) -> Option<String> {
        self.offset.map(|y| format!("translateY({}px)", y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_follows_rect_top() {
        assert_eq!(parallax_offset(0.0, 200.0), Some(100.0));
        assert_eq!(parallax_offset(300.0, -100.0), Some(-50.0));
    }

    #[test]
    fn test_offset_is_capped() {
        assert_eq!(parallax_offset(0.0, 1000.0), None);
        assert_eq!(parallax_offset(0.0, 999.0), Some(499.5));
    }

    #[test]
    fn test_layer_keeps_last_valid_offset() {
        let mut layer = ParallaxLayer::default();
        assert_eq!(layer.transform_css(), None);

        layer.update(0.0, 400.0);
        assert_eq!(layer.transform_css().as_deref(), Some("translateY(200px)"));

        layer.update(0.0, 5000.0);
        assert_eq!(layer.offset(), Some(200.0));
    }
}
