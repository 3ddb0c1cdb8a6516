//! 滚动装饰效果：进度条、视差、滚动显现、漂浮粒子
//!
//! 这里只有几何计算和状态。页面脚本把每次 scroll/resize 的测量结果
//! 组装成 [`ScrollFrame`] 发回服务器，由会话里的 [`ScrollEffects`] 计算。
//! 粒子只在渲染页面时生成一次。

pub mod observer;
pub mod parallax;
pub mod particles;
pub mod progress;

use serde::Deserialize;

use observer::ElementObserver;
use parallax::ParallaxLayer;
use progress::ScrollProgress;

/// 元素相对视口的垂直范围（getBoundingClientRect 的 top/bottom）
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// 只增不减的标记集合
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    marked: Vec<bool>,
}

impl RevealSet {
    pub fn new(count: usize) -> Self {
        Self {
            marked: vec![false; count],
        }
    }

    /// 对尚未标记且满足条件的元素加标记，返回新标记的下标
    pub fn mark_where<F>(&mut self, rects: &[Rect], mut predicate: F) -> Vec<usize>
    where
        F: FnMut(Rect) -> bool,
    {
        let mut newly = Vec::new();
        for (index, rect) in rects.iter().enumerate().take(self.marked.len()) {
            if !self.marked[index] && predicate(*rect) {
                self.marked[index] = true;
                newly.push(index);
            }
        }
        newly
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.get(index).copied().unwrap_or(false)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.iter().filter(|m| **m).count()
    }

    /// 所有已标记的下标，升序
    pub fn marked_indices(&self) -> Vec<usize> {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(index, marked)| marked.then_some(index))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }
}

/// 一次 scroll/resize 时的测量结果
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScrollFrame {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
    /// `.parallax-element` 的位置，顺序与初始化时一致
    pub parallax_rects: Vec<Rect>,
    /// 带动画类元素的位置，顺序与初始化时一致
    pub animated_rects: Vec<Rect>,
}

/// 页面级滚动效果组件，每页构造一次
#[derive(Debug, Clone)]
pub struct ScrollEffects {
    progress: ScrollProgress,
    parallax: Vec<ParallaxLayer>,
    observer: ElementObserver,
}

impl ScrollEffects {
    /// 初始化：计算初始进度、首次观察动画元素
    pub fn init(frame: &ScrollFrame) -> Self {
        let mut effects = Self {
            progress: ScrollProgress::default(),
            parallax: vec![ParallaxLayer::default(); frame.parallax_rects.len()],
            observer: ElementObserver::new(frame.animated_rects.len()),
        };
        effects.update_progress(frame);
        effects.observe(frame);
        effects
    }

    pub fn on_scroll(&mut self, frame: &ScrollFrame) {
        self.update_progress(frame);
        for (layer, rect) in self.parallax.iter_mut().zip(&frame.parallax_rects) {
            layer.update(frame.scroll_top, rect.top);
        }
        self.observe(frame);
    }

    pub fn on_resize(&mut self, frame: &ScrollFrame) {
        self.update_progress(frame);
    }

    fn update_progress(&mut self, frame: &ScrollFrame) {
        self.progress
            .update(frame.scroll_top, frame.scroll_height, frame.viewport_height);
    }

    fn observe(&mut self, frame: &ScrollFrame) {
        self.observer
            .observe(&frame.animated_rects, frame.viewport_height);
    }

    pub fn progress(&self) -> &ScrollProgress {
        &self.progress
    }

    pub fn parallax(&self) -> &[ParallaxLayer] {
        &self.parallax
    }

    pub fn observer(&self) -> &ElementObserver {
        &self.observer
    }
}
