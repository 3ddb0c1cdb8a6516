//! # Taqdir Tech Audio 商品目录
//!
//! 这个库提供音频商品目录站点的全部页面逻辑，包括：
//! - 商品列表页与卡片滚动显现
//! - 按 URL 参数渲染的商品详情页
//! - 滚动进度条、视差与元素显现效果
//! - 基于关键词的本地聊天挂件
//!
//! 页面逻辑都以视图模型和状态组件表达，不依赖浏览器即可测试；
//! `catalog_server` 二进制用 axum 把它们渲染成 HTML，并为每个页面登记会话，
//! 页面脚本回传的测量和聊天事件由会话里的同一批组件处理。

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod utils;

pub use app::catalog::model::{Product, ProductCatalog, StatField};
pub use app::{router, AppState};
pub use crate::core::config::AppConfig;
pub use crate::core::error::{CatalogError, CoreError, FailureKind};
