//! 商品详情页

pub mod handler;
pub mod service;
pub mod view;
