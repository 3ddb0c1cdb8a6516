//! 商品列表页

pub mod handler;
pub mod model;
pub mod page;
pub mod reveal;
pub mod service;
pub mod view;
