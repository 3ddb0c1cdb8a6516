//! 聊天挂件：关键词规则、状态机、回复服务

pub mod handler;
pub mod rules;
pub mod service;
pub mod view;
pub mod widget;
