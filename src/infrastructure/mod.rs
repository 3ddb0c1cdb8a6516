//! 基础设施层：日志、商品数据源

pub mod data_source;
pub mod logger;
