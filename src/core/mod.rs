//! 核心层：错误、响应、中间件、配置、调度

pub mod config;
pub mod error;
pub mod middleware;
pub mod response;
pub mod scheduler;
