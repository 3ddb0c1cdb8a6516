//! 应用配置
//!
//! 配置来自 TOML 文件，缺失的段落与字段使用默认值。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 默认查找的配置文件路径
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];

/// 应用配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 商品目录配置
    pub catalog: CatalogConfig,
    /// 聊天挂件配置
    pub chat: ChatConfig,
    /// 页面会话配置
    pub session: SessionConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 商品目录配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// 商品 JSON 文件
    pub data_path: PathBuf,
    /// 静态资源目录，挂载在 /assets
    pub assets_dir: PathBuf,
    /// 卡片首次显现前的等待（毫秒）
    pub reveal_delay_ms: u64,
}

/// 聊天挂件配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// 模拟回复延迟下限（毫秒，含）
    pub min_reply_delay_ms: u64,
    /// 模拟回复延迟上限（毫秒，不含）
    pub max_reply_delay_ms: u64,
}

/// 页面会话配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// 同时保留的页面会话数量，超出后淘汰最早的
    pub capacity: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 日志文件目录，不设置时只输出到控制台
    pub log_dir: Option<PathBuf>,
    /// 日志文件名前缀
    pub file_prefix: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            timeout_seconds: 30,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("assets/data.json"),
            assets_dir: PathBuf::from("assets"),
            reveal_delay_ms: 300,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            min_reply_delay_ms: 1000,
            max_reply_delay_ms: 2000,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { capacity: 1024 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            file_prefix: "catalog".to_string(),
        }
    }
}

impl HttpConfig {
    /// `bind_address:port`
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl CatalogConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

impl ChatConfig {
    pub fn reply_delay_range(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.min_reply_delay_ms),
            Duration::from_millis(self.max_reply_delay_ms),
        )
    }
}

impl AppConfig {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 按给定路径或默认路径加载；都不存在时使用默认配置
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        for path in DEFAULT_CONFIG_PATHS {
            if Path::new(path).exists() {
                return Self::load_from_file(path);
            }
        }

        Ok(Self::default())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.catalog.data_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("商品数据路径不能为空".to_string()));
        }
        if self.session.capacity == 0 {
            return Err(ConfigError::Validation("会话容量必须大于0".to_string()));
        }
        if self.chat.min_reply_delay_ms > self.chat.max_reply_delay_ms {
            return Err(ConfigError::Validation(format!(
                "聊天回复延迟下限 {}ms 大于上限 {}ms",
                self.chat.min_reply_delay_ms, self.chat.max_reply_delay_ms
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}
