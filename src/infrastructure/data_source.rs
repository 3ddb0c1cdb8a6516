//! 商品数据源
//!
//! 每次页面访问只拉取一次完整的商品列表，没有重试。

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::catalog::model::Product;
use crate::core::error::CatalogError;

#[async_trait]
pub trait ProductSource: Send + Sync {
    /// 拉取并解析完整的商品集合
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError>;
}

/// 解析商品 JSON 数组
pub fn parse_products(body: &[u8]) -> Result<Vec<Product>, CatalogError> {
    serde_json::from_slice(body).map_err(|e| CatalogError::Parse(e.to_string()))
}

/// 从本地 JSON 文件读取
#[derive(Debug, Clone)]
pub struct FileProductSource {
    path: PathBuf,
}

impl FileProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProductSource for FileProductSource {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let body = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::Http(404)
            } else {
                CatalogError::Io(format!("{}: {}", self.path.display(), e))
            }
        })?;

        let products = parse_products(&body)?;
        debug!(path = %self.path.display(), count = products.len(), "商品数据已读取");
        Ok(products)
    }
}

/// 内存中的原始响应，用于测试和嵌入数据
#[derive(Debug, Clone)]
pub struct InMemoryProductSource {
    status: u16,
    body: String,
}

impl InMemoryProductSource {
    /// 状态 200、给定响应体
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn from_products(products: &[Product]) -> Self {
        Self::new(serde_json::to_string(products).unwrap_or_else(|_| "[]".to_string()))
    }

    /// 模拟非 2xx 响应
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

#[async_trait]
impl ProductSource for InMemoryProductSource {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        if !(200..300).contains(&self.status) {
            return Err(CatalogError::Http(self.status));
        }
        parse_products(self.body.as_bytes())
    }
}
