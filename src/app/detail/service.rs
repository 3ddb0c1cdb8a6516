//! 详情页业务服务

use std::sync::Arc;
use tracing::{error, info, warn};

use super::view::{DetailView, DetailViewModel};
use crate::app::catalog::model::{Product, ProductCatalog};
use crate::core::error::{CatalogError, FailureKind};
use crate::infrastructure::data_source::ProductSource;

#[derive(Clone)]
pub struct DetailLoader {
    source: Arc<dyn ProductSource>,
}

impl DetailLoader {
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        Self { source }
    }

    /// 按 id 查找商品；缺少 id 时不拉取数据
    pub async fn find(&self, id: Option<&str>) -> Result<Product, CatalogError> {
        let id = match id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(CatalogError::MissingId),
        };

        let catalog = ProductCatalog::new(self.source.fetch().await?);
        catalog
            .find(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// 生成详情视图，所有失败都变成对应的终态
    pub async fn load(&self, id: Option<&str>) -> DetailView {
        match self.find(id).await {
            Ok(product) => {
                info!(id = %product.id, "商品详情加载完成");
                DetailView::Loaded(Box::new(DetailViewModel::new(&product)))
            }
            Err(CatalogError::MissingId) => {
                warn!("详情页缺少 id 参数");
                DetailView::MissingId
            }
            Err(err) if err.kind() == FailureKind::NotFound => {
                warn!(error = %err, "商品不存在");
                DetailView::NotFound
            }
            Err(err) => {
                error!(error = %err, "商品详情加载失败");
                DetailView::Failed
            }
        }
    }
}
