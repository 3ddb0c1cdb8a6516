//! 列表页业务服务

use std::sync::Arc;
use tracing::{error, info};

use super::model::ProductCatalog;
use super::view::CatalogView;
use crate::core::error::CatalogError;
use crate::infrastructure::data_source::ProductSource;

/// 拉取商品集合并生成卡片视图
#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn ProductSource>,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        Self { source }
    }

    /// 拉取一次商品集合
    pub async fn fetch_catalog(&self) -> Result<ProductCatalog, CatalogError> {
        let products = self.source.fetch().await?;
        Ok(ProductCatalog::new(products))
    }

    /// 拉取并转成列表视图；任何失败都变成 `CatalogView::Failed`
    pub async fn load(&self) -> CatalogView {
        match self.fetch_catalog().await {
            Ok(catalog) => {
                info!(count = catalog.len(), "商品列表加载完成");
                CatalogView::from_products(catalog.products())
            }
            Err(err) => {
                error!(error = %err, "商品列表加载失败");
                CatalogView::Failed
            }
        }
    }
}
