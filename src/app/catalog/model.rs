//! 商品数据模型

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub detail_description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub battery: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub latency: String,
    #[serde(default)]
    pub price: String,
}

/// 带标签的展示字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatField {
    pub label: &'static str,
    pub value: String,
}

impl StatField {
    /// 卡片与详情页共用的固定字段：颜色、电池、重量、延迟、价格
    pub fn for_product(product: &Product) -> Vec<StatField> {
        [
            ("Warna", &product.color),
            ("Baterai", &product.battery),
            ("Bobot", &product.weight),
            ("Latency", &product.latency),
            ("Harga", &product.price),
        ]
        .into_iter()
        .map(|(label, value)| StatField {
            label,
            value: value.clone(),
        })
        .collect()
    }
}

/// 一次页面访问内的只读商品集合
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        let catalog = Self { products };
        for id in catalog.duplicate_ids() {
            warn!(%id, "商品 id 重复，查找时只使用第一条");
        }
        catalog
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 第一条 id 匹配的记录
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// 出现超过一次的 id，按首次出现顺序
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for product in &self.products {
            if !seen.insert(product.id.as_str()) && !duplicates.contains(&product.id.as_str()) {
                duplicates.push(product.id.as_str());
            }
        }
        duplicates
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;

    #[test]
    fn test_stat_fields_are_verbatim() {
        let p = product("arc", "Arc Eclipse");
        let stats = StatField::for_product(&p);
        let labels: Vec<_> = stats.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Warna", "Baterai", "Bobot", "Latency", "Harga"]);
        assert_eq!(stats[0].value, p.color);
        assert_eq!(stats[4].value, p.price);
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut second = product("dup", "Second");
        second.price = "$1".to_string();
        let catalog = ProductCatalog::new(vec![product("dup", "First"), second]);

        assert_eq!(catalog.find("dup").unwrap().title, "First");
        assert_eq!(catalog.duplicate_ids(), vec!["dup"]);
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let p: Product = serde_json::from_str(r#"{"id":"x","title":"X"}"#).unwrap();
        assert_eq!(p.subtitle, "");
        assert_eq!(p.detail_description, "");
    }
}
