use crate::domain::model::{ProductDetails, ProductId, Stock};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait StockService: Send + Sync {
    async fn stock(&self, product_id: ProductId) -> Result<Stock>;
}

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn product(&self, product_id: ProductId) -> Result<ProductDetails>;
}

/// Key-value storage for the serialized cart.
pub trait PersistenceStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str)
        -> impl std::future::Future<Output = Result<()>> + Send;
}

/// User-facing message channel. Fire-and-forget.
pub trait NotificationSink: Send + Sync {
    fn error(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn storage_path(&self) -> &str;
    fn storage_key(&self) -> &str;
}
