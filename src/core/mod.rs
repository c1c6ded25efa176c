pub mod cart_store;
pub mod format;
pub mod settings;

pub use crate::domain::model::{Cart, Product, ProductDetails, ProductId, Stock, UpdateProductAmount};
pub use crate::domain::ports::{
    ConfigProvider, NotificationSink, PersistenceStore, ProductService, StockService,
};
pub use crate::utils::error::Result;
