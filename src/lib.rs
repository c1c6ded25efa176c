pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use adapters::{
    http::ApiClient,
    notify::{ConsoleNotifier, Notification, ToastQueue},
    storage::{FileStorage, MemoryStorage},
};
pub use crate::core::{
    cart_store::CartStore,
    format::format_price,
    settings::{CartSettings, CorruptCartPolicy, Locale, Messages},
};
pub use domain::model::{Cart, Product, ProductDetails, ProductId, Stock, UpdateProductAmount};
pub use utils::error::{CartError, ErrorKind, Result};
