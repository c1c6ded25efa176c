use thiserror::Error;

use crate::domain::model::ProductId;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Requested amount {requested} of product {product_id} exceeds available stock {available}")]
    StockUnavailable {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    #[error("Product {product_id} is not in the cart")]
    ItemNotFound { product_id: ProductId },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    ApiStatusError { url: String, status: u16 },

    #[error("Product service answered for product {returned} when asked for {requested}")]
    ProductMismatch {
        requested: ProductId,
        returned: ProductId,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Stored cart under '{key}' is unreadable: {reason}")]
    CorruptCart { key: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse classification used to pick the user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    StockUnavailable,
    ItemNotFound,
    Transport,
    Config,
}

impl CartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::StockUnavailable { .. } => ErrorKind::StockUnavailable,
            CartError::ItemNotFound { .. } => ErrorKind::ItemNotFound,
            CartError::ApiError(_)
            | CartError::ApiStatusError { .. }
            | CartError::IoError(_)
            | CartError::ProductMismatch { .. }
            | CartError::SerializationError(_) => ErrorKind::Transport,
            CartError::CorruptCart { .. }
            | CartError::ConfigError { .. }
            | CartError::ConfigValidationError { .. }
            | CartError::InvalidConfigValueError { .. } => ErrorKind::Config,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.kind() {
            ErrorKind::StockUnavailable => "Not enough stock for the requested quantity".to_string(),
            ErrorKind::ItemNotFound => "That product is not in your cart".to_string(),
            ErrorKind::Transport => format!("Could not reach the store: {}", self),
            ErrorKind::Config => format!("Invalid configuration: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::StockUnavailable | ErrorKind::ItemNotFound => 1,
            ErrorKind::Transport => 2,
            ErrorKind::Config => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let stock = CartError::StockUnavailable {
            product_id: 1,
            requested: 2,
            available: 1,
        };
        assert_eq!(stock.kind(), ErrorKind::StockUnavailable);
        assert_eq!(stock.exit_code(), 1);

        let status = CartError::ApiStatusError {
            url: "http://localhost/stock/1".to_string(),
            status: 500,
        };
        assert_eq!(status.kind(), ErrorKind::Transport);
        assert_eq!(status.exit_code(), 2);

        let invalid = CartError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: "ftp://example.com".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(invalid.kind(), ErrorKind::Config);
        assert!(invalid.user_friendly_message().contains("api.base_url"));

        let mismatch = CartError::ProductMismatch {
            requested: 1,
            returned: 2,
        };
        assert_eq!(mismatch.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_corrupt_cart_exits_as_configuration_problem() {
        let corrupt = CartError::CorruptCart {
            key: "@RocketShoes:cart".to_string(),
            reason: "product 2 appears more than once".to_string(),
        };
        assert_eq!(corrupt.kind(), ErrorKind::Config);
        assert_eq!(corrupt.exit_code(), 3);
    }
}
