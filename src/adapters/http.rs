use crate::core::{ConfigProvider, ProductDetails, ProductId, ProductService, Stock, StockService};
use crate::utils::error::{CartError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for the storefront API (`/stock/{id}` and `/products/{id}`).
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_base_url(), config.request_timeout())
    }

    fn endpoint(&self, resource: &str, product_id: ProductId) -> String {
        format!("{}/{}/{}", self.base_url, resource, product_id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(CartError::ApiStatusError {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl StockService for ApiClient {
    async fn stock(&self, product_id: ProductId) -> Result<Stock> {
        self.get_json(self.endpoint("stock", product_id)).await
    }
}

#[async_trait::async_trait]
impl ProductService for ApiClient {
    async fn product(&self, product_id: ProductId) -> Result<ProductDetails> {
        self.get_json(self.endpoint("products", product_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(server.base_url() + "/", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_stock_lookup() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/stock/3");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({"id": 3, "amount": 7}));
            })
            .await;

        let stock = client_for(&server).stock(3).await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(stock, Stock { id: 3, amount: 7 });
    }

    #[tokio::test]
    async fn test_product_lookup_ignores_extra_fields() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/products/2");
                then.status(200).json_body(serde_json::json!({
                    "id": 2,
                    "title": "Tênis VR Caminhada Confortável Detalhes Couro Masculino",
                    "price": 139.9,
                    "image": "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis2.jpg",
                    "brand": "VR"
                }));
            })
            .await;

        let product = client_for(&server).product(2).await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(product.id, 2);
        assert_eq!(product.price, 139.9);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/stock/99");
                then.status(404);
            })
            .await;

        let err = client_for(&server).stock(99).await.unwrap_err();

        api_mock.assert_async().await;
        match err {
            CartError::ApiStatusError { url, status } => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/stock/99"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_an_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/stock/1");
                then.status(200).body("not json");
            })
            .await;

        let err = client_for(&server).stock(1).await.unwrap_err();
        assert!(matches!(err, CartError::ApiError(_)));
    }
}
