//! HTTP implementation of [`ProductApi`] built on `reqwest`.

use super::ProductApi;
use crate::domain::{CreateProductRequest, Product, ProductManagerError, RequestError, Result};
use crate::Config;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::Instrument;

/// Products backend client rooted at a fixed base URL (e.g. `https://host/api`).
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpProductApi {
    /// Builds a client from configuration.
    ///
    /// Certificate validation stays enabled unless `accept_invalid_certs` is
    /// set, which is only meant for local development against self-signed
    /// backends and is logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ProductManagerError::Config`] if the base URL is empty or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = config.api_base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ProductManagerError::Config("api_base_url must not be empty".to_string()));
        }

        if config.accept_invalid_certs {
            tracing::warn!(base_url = %base_url, "TLS certificate validation disabled");
        }

        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| ProductManagerError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { base_url, client })
    }

    /// Returns the normalized base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// Checks the status and decodes the JSON body of a response.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> std::result::Result<T, RequestError> {
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "backend returned non-success status");
            return Err(RequestError::status(status.as_u16()));
        }

        response.json::<T>().await.map_err(RequestError::from)
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list_products(&self) -> std::result::Result<Vec<Product>, RequestError> {
        let url = self.products_url();
        let span = tracing::debug_span!("list_products", url = %url);

        async move {
            let response = self.client.get(&url).send().await.map_err(RequestError::from);
            let products: Vec<Product> = match response {
                Ok(response) => Self::read_json(response).await,
                Err(e) => Err(e),
            }
            .map_err(|e| {
                tracing::error!(error = %e, "error fetching products");
                e
            })?;

            tracing::debug!(product_count = products.len(), "products fetched");
            Ok(products)
        }
        .instrument(span)
        .await
    }

    async fn create_product(&self, request: &CreateProductRequest) -> std::result::Result<Product, RequestError> {
        let url = self.products_url();
        let span = tracing::debug_span!("create_product", url = %url, name = %request.name);

        async move {
            let response = self.client.post(&url).json(request).send().await.map_err(RequestError::from);
            let product: Product = match response {
                Ok(response) => Self::read_json(response).await,
                Err(e) => Err(e),
            }
            .map_err(|e| {
                tracing::error!(error = %e, "error creating product");
                e
            })?;

            tracing::debug!(product_id = product.id, "product created");
            Ok(product)
        }
        .instrument(span)
        .await
    }
}
