//! Products backend API.
//!
//! The rest of the crate talks to the backend only through the
//! [`ProductApi`] trait, so the controller and worker can be exercised against
//! an in-memory implementation in tests. [`HttpProductApi`] is the real
//! implementation over `reqwest`.
//!
//! # Operations
//!
//! | Operation        | HTTP                    | Success            |
//! |------------------|-------------------------|--------------------|
//! | `list_products`  | `GET {base}/products`   | JSON array         |
//! | `create_product` | `POST {base}/products`  | created entity     |
//!
//! Neither operation retries or caches. Every failure is a
//! [`RequestError`](crate::domain::RequestError).

pub mod client;

#[cfg(test)]
pub(crate) mod fake;

pub use client::HttpProductApi;

use crate::domain::{CreateProductRequest, Product, RequestError};
use async_trait::async_trait;

/// The two remote operations the application depends on.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Retrieves the full product collection in server order.
    async fn list_products(&self) -> Result<Vec<Product>, RequestError>;

    /// Creates a product and returns it with its server-assigned id.
    async fn create_product(&self, request: &CreateProductRequest) -> Result<Product, RequestError>;
}
