//! Product domain model.
//!
//! A [`Product`] is the entity returned by the backend; a
//! [`CreateProductRequest`] is the payload the client submits to create one.
//! Both serialize to the backend's JSON shape (`{ id, name, price }` and
//! `{ name, price }`).

use serde::{Deserialize, Serialize};

/// A product as stored by the backend.
///
/// `id` is assigned by the server and never changes. `price` is always
/// displayed with exactly two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl Product {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Returns the price formatted for display, e.g. `"$12.50"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use product_manager::domain::Product;
    ///
    /// assert_eq!(Product::new(2, "Gadget", 12.5).formatted_price(), "$12.50");
    /// ```
    #[must_use]
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Returns the secondary label shown under the product name.
    #[must_use]
    pub fn id_label(&self) -> String {
        format!("Product ID: {}", self.id)
    }
}

/// Payload for creating a product. The server assigns the `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
}
