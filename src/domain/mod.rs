//! Domain layer for the product manager.
//!
//! Holds the types shared by every other layer, independent of HTTP or
//! terminal concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`product`]: Product entity and creation payload
//!
//! # Examples
//!
//! ```
//! use product_manager::domain::{CreateProductRequest, Product};
//!
//! let request = CreateProductRequest { name: "Widget".to_string(), price: 9.99 };
//! let created = Product::new(1, request.name.clone(), request.price);
//! assert_eq!(created.formatted_price(), "$9.99");
//! ```

pub mod error;
pub mod product;

pub use error::{ProductManagerError, RequestError, Result, ValidationError};
pub use product::{CreateProductRequest, Product};
