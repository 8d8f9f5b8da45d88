//! Error types for the product manager.
//!
//! Two error kinds cross component boundaries: [`RequestError`], produced by
//! the API client for any failed remote call, and [`ValidationError`],
//! produced locally by the add-product form before any request is made.
//! [`ProductManagerError`] wraps both together with the configuration and I/O
//! failures of the surrounding application, and [`Result`] is the matching
//! alias used throughout the crate.

use thiserror::Error;

/// A failed call to the products backend.
///
/// Transport failures (DNS, connection, TLS), non-success HTTP statuses and
/// undecodable bodies all collapse into this one kind. The message is what the
/// add-product form shows to the user when a creation fails.
///
/// # Examples
///
/// ```
/// use product_manager::domain::RequestError;
///
/// let err = RequestError::status(500);
/// assert_eq!(err.to_string(), "Request failed with status code 500");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
}

impl RequestError {
    /// Creates a request error with an arbitrary cause message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The request never produced an HTTP response.
    #[must_use]
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::new(format!("Network error: {cause}"))
    }

    /// The backend answered with a non-success status code.
    #[must_use]
    pub fn status(code: u16) -> Self {
        Self::new(format!("Request failed with status code {code}"))
    }

    /// The response body could not be decoded into the expected shape.
    #[must_use]
    pub fn decode(cause: impl std::fmt::Display) -> Self {
        Self::new(format!("Invalid response body: {cause}"))
    }

    /// Returns the cause message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err)
        } else {
            Self::transport(err)
        }
    }
}

/// Local form validation failure.
///
/// Rules are checked in order and only the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The product name is empty after trimming whitespace.
    #[error("Product name is required")]
    NameRequired,

    /// The price is not a number, or is not strictly greater than zero.
    #[error("Please enter a valid price")]
    InvalidPrice,
}

/// The main error type for product manager operations.
#[derive(Debug, Error)]
pub enum ProductManagerError {
    /// A backend call failed.
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Form input was rejected before reaching the network.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A theme could not be loaded or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Terminal or filesystem I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for product manager operations.
pub type Result<T> = std::result::Result<T, ProductManagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_form_copy() {
        assert_eq!(ValidationError::NameRequired.to_string(), "Product name is required");
        assert_eq!(ValidationError::InvalidPrice.to_string(), "Please enter a valid price");
    }

    #[test]
    fn request_error_displays_bare_cause() {
        let err = RequestError::transport("connection refused");
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert_eq!(err.message(), "Network error: connection refused");
    }

    #[test]
    fn non_decode_client_errors_are_network_errors() {
        let err = reqwest::Client::new().get("not a url").build().unwrap_err();
        assert!(!err.is_decode());
        assert!(RequestError::from(err).message().starts_with("Network error: "));
    }

    #[test]
    fn wrapped_errors_keep_their_source_message() {
        let err: ProductManagerError = RequestError::status(404).into();
        assert_eq!(err.to_string(), "Request error: Request failed with status code 404");
    }
}
