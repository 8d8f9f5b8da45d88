//! Add-product form state and validation.
//!
//! The form collects a name and a price as raw text, validates them locally
//! and only then hands a [`CreateProductRequest`] to the controller. A
//! validation failure never reaches the network.
//!
//! # Validation
//!
//! Rules are applied in order and the first failure wins, so only one message
//! is shown at a time:
//!
//! 1. The trimmed name must be non-empty ("Product name is required").
//! 2. The price must parse as a finite number strictly greater than zero
//!    ("Please enter a valid price").

use super::modes::FormField;
use crate::domain::{CreateProductRequest, RequestError, ValidationError};

/// Message shown when a failed submission carries no message of its own.
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to add product";

/// Validates raw form input and builds the creation payload.
///
/// # Errors
///
/// Returns the first [`ValidationError`] that applies.
///
/// # Examples
///
/// ```
/// use product_manager::app::form::validate_product_input;
/// use product_manager::domain::ValidationError;
///
/// let request = validate_product_input("  Gadget  ", "12.5").unwrap();
/// assert_eq!(request.name, "Gadget");
/// assert_eq!(request.price, 12.5);
///
/// assert_eq!(validate_product_input(" ", "-1"), Err(ValidationError::NameRequired));
/// ```
pub fn validate_product_input(name: &str, price: &str) -> Result<CreateProductRequest, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    let price = price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or(ValidationError::InvalidPrice)?;

    Ok(CreateProductRequest {
        name: name.to_string(),
        price,
    })
}

/// Editable state of the add-product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Raw name text as typed, untrimmed.
    pub name: String,

    /// Raw price text as typed.
    pub price: String,

    /// Input receiving typed characters.
    pub focus: FormField,

    /// Inline error from the last submission attempt, if it failed.
    pub error: Option<String>,
}

impl FormState {
    /// Appends a character to the focused input. Control characters are
    /// ignored. Returns whether the input changed.
    pub fn input_char(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        self.focused_value_mut().push(c);
        true
    }

    /// Removes the last character of the focused input. Returns whether
    /// there was one.
    pub fn backspace(&mut self) -> bool {
        self.focused_value_mut().pop().is_some()
    }

    /// Moves focus to the other input.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Starts a submission attempt.
    ///
    /// Clears the previous error, then validates. On failure the validation
    /// message becomes the form error.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; no request should be sent.
    pub fn prepare_submission(&mut self) -> Result<CreateProductRequest, ValidationError> {
        self.error = None;
        validate_product_input(&self.name, &self.price).inspect_err(|e| {
            tracing::debug!(error = %e, "form validation failed");
            self.error = Some(e.to_string());
        })
    }

    /// Clears both inputs after the product was created.
    pub fn submission_succeeded(&mut self) {
        self.name.clear();
        self.price.clear();
        self.error = None;
        self.focus = FormField::Name;
    }

    /// Shows the failure message and keeps the entered values for a retry.
    pub fn submission_failed(&mut self, err: &RequestError) {
        let message = if err.message().trim().is_empty() {
            SUBMIT_FALLBACK_MESSAGE.to_string()
        } else {
            err.message().to_string()
        };
        self.error = Some(message);
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Price => &mut self.price,
        }
    }
}
