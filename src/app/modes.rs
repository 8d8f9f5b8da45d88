//! Input focus state for the add-product form.
//!
//! The form has two text inputs; exactly one of them receives typed
//! characters at any time. Tab, Up and Down cycle between them.
//!
//! # Example
//!
//! ```rust
//! use product_manager::app::FormField;
//!
//! assert_eq!(FormField::Name.next(), FormField::Price);
//! assert_eq!(FormField::Price.next(), FormField::Name);
//! ```

/// The form input that currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Product name input. Focused on startup and after a successful submit.
    #[default]
    Name,

    /// Price input, parsed as a decimal number on submit.
    Price,
}

impl FormField {
    /// Returns the other field. With two inputs, next and previous coincide.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Price,
            Self::Price => Self::Name,
        }
    }
}
