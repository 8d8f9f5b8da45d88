//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry
//! display-ready strings and flags only; every decision about which rendering
//! mode applies has already been made.
//!
//! # Example
//!
//! ```rust
//! use product_manager::ui::viewmodel::{ListBody, ProductRow};
//!
//! let body = ListBody::Items {
//!     rows: vec![ProductRow {
//!         name: "Widget".to_string(),
//!         id_label: "Product ID: 1".to_string(),
//!         price: "$9.99".to_string(),
//!     }],
//!     hidden: 0,
//!     overlay_placeholders: 0,
//!     dimmed: false,
//! };
//! assert!(matches!(body, ListBody::Items { .. }));
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Application title bar.
    pub header: HeaderInfo,

    /// Add-product form.
    pub form: FormView,

    /// Product list with its own header and refresh control.
    pub list: ListView,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Application title and tagline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Display state of the add-product form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Section title ("Add New Product").
    pub title: String,

    pub name: InputView,
    pub price: InputView,

    /// Inline error message, shown above the inputs.
    pub error: Option<String>,

    /// "Add Product", or "Adding Product..." while a submission is in flight.
    pub submit_label: String,

    /// Whole form disabled while submitting.
    pub disabled: bool,
}

/// One labelled text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub label: String,
    pub value: String,

    /// Hint shown when `value` is empty.
    pub placeholder: String,

    pub focused: bool,
}

/// The product list section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub header: ListHeader,
    pub body: ListBody,
}

/// Title row of the product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListHeader {
    /// Section title. `None` during the initial load, when a placeholder bar
    /// stands in for it.
    pub title: Option<String>,

    /// Count line, e.g. "3 products available". `None` during the initial load.
    pub summary: Option<String>,

    pub refresh: RefreshControl,

    /// Non-blocking notice, e.g. after the initial load failed.
    pub notice: Option<String>,
}

/// The manual refresh affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshControl {
    /// "Refresh", or "Refreshing..." while a refresh is in flight.
    pub label: String,

    /// Disabled during the initial load and while refreshing.
    pub enabled: bool,

    /// Active spinner glyph while refreshing.
    pub spinning: bool,
}

/// Mutually exclusive rendering modes of the list body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    /// Initial load in progress: placeholder rows instead of data.
    Loading {
        placeholders: usize,
    },

    /// Loaded, no products.
    Empty(EmptyState),

    /// Loaded with products.
    Items {
        /// Rows that fit on screen, in collection order.
        rows: Vec<ProductRow>,

        /// Products that did not fit.
        hidden: usize,

        /// Placeholder rows drawn above the list while refreshing.
        overlay_placeholders: usize,

        /// Real rows are drawn dimmed while refreshing.
        dimmed: bool,
    },
}

/// Display strings for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub name: String,

    /// "Product ID: {id}".
    pub id_label: String,

    /// Price with exactly two decimals, e.g. "$12.50".
    pub price: String,
}

/// Empty list message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message ("No products found").
    pub message: String,

    /// Secondary hint ("Add a new product to get started").
    pub subtitle: String,
}

/// Footer keybinding hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
