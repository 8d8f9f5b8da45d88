//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the UI shows: the product
//! collection, the three progress flags, the form and the load notice. All
//! mutation happens through the split-phase transitions below, which both the
//! awaited [`ProductController`](crate::app::ProductController) and the
//! event-driven [`handle_event`](crate::app::handle_event) use.
//!
//! # Transitions
//!
//! | Begin                | Complete                  | Flag         |
//! |----------------------|---------------------------|--------------|
//! | `begin_initial_load` | `complete_initial_load`   | `loading`    |
//! | `begin_refresh`      | `complete_refresh`        | `refreshing` |
//! | `begin_submit`       | `complete_submit`         | `submitting` |
//!
//! Every `complete_*` clears its flag whatever the outcome. `products` is
//! replaced wholesale by a successful list fetch, appended to by a successful
//! create, and never touched by a failure.
//!
//! # Example
//!
//! ```rust
//! use product_manager::app::AppState;
//! use product_manager::domain::Product;
//! use product_manager::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.begin_initial_load();
//! assert!(state.progress.loading);
//!
//! state.complete_initial_load(Ok(vec![Product::new(1, "Widget", 9.99)]));
//! assert!(!state.progress.loading);
//! assert_eq!(state.products.len(), 1);
//! ```

use super::form::FormState;
use super::modes::FormField;
use crate::domain::{Product, RequestError};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, FormView, HeaderInfo, InputView, ListBody, ListHeader, ListView,
    ProductRow, RefreshControl, UIViewModel,
};

/// Placeholder rows shown during the initial load.
pub const INITIAL_PLACEHOLDERS: usize = 3;

/// Upper bound on placeholder rows overlaid while refreshing.
pub const MAX_REFRESH_PLACEHOLDERS: usize = 5;

/// Terminal rows taken by everything except list items: title block (3),
/// borders (3), form (5), list header (3) and footer (1).
pub const CHROME_ROWS: usize = 15;

/// Terminal rows per product item or placeholder.
pub const ITEM_HEIGHT: usize = 2;

/// Independent progress flags.
///
/// `submitting` may overlap with `loading` or `refreshing`, so the three are
/// kept as separate fields rather than one status enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Initial fetch on startup is in flight.
    pub loading: bool,

    /// Manually triggered re-fetch is in flight.
    pub refreshing: bool,

    /// Create request is in flight.
    pub submitting: bool,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Products in server order, with created items appended at the end.
    pub products: Vec<Product>,

    pub progress: Progress,

    /// Add-product form inputs and inline error.
    pub form: FormState,

    /// Notice shown in the list header after the initial load failed.
    ///
    /// Cleared by the next successful list fetch.
    pub load_error: Option<String>,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Set once the user asked to exit.
    pub should_quit: bool,
}

impl AppState {
    /// Creates an empty state: no products, no request in flight.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            products: Vec::new(),
            progress: Progress::default(),
            form: FormState::default(),
            load_error: None,
            theme,
            should_quit: false,
        }
    }

    /// Marks the startup fetch as in flight.
    pub fn begin_initial_load(&mut self) {
        tracing::debug!("initial product load started");
        self.progress.loading = true;
    }

    /// Applies the result of the startup fetch.
    ///
    /// On failure the collection stays as it was (empty on startup) and a
    /// notice is recorded for the list header.
    pub fn complete_initial_load(&mut self, result: Result<Vec<Product>, RequestError>) {
        match result {
            Ok(products) => {
                tracing::debug!(product_count = products.len(), "initial product load finished");
                self.products = products;
                self.load_error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load products");
                self.load_error = Some(format!("Could not load products: {e}"));
            }
        }
        self.progress.loading = false;
    }

    /// Marks a manual re-fetch as in flight. Existing products stay visible.
    pub fn begin_refresh(&mut self) {
        tracing::debug!(product_count = self.products.len(), "refresh started");
        self.progress.refreshing = true;
    }

    /// Applies the result of a manual re-fetch.
    ///
    /// A failure is logged only; the previous collection stays on screen.
    pub fn complete_refresh(&mut self, result: Result<Vec<Product>, RequestError>) {
        match result {
            Ok(products) => {
                tracing::debug!(product_count = products.len(), "refresh finished");
                self.products = products;
                self.load_error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to refresh products");
            }
        }
        self.progress.refreshing = false;
    }

    /// Marks a create request as in flight. Disables the form.
    pub fn begin_submit(&mut self) {
        tracing::debug!("product submission started");
        self.progress.submitting = true;
    }

    /// Applies the result of a create request and hands it back to the caller.
    ///
    /// A created product is appended at the end of the collection.
    ///
    /// # Errors
    ///
    /// Propagates the request failure unchanged; `products` is not modified.
    pub fn complete_submit(&mut self, result: Result<Product, RequestError>) -> Result<Product, RequestError> {
        self.progress.submitting = false;
        match result {
            Ok(product) => {
                tracing::debug!(product_id = product.id, product_name = %product.name, "product appended");
                self.products.push(product.clone());
                Ok(product)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to add product");
                Err(e)
            }
        }
    }

    /// Completes a create request that originated from the form.
    ///
    /// Same as [`complete_submit`](Self::complete_submit), then clears the
    /// form on success or shows the failure message on it.
    ///
    /// # Errors
    ///
    /// Propagates the request failure after it was shown on the form.
    pub fn complete_form_submission(
        &mut self,
        result: Result<Product, RequestError>,
    ) -> Result<Product, RequestError> {
        let outcome = self.complete_submit(result);
        match &outcome {
            Ok(_) => self.form.submission_succeeded(),
            Err(e) => self.form.submission_failed(e),
        }
        outcome
    }

    /// Whether a list fetch (initial or manual) is in flight.
    #[must_use]
    pub const fn is_list_busy(&self) -> bool {
        self.progress.loading || self.progress.refreshing
    }

    /// Computes the view model for a terminal of the given size.
    ///
    /// # Rendering modes
    ///
    /// 1. `loading`: three placeholder rows, refresh disabled.
    /// 2. No products: empty-state message.
    /// 3. Products, not refreshing: one row per product that fits.
    /// 4. Products, refreshing: up to `min(count, 5)` placeholders over the
    ///    dimmed list, refresh spinning and disabled. The list keeps the rows
    ///    it had before the refresh; placeholders fill what is left.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        UIViewModel {
            header: HeaderInfo {
                title: "Product Manager".to_string(),
                subtitle: "Enterprise Product Management System".to_string(),
            },
            form: self.compute_form(),
            list: ListView {
                header: self.compute_list_header(),
                body: self.compute_list_body(rows),
            },
            footer: self.compute_footer(),
        }
    }

    fn compute_form(&self) -> FormView {
        let submitting = self.progress.submitting;
        FormView {
            title: "Add New Product".to_string(),
            name: InputView {
                label: "Product Name".to_string(),
                value: self.form.name.clone(),
                placeholder: "Enter product name".to_string(),
                focused: !submitting && self.form.focus == FormField::Name,
            },
            price: InputView {
                label: "Price ($)".to_string(),
                value: self.form.price.clone(),
                placeholder: "0.00".to_string(),
                focused: !submitting && self.form.focus == FormField::Price,
            },
            error: self.form.error.clone(),
            submit_label: if submitting { "Adding Product..." } else { "Add Product" }.to_string(),
            disabled: submitting,
        }
    }

    fn compute_list_header(&self) -> ListHeader {
        let refresh = RefreshControl {
            label: if self.progress.refreshing { "Refreshing..." } else { "Refresh" }.to_string(),
            enabled: !self.is_list_busy(),
            spinning: self.progress.refreshing,
        };

        if self.progress.loading {
            return ListHeader {
                title: None,
                summary: None,
                refresh,
                notice: None,
            };
        }

        let count = self.products.len();
        let plural = if count == 1 { "" } else { "s" };
        ListHeader {
            title: Some("Products".to_string()),
            summary: Some(format!("{count} product{plural} available")),
            refresh,
            notice: self.load_error.clone(),
        }
    }

    fn compute_list_body(&self, rows: usize) -> ListBody {
        if self.progress.loading {
            return ListBody::Loading {
                placeholders: INITIAL_PLACEHOLDERS,
            };
        }

        if self.products.is_empty() {
            return ListBody::Empty(EmptyState {
                message: "No products found".to_string(),
                subtitle: "Add a new product to get started".to_string(),
            });
        }

        let refreshing = self.progress.refreshing;
        let capacity = Self::calculate_item_capacity(rows);
        let visible = if self.products.len() > capacity {
            // one slot gives way to the "and K more" line
            capacity.saturating_sub(1)
        } else {
            self.products.len()
        };

        // placeholders only take slots the real list leaves free
        let used = visible + usize::from(visible < self.products.len());
        let overlay_placeholders = if refreshing {
            self.products
                .len()
                .min(MAX_REFRESH_PLACEHOLDERS)
                .min(capacity.saturating_sub(used))
        } else {
            0
        };

        let rows = self.products[..visible]
            .iter()
            .map(|product| ProductRow {
                name: product.name.clone(),
                id_label: product.id_label(),
                price: product.formatted_price(),
            })
            .collect();

        ListBody::Items {
            rows,
            hidden: self.products.len() - visible,
            overlay_placeholders,
            dimmed: refreshing,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.progress.submitting {
            "Adding product...  F5/Ctrl+R: refresh  Esc: quit"
        } else {
            "Tab: switch field  Enter: add product  F5/Ctrl+R: refresh  Esc: quit"
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Number of two-row items that fit below the chrome.
    const fn calculate_item_capacity(total_rows: usize) -> usize {
        total_rows.saturating_sub(CHROME_ROWS) / ITEM_HEIGHT
    }
}
