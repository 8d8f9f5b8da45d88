//! Awaited orchestration of the backend calls.
//!
//! [`ProductController`] pairs an [`AppState`] with a [`ProductApi`] and runs
//! each operation start to finish: set the flag, await the call, apply the
//! result. It shares every state transition with the event handler, so the
//! two front ends cannot drift apart.
//!
//! # Example
//!
//! ```rust,no_run
//! use product_manager::app::{AppState, ProductController};
//! use product_manager::api::HttpProductApi;
//! use product_manager::domain::CreateProductRequest;
//! use product_manager::{Config, ui::Theme};
//! use std::sync::Arc;
//!
//! # async fn run() -> product_manager::Result<()> {
//! let api = Arc::new(HttpProductApi::new(&Config::default())?);
//! let mut controller = ProductController::new(api, AppState::new(Theme::default()));
//!
//! controller.initialize().await;
//! controller
//!     .submit(CreateProductRequest { name: "Widget".into(), price: 9.99 })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use super::AppState;
use crate::api::ProductApi;
use crate::domain::{CreateProductRequest, Product, RequestError, Result};
use std::sync::Arc;

/// Owns the application state and drives the backend calls that change it.
#[derive(Debug)]
pub struct ProductController<A> {
    api: Arc<A>,
    state: AppState,
}

impl<A: ProductApi> ProductController<A> {
    #[must_use]
    pub const fn new(api: Arc<A>, state: AppState) -> Self {
        Self { api, state }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    #[must_use]
    pub fn into_state(self) -> AppState {
        self.state
    }

    /// Startup fetch. Failures are logged and leave the list empty.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn initialize(&mut self) {
        self.state.begin_initial_load();
        let result = self.api.list_products().await;
        self.state.complete_initial_load(result);
    }

    /// Manual re-fetch. Failures are logged and leave the list unchanged;
    /// `refreshing` is cleared either way.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn refresh(&mut self) {
        self.state.begin_refresh();
        let result = self.api.list_products().await;
        self.state.complete_refresh(result);
    }

    /// Creates a product and appends it to the collection.
    ///
    /// The request is assumed to be validated already.
    ///
    /// # Errors
    ///
    /// Propagates the [`RequestError`]; the collection is left untouched.
    #[tracing::instrument(level = "debug", skip(self), fields(name = %request.name))]
    pub async fn submit(&mut self, request: CreateProductRequest) -> std::result::Result<Product, RequestError> {
        self.state.begin_submit();
        let result = self.api.create_product(&request).await;
        self.state.complete_submit(result)
    }

    /// Validates the form, submits it and applies the outcome to the form.
    ///
    /// # Errors
    ///
    /// - [`ProductManagerError::Validation`](crate::domain::ProductManagerError::Validation)
    ///   when the input is rejected; no request is sent.
    /// - [`ProductManagerError::Request`](crate::domain::ProductManagerError::Request)
    ///   when the backend call fails; the entered values are kept.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn submit_form(&mut self) -> Result<Product> {
        let request = self.state.form.prepare_submission()?;
        self.state.begin_submit();
        let result = self.api.create_product(&request).await;
        Ok(self.state.complete_form_submission(result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::ScriptedApi;
    use crate::domain::ProductManagerError;
    use crate::ui::Theme;

    fn controller(api: ScriptedApi) -> (Arc<ScriptedApi>, ProductController<ScriptedApi>) {
        let api = Arc::new(api);
        let controller = ProductController::new(Arc::clone(&api), AppState::new(Theme::default()));
        (api, controller)
    }

    #[tokio::test]
    async fn initialize_replaces_products_and_clears_loading() {
        let (_, mut c) = controller(ScriptedApi::new().push_list(Ok(vec![Product::new(1, "Widget", 9.99)])));
        c.initialize().await;

        assert_eq!(c.state().products, vec![Product::new(1, "Widget", 9.99)]);
        assert!(!c.state().progress.loading);
    }

    #[tokio::test]
    async fn failed_initialize_leaves_empty_list() {
        let (_, mut c) = controller(ScriptedApi::new().push_list(Err(RequestError::transport("refused"))));
        c.initialize().await;

        assert!(c.state().products.is_empty());
        assert!(!c.state().progress.loading);
        assert!(c.state().load_error.is_some());
    }

    #[tokio::test]
    async fn refresh_failure_keeps_products_and_success_replaces_them() {
        let initial = vec![Product::new(1, "Widget", 9.99)];
        let replaced = vec![Product::new(3, "Bolt", 0.1)];
        let (api, mut c) = controller(
            ScriptedApi::new()
                .push_list(Ok(initial.clone()))
                .push_list(Err(RequestError::status(500)))
                .push_list(Ok(replaced.clone())),
        );

        c.initialize().await;
        c.refresh().await;
        assert_eq!(c.state().products, initial);
        assert!(!c.state().progress.refreshing);

        c.refresh().await;
        assert_eq!(c.state().products, replaced);
        assert!(!c.state().progress.refreshing);
        assert_eq!(api.list_calls(), 3);
    }

    #[tokio::test]
    async fn submit_appends_exactly_one_product_at_the_end() {
        let (_, mut c) = controller(
            ScriptedApi::new()
                .push_list(Ok(vec![Product::new(1, "Widget", 9.99)]))
                .push_create(Ok(Product::new(2, "Gadget", 12.5))),
        );
        c.initialize().await;

        let created = c
            .submit(CreateProductRequest { name: "Gadget".to_string(), price: 12.5 })
            .await
            .unwrap();

        assert_eq!(created.id, 2);
        assert_eq!(c.state().products.len(), 2);
        assert_eq!(c.state().products.last(), Some(&created));
        assert!(!c.state().progress.submitting);
    }

    #[tokio::test]
    async fn submit_failure_propagates_and_leaves_products() {
        let (_, mut c) = controller(ScriptedApi::new().push_create(Err(RequestError::status(400))));
        let err = c
            .submit(CreateProductRequest { name: "Gadget".to_string(), price: 12.5 })
            .await
            .unwrap_err();

        assert_eq!(err, RequestError::status(400));
        assert!(c.state().products.is_empty());
        assert!(!c.state().progress.submitting);
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_api() {
        let (api, mut c) = controller(ScriptedApi::new());
        c.state_mut().form.name = "   ".to_string();
        c.state_mut().form.price = "5".to_string();

        let err = c.submit_form().await.unwrap_err();
        assert!(matches!(err, ProductManagerError::Validation(_)));
        assert_eq!(c.state().form.error.as_deref(), Some("Product name is required"));

        c.state_mut().form.name = "Lamp".to_string();
        c.state_mut().form.price = "-2".to_string();
        c.submit_form().await.unwrap_err();
        assert_eq!(c.state().form.error.as_deref(), Some("Please enter a valid price"));

        assert!(api.create_requests().is_empty());
        assert!(!c.state().progress.submitting);
    }

    #[tokio::test]
    async fn trimmed_form_submission_appends_and_clears_inputs() {
        let (api, mut c) = controller(ScriptedApi::new().push_create(Ok(Product::new(2, "Gadget", 12.5))));
        c.state_mut().form.name = "  Gadget  ".to_string();
        c.state_mut().form.price = "12.5".to_string();

        c.submit_form().await.unwrap();

        assert_eq!(api.create_requests(), vec![CreateProductRequest { name: "Gadget".to_string(), price: 12.5 }]);
        assert_eq!(c.state().products.last().map(Product::formatted_price).as_deref(), Some("$12.50"));
        assert!(c.state().form.name.is_empty());
        assert!(c.state().form.price.is_empty());
    }

    #[tokio::test]
    async fn failed_form_submission_keeps_inputs_and_shows_message() {
        let (_, mut c) = controller(ScriptedApi::new().push_create(Err(RequestError::transport("connection reset"))));
        c.state_mut().form.name = "Gadget".to_string();
        c.state_mut().form.price = "12.5".to_string();

        let err = c.submit_form().await.unwrap_err();
        assert!(matches!(err, ProductManagerError::Request(_)));

        let state = c.into_state();
        assert!(state.products.is_empty());
        assert_eq!(state.form.name, "Gadget");
        assert_eq!(state.form.price, "12.5");
        assert_eq!(state.form.error.as_deref(), Some("Network error: connection reset"));
        assert!(!state.progress.submitting);
    }
}
