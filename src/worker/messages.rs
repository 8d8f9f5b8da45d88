//! Worker message types.
//!
//! The control loop posts a [`WorkerMessage`] for every backend call it needs
//! and later receives exactly one [`WorkerResponse`] for it. Responses carry
//! the raw call result; deciding what it means for the state is left to the
//! event handler.

use crate::domain::{CreateProductRequest, Product, RequestError};

/// Why a product list fetch was started.
///
/// The initial load and a manual refresh complete into different progress
/// flags, so the response must say which one it answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTrigger {
    /// The fetch issued once on startup.
    Initial,

    /// A user-requested re-fetch.
    Refresh,
}

impl LoadTrigger {
    /// Label used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Refresh => "refresh",
        }
    }
}

/// Requests sent from the control loop to the worker.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerMessage {
    /// Fetch the full product collection.
    LoadProducts {
        trigger: LoadTrigger,
    },

    /// Create a product from a validated request.
    CreateProduct {
        request: CreateProductRequest,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn load_products(trigger: LoadTrigger) -> Self {
        Self::LoadProducts { trigger }
    }

    #[must_use]
    pub const fn create_product(request: CreateProductRequest) -> Self {
        Self::CreateProduct { request }
    }
}

/// Completions sent from the worker back to the control loop.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    /// A list fetch finished.
    ProductsLoaded {
        trigger: LoadTrigger,
        result: Result<Vec<Product>, RequestError>,
    },

    /// A create request finished.
    ProductCreated {
        result: Result<Product, RequestError>,
    },
}
