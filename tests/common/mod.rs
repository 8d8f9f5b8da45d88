//! In-process products backend for integration tests.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use product_manager::domain::{CreateProductRequest, Product};
use product_manager::Config;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Products held by the mock backend, plus every create payload it received.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub products: Arc<Mutex<Vec<Product>>>,
    pub received: Arc<Mutex<Vec<CreateProductRequest>>>,
}

impl Store {
    pub fn with(products: Vec<Product>) -> Self {
        let store = Self::default();
        *store.products.lock().unwrap() = products;
        store
    }
}

async fn list(State(store): State<Store>) -> Json<Vec<Product>> {
    Json(store.products.lock().unwrap().clone())
}

async fn create(State(store): State<Store>, Json(request): Json<CreateProductRequest>) -> (StatusCode, Json<Product>) {
    store.received.lock().unwrap().push(request.clone());
    let mut products = store.products.lock().unwrap();
    let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    let product = Product::new(id, request.name, request.price);
    products.push(product.clone());
    (StatusCode::CREATED, Json(product))
}

/// A well-behaved backend: `GET` lists, `POST` appends with the next id.
pub fn products_router(store: Store) -> Router {
    Router::new()
        .route("/api/products", get(list).post(create))
        .with_state(store)
}

/// Serves `router` on an ephemeral local port and returns its `/api` base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

pub fn config_for(base_url: &str) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        ..Config::default()
    }
}
