mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use common::{config_for, products_router, serve, unreachable_base_url, Store};
use product_manager::api::{HttpProductApi, ProductApi};
use product_manager::domain::{CreateProductRequest, Product, RequestError};

fn api(base_url: &str) -> HttpProductApi {
    HttpProductApi::new(&config_for(base_url)).unwrap()
}

#[tokio::test]
async fn lists_products_in_server_order() {
    let store = Store::with(vec![Product::new(3, "Bolt", 0.1), Product::new(1, "Widget", 9.99)]);
    let base_url = serve(products_router(store)).await;

    let products = api(&base_url).list_products().await.unwrap();

    assert_eq!(products, vec![Product::new(3, "Bolt", 0.1), Product::new(1, "Widget", 9.99)]);
}

#[tokio::test]
async fn create_posts_payload_and_returns_created_product() {
    let store = Store::with(vec![Product::new(1, "Widget", 9.99)]);
    let base_url = serve(products_router(store.clone())).await;

    let request = CreateProductRequest { name: "Gadget".to_string(), price: 12.5 };
    let created = api(&base_url).create_product(&request).await.unwrap();

    assert_eq!(created, Product::new(2, "Gadget", 12.5));
    assert_eq!(*store.received.lock().unwrap(), vec![request]);
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let base_url = serve(products_router(Store::default())).await;

    let products = api(&format!("{base_url}/")).list_products().await.unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn non_success_status_is_a_request_error() {
    let router = Router::new().route(
        "/api/products",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }).post(|| async { StatusCode::BAD_REQUEST }),
    );
    let base_url = serve(router).await;
    let api = api(&base_url);

    assert_eq!(api.list_products().await.unwrap_err(), RequestError::status(500));

    let request = CreateProductRequest { name: "Gadget".to_string(), price: 12.5 };
    let err = api.create_product(&request).await.unwrap_err();
    assert_eq!(err.message(), "Request failed with status code 400");
}

#[tokio::test]
async fn malformed_body_is_a_request_error() {
    let router = Router::new().route("/api/products", get(|| async { "not json" }));
    let base_url = serve(router).await;

    let err = api(&base_url).list_products().await.unwrap_err();

    assert!(err.message().starts_with("Invalid response body"), "{err}");
}

#[tokio::test]
async fn unreachable_backend_is_a_request_error() {
    let base_url = unreachable_base_url().await;

    let err = api(&base_url).list_products().await.unwrap_err();

    assert!(err.message().starts_with("Network error"), "{err}");
}
