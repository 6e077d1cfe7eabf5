//! HttpSource integration tests against a local fixture server

use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use bazaar::prelude::*;
use serde_json::json;

/// Bind the fixture app on an ephemeral port and return its base URL
async fn serve(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn fixture_app() -> axum::Router {
    axum::Router::new()
        .route(
            "/products",
            get(|| async {
                Json(json!({"products": [
                    {"id": 1, "title": "Red Shoe", "category": "shoes", "price": 120.0},
                    {"id": 2, "title": "Blue Hat", "category": "hats", "price": 40.0}
                ]}))
            }),
        )
        .route(
            "/order",
            get(|| async { Json(json!([{"id": 7, "shipping_address": "1 St", "payment_method": "card", "order_total": 9.5, "status": "paid"}])) }),
        )
        .route(
            "/wishlist",
            get(|headers: HeaderMap| async move {
                if headers.contains_key("authorization") {
                    Json(json!({"wishlist": [{"id": 1, "title": "Red Shoe", "price": 120.0}]}))
                        .into_response()
                } else {
                    StatusCode::UNAUTHORIZED.into_response()
                }
            }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/not-json", get(|| async { "<html>oops</html>" }))
}

#[tokio::test]
async fn fetches_and_decodes_a_collection() {
    let base = serve(fixture_app()).await;
    let source = HttpSource::new(&base);

    let products: Vec<Product> = fetch_collection(&source, "/products").await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Red Shoe");
}

#[tokio::test]
async fn bare_array_endpoints_decode_too() {
    let base = serve(fixture_app()).await;
    let source = HttpSource::new(&base);

    let orders: Vec<Order> = fetch_collection(&source, "/order").await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, 7);
}

#[tokio::test]
async fn non_success_status_is_a_source_error() {
    let base = serve(fixture_app()).await;
    let source = HttpSource::new(&base);

    let err = source.fetch("/broken").await.unwrap_err();
    assert_eq!(err.error_code(), "SOURCE_BAD_STATUS");
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let base = serve(fixture_app()).await;
    let source = HttpSource::new(&base);

    let err = source.fetch("/not-json").await.unwrap_err();
    assert_eq!(err.error_code(), "SOURCE_DECODE_ERROR");
}

#[tokio::test]
async fn unreachable_host_is_an_http_error() {
    // Nothing listens on this port
    let source = HttpSource::new("http://127.0.0.1:1");
    let err = source.fetch("/products").await.unwrap_err();
    assert_eq!(err.error_code(), "SOURCE_HTTP_ERROR");
}

#[tokio::test]
async fn bearer_token_reaches_the_endpoint() {
    let base = serve(fixture_app()).await;

    let authed = HttpSource::new(&base).with_bearer_token("token-123");
    assert!(authed.is_authenticated());
    let items: Vec<WishlistItem> = fetch_collection(&authed, "/wishlist").await.unwrap();
    assert_eq!(items.len(), 1);

    let anonymous = HttpSource::new(&base);
    let err = anonymous.fetch("/wishlist").await.unwrap_err();
    assert_eq!(err.error_code(), "SOURCE_BAD_STATUS");
}

#[tokio::test]
async fn wishlist_view_against_http() {
    let base = serve(fixture_app()).await;
    let source = HttpSource::new(&base).with_bearer_token("token-123");

    let mut view = WishlistView::new();
    view.mount(&source).await;
    assert!(view.phase().is_ready());
    assert_eq!(view.items().len(), 1);
}
