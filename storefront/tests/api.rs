//! In-process API tests
//!
//! Each test builds its own state and drives the router with
//! `tower::ServiceExt::oneshot`, so no port is bound.

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode};
use serde_json::{Value, json};
use storefront::{Config, ServerState, build_app};
use tower::ServiceExt;

fn app() -> (Router, ServerState) {
    let state = ServerState::initialize(&Config::default());
    (build_app(&state).with_state(state.clone()), state)
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app();
    let (status, body) = call(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let (app, _) = app();
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_menu_and_popular_items() {
    let (app, _) = app();

    let (status, body) = call(&app, "GET", "/api/menu", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert!(!body["data"].as_array().unwrap().is_empty());

    let (_, body) = call(&app, "GET", "/api/menu/popular", None).await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["s1", "s3", "m1", "m3", "m4", "d1", "d3", "b2"]);

    let (status, body) = call(&app, "GET", "/api/menu/items/s1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 14.99);
}

#[tokio::test]
async fn test_unknown_menu_item_is_404() {
    let (app, _) = app();

    let (status, body) = call(&app, "GET", "/api/menu/items/x9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
    assert_eq!(body["details"]["item_id"], "x9");

    let (status, _) = call(&app, "POST", "/api/cart/items", Some(json!({"id": "x9"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call(&app, "GET", "/api/menu/categories/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6101);
}

#[tokio::test]
async fn test_add_same_item_twice() {
    let (app, _) = app();

    call(&app, "POST", "/api/cart/items", Some(json!({"id": "s1"}))).await;
    let (status, body) = call(&app, "POST", "/api/cart/items", Some(json!({"id": "s1"}))).await;
    assert_eq!(status, StatusCode::OK);

    let cart = &body["data"];
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);
    assert_eq!(cart["items"][0]["quantity"], 2);
    assert_eq!(cart["total_items"], 2);
    assert_eq!(cart["total_price"], 29.98);
    assert_eq!(cart["is_open"], true);

    let (_, body) = call(&app, "GET", "/api/cart/badge", None).await;
    assert_eq!(body["data"]["count"], 2);
    assert_eq!(body["data"]["visible"], true);
}

#[tokio::test]
async fn test_quantity_floor_and_remove() {
    let (app, _) = app();
    call(&app, "POST", "/api/cart/items", Some(json!({"id": "m1"}))).await;

    let (_, body) = call(&app, "PUT", "/api/cart/items/m1", Some(json!({"quantity": 0}))).await;
    assert_eq!(body["data"]["items"][0]["quantity"], 1);

    let (_, body) = call(&app, "DELETE", "/api/cart/items/m1", None).await;
    assert_eq!(body["data"]["total_items"], 0);

    let (_, body) = call(&app, "GET", "/api/cart/badge", None).await;
    assert_eq!(body["data"]["visible"], false);
}

#[tokio::test]
async fn test_drawer_checkout_navigates_to_order_online() {
    let (app, _) = app();
    call(&app, "POST", "/api/cart/items", Some(json!({"id": "d1"}))).await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/cart/drawer",
        Some(json!({"action": "checkout"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["navigate"], "/order-online");
    assert_eq!(body["data"]["drawer"]["is_open"], false);
    assert_eq!(body["data"]["drawer"]["total_items"], 1);
}

#[tokio::test]
async fn test_delivery_with_empty_cart() {
    let (app, _) = app();

    let (status, body) = call(&app, "GET", "/api/order-online", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["view"], "empty_cart");

    let (status, body) = call(&app, "POST", "/api/order-online/continue", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn test_delivery_order_clears_cart() {
    let (app, _) = app();
    call(&app, "POST", "/api/cart/items", Some(json!({"id": "s1"}))).await;
    call(&app, "POST", "/api/cart/items", Some(json!({"id": "s1"}))).await;

    let (status, body) = call(
        &app,
        "PUT",
        "/api/order-online/details",
        Some(json!({"name": "Ann", "phone": "555-1", "address": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["view"], "details");

    let (_, body) = call(&app, "POST", "/api/order-online/continue", None).await;
    assert_eq!(body["data"]["view"], "payment");
    assert_eq!(body["data"]["total"], 29.98);

    // Online payment is not available yet
    let (status, body) = call(
        &app,
        "PUT",
        "/api/order-online/payment",
        Some(json!({"method": "online"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Payment method coming soon");

    // Address is still blank
    let (status, body) = call(&app, "POST", "/api/order-online/submit", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["fields"], json!(["address"]));

    call(
        &app,
        "PUT",
        "/api/order-online/details",
        Some(json!({"name": "Ann", "phone": "555-1", "address": "1 Main St"})),
    )
    .await;
    let (status, body) = call(&app, "POST", "/api/order-online/submit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order placed successfully!");
    assert_eq!(body["data"]["total"], 29.98);
    assert_eq!(body["data"]["payment_label"], "Cash on Delivery");

    let (_, body) = call(&app, "GET", "/api/cart", None).await;
    assert_eq!(body["data"]["total_items"], 0);

    let (status, _) = call(&app, "POST", "/api/order-online/submit", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = call(&app, "DELETE", "/api/order-online", None).await;
    assert_eq!(body["data"]["view"], "empty_cart");
}

async fn place_order(app: &Router, item: &str) {
    call(app, "POST", "/api/cart/items", Some(json!({"id": item}))).await;
    call(
        app,
        "PUT",
        "/api/order-online/details",
        Some(json!({"name": "Ann", "phone": "555-1", "address": "1 Main St"})),
    )
    .await;
    call(app, "POST", "/api/order-online/continue", None).await;
    let (status, _) = call(app, "POST", "/api/order-online/submit", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_second_order_in_same_session() {
    let (app, _) = app();
    place_order(&app, "s1").await;

    // Confirmation stays until the cart is refilled
    let (_, body) = call(&app, "GET", "/api/order-online", None).await;
    assert_eq!(body["data"]["view"], "confirmation");

    call(&app, "POST", "/api/cart/items", Some(json!({"id": "m1"}))).await;
    let (status, body) = call(&app, "GET", "/api/order-online", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["view"], "details");
    assert_eq!(body["data"]["info"]["name"], "");

    let (status, body) = call(&app, "POST", "/api/order-online/continue", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["view"], "payment");
    assert_eq!(body["data"]["total"], 14.99);
}

#[tokio::test]
async fn test_drawer_checkout_after_placed_order() {
    let (app, _) = app();
    place_order(&app, "s1").await;

    call(&app, "POST", "/api/cart/items", Some(json!({"id": "d1"}))).await;
    let (_, body) = call(
        &app,
        "POST",
        "/api/cart/drawer",
        Some(json!({"action": "checkout"})),
    )
    .await;
    assert_eq!(body["data"]["navigate"], "/order-online");

    let (status, body) = call(&app, "POST", "/api/order-online/continue", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["view"], "payment");
    assert_eq!(body["data"]["total_items"], 1);
}

#[tokio::test]
async fn test_pre_order_stepper_saturates() {
    let (app, state) = app();
    let tomorrow = state.today().succ_opt().unwrap().to_string();
    call(
        &app,
        "PUT",
        "/api/pre-order/schedule",
        Some(json!({"date": tomorrow, "time": "7:30 PM"})),
    )
    .await;
    call(&app, "POST", "/api/pre-order/continue", None).await;
    call(&app, "POST", "/api/pre-order/items", Some(json!({"id": "d1"}))).await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/pre-order/items/d1/adjust",
        Some(json!({"delta": i64::MAX})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"][0]["quantity"], 9999);

    let (status, body) = call(
        &app,
        "POST",
        "/api/pre-order/items/d1/adjust",
        Some(json!({"delta": i64::MIN})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"], json!([]));
}

#[tokio::test]
async fn test_pre_order_flow() {
    let (app, state) = app();
    let tomorrow = state.today().succ_opt().unwrap().to_string();

    // Schedule is required
    let (status, body) = call(&app, "POST", "/api/pre-order/continue", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please select date and time");

    call(
        &app,
        "PUT",
        "/api/pre-order/schedule",
        Some(json!({"booking_ref": "BK-42", "date": tomorrow, "time": "7:30 PM"})),
    )
    .await;
    let (_, body) = call(&app, "POST", "/api/pre-order/continue", None).await;
    assert_eq!(body["data"]["view"], "items");

    // Empty selection cannot continue
    let (_, body) = call(&app, "POST", "/api/pre-order/continue", None).await;
    assert_eq!(body["code"], 4002);

    call(&app, "POST", "/api/pre-order/items", Some(json!({"id": "m1"}))).await;
    call(&app, "POST", "/api/pre-order/items", Some(json!({"id": "d1"}))).await;
    let (_, body) = call(
        &app,
        "POST",
        "/api/pre-order/items/d1/adjust",
        Some(json!({"delta": -1})),
    )
    .await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);

    let (_, body) = call(&app, "POST", "/api/pre-order/continue", None).await;
    assert_eq!(body["data"]["view"], "payment");

    let (status, body) = call(&app, "POST", "/api/pre-order/submit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Pre-order submitted successfully!");
    assert_eq!(body["data"]["booking_ref"], "BK-42");
    assert_eq!(body["data"]["time"], "7:30 PM");
    assert_eq!(body["data"]["payment_label"], "Pay at Restaurant");

    // The pre-order selection never touches the cart
    let (_, body) = call(&app, "GET", "/api/cart", None).await;
    assert_eq!(body["data"]["total_items"], 0);
}

#[tokio::test]
async fn test_book_table() {
    let (app, state) = app();
    let tomorrow = state.today().succ_opt().unwrap().to_string();

    let (_, body) = call(&app, "GET", "/api/book-table", None).await;
    assert_eq!(body["data"]["view"], "form");
    assert_eq!(body["data"]["time_slots"].as_array().unwrap().len(), 10);

    let (status, body) = call(&app, "POST", "/api/book-table/submit", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["fields"], json!(["name", "phone", "date", "time"]));

    call(
        &app,
        "PUT",
        "/api/book-table",
        Some(json!({"name": "Ann", "phone": "555-1", "date": tomorrow, "time": "6:00 PM"})),
    )
    .await;

    let (_, body) = call(&app, "GET", "/api/book-table/whatsapp", None).await;
    let url = body["data"]["url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/"));
    assert!(url.contains("Name%3A%20Ann"));

    let (status, body) = call(&app, "POST", "/api/book-table/submit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Booking request submitted successfully!");
    assert_eq!(body["data"]["name"], "Ann");
    assert_eq!(body["data"]["time"], "6:00 PM");
    assert_eq!(body["data"]["guests"], "2");
    assert_eq!(body["data"]["guests_label"], "2 people");

    let (_, body) = call(&app, "POST", "/api/book-table/reset", None).await;
    assert_eq!(body["data"]["view"], "form");
    assert_eq!(body["data"]["form"]["name"], "Ann");
}

#[tokio::test]
async fn test_book_table_rejects_past_date() {
    let (app, state) = app();
    let yesterday = state.today().pred_opt().unwrap().to_string();

    call(
        &app,
        "PUT",
        "/api/book-table",
        Some(json!({"name": "Ann", "phone": "555-1", "date": yesterday, "time": "6:00 PM"})),
    )
    .await;
    let (status, body) = call(&app, "POST", "/api/book-table/submit", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7001);
}

#[tokio::test]
async fn test_auth_flow() {
    let (app, _) = app();

    let (status, body) = call(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"email": "ann@example.com", "password": "12345"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Password must be at least 6 characters");

    let (status, body) = call(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"email": "", "password": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please fill in all fields");

    let (_, body) = call(&app, "GET", "/api/auth/session", None).await;
    assert_eq!(body["data"], Value::Null);

    let (status, body) = call(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"email": "ann@example.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["email"], "ann@example.com");

    let (_, body) = call(&app, "GET", "/api/auth/session", None).await;
    assert_eq!(body["data"]["user"]["email"], "ann@example.com");

    let (status, _) = call(&app, "POST", "/api/auth/logout", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = call(&app, "GET", "/api/auth/session", None).await;
    assert_eq!(body["data"], Value::Null);

    let (_, body) = call(
        &app,
        "POST",
        "/api/auth/oauth",
        Some(json!({"provider": "google"})),
    )
    .await;
    assert_eq!(body["data"]["user"]["id"], "1");
    assert_eq!(body["data"]["user"]["email"], "user@example.com");
}

#[tokio::test]
async fn test_book_table_blank_schedule_and_numeric_guests() {
    let (app, _) = app();

    let (status, body) = call(
        &app,
        "PUT",
        "/api/book-table",
        Some(json!({"name": "Ann", "phone": "555-1", "date": "", "time": "", "guests": 4})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);

    let (_, body) = call(&app, "GET", "/api/book-table", None).await;
    assert_eq!(body["data"]["form"]["guests"], "4");

    let (status, body) = call(&app, "POST", "/api/book-table/submit", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7);
    assert_eq!(body["details"]["fields"], json!(["date", "time"]));
}

#[tokio::test]
async fn test_bad_bodies_use_error_envelope() {
    let (app, _) = app();

    let (status, body) = call(&app, "POST", "/api/cart/items", Some(json!({"item": "s1"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
    assert_eq!(body["details"]["status"], 422);

    let (status, body) = call(&app, "PUT", "/api/book-table", Some(json!({"guests": 11}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);

    // No JSON content type
    let (status, body) = call(&app, "PUT", "/api/order-online/details", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
    assert_eq!(body["details"]["status"], 415);
}

#[tokio::test]
async fn test_unknown_route_is_404_envelope() {
    let (app, _) = app();
    let (status, body) = call(&app, "GET", "/api/specials", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
    assert_eq!(body["message"], "Route /api/specials not found");
    assert_eq!(body["details"]["resource"], "Route /api/specials");
}
