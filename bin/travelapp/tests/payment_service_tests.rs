mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::fixtures::{
    insert_booking, insert_listing, insert_nameless_user, insert_payment, insert_user,
    payments_for,
};
use common::{create_test_app_state, create_test_server, token_for, UNREACHABLE_CHAPA_URL};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use serial_test::serial;
use travelapp_core::services::payment_service::PaymentService;
use travelapp_primitives::error::{ApiError, ChapaError};
use travelapp_primitives::models::entities::booking::Booking;
use travelapp_primitives::models::entities::enum_types::{BookingStatus, PaymentStatus};
use travelapp_primitives::models::entities::payment::Payment;
use travelapp_primitives::models::entities::user::User;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chapa_base(server: &MockServer) -> String {
    format!("{}/v1/transaction", server.uri())
}

fn sample_booking() -> Booking {
    Booking {
        id: Uuid::new_v4(),
        listing_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        check_in: common::fixtures::date(2026, 11, 1),
        check_out: common::fixtures::date(2026, 11, 3),
        status: BookingStatus::Pending,
        created_at: Utc::now(),
    }
}

fn sample_payment(booking: &Booking, status: PaymentStatus) -> Payment {
    Payment {
        id: Uuid::new_v4(),
        booking_id: booking.id,
        amount: dec!(100.00),
        currency: "ETB".to_string(),
        transaction_reference: PaymentService::transaction_reference(booking.id),
        chapa_tx_ref: None,
        status,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn sample_user(first: Option<&str>, last: Option<&str>) -> User {
    User {
        id: Uuid::new_v4(),
        username: "guest".to_string(),
        email: "guest@example.com".to_string(),
        first_name: first.map(str::to_string),
        last_name: last.map(str::to_string),
        password_hash: String::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_transaction_reference_is_derived_from_booking() {
    let id = Uuid::parse_str("7f1c6a3e-2b1d-4c5e-9f00-123456789abc").unwrap();
    assert_eq!(
        PaymentService::transaction_reference(id),
        "CHAPA-7f1c6a3e-2b1d-4c5e-9f00-123456789abc"
    );
}

#[test]
fn test_completed_payment_is_not_payable() {
    let booking = sample_booking();

    assert!(PaymentService::ensure_payable(None).is_ok());
    assert!(PaymentService::ensure_payable(Some(&sample_payment(&booking, PaymentStatus::Pending))).is_ok());
    assert!(PaymentService::ensure_payable(Some(&sample_payment(&booking, PaymentStatus::Failed))).is_ok());

    match PaymentService::ensure_payable(Some(&sample_payment(&booking, PaymentStatus::Completed))) {
        Err(ApiError::BadRequest(msg)) => assert_eq!(msg, "Payment already completed."),
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

#[test]
fn test_initialize_request_fields() {
    let booking = sample_booking();
    let payment = sample_payment(&booking, PaymentStatus::Pending);
    let payer = sample_user(Some("Abebe"), Some("Bikila"));

    let req = PaymentService::build_initialize_request("http://localhost:8080/", &booking, &payer, &payment);

    assert_eq!(req.amount, "100.00");
    assert_eq!(req.currency, "ETB");
    assert_eq!(req.email, "guest@example.com");
    assert_eq!(req.first_name, "Abebe");
    assert_eq!(req.last_name, "Bikila");
    assert_eq!(req.tx_ref, format!("CHAPA-{}", booking.id));
    assert_eq!(
        req.callback_url,
        format!("http://localhost:8080/api/verify-payment/{}/", booking.id)
    );
    assert_eq!(
        req.return_url,
        format!("http://localhost:8080/bookings/{}/success/", booking.id)
    );
    assert_eq!(req.customization.title, "Booking Payment");
    assert_eq!(
        req.customization.description,
        format!("Payment for booking {}", booking.id)
    );
}

#[test]
fn test_initialize_request_defaults_missing_names() {
    let booking = sample_booking();
    let payment = sample_payment(&booking, PaymentStatus::Pending);

    let req = PaymentService::build_initialize_request(
        "http://localhost:8080",
        &booking,
        &sample_user(None, Some("")),
        &payment,
    );

    assert_eq!(req.first_name, "Guest");
    assert_eq!(req.last_name, "User");
}

#[test]
fn test_provider_status_mapping() {
    assert_eq!(PaymentStatus::from_provider("success"), PaymentStatus::Completed);
    assert_eq!(PaymentStatus::from_provider("failed"), PaymentStatus::Failed);
    assert_eq!(PaymentStatus::from_provider("pending"), PaymentStatus::Pending);
    assert_eq!(PaymentStatus::from_provider(""), PaymentStatus::Pending);
}

async fn mount_checkout(server: &MockServer, checkout_url: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/transaction/initialize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Hosted Link",
            "data": { "checkout_url": checkout_url }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
#[serial]
async fn test_initiate_creates_single_pending_payment() {
    let chapa = MockServer::start().await;
    let Some(ctx) = create_test_app_state(&chapa_base(&chapa)) else {
        return;
    };
    let mut conn = ctx.state.db.get().unwrap();

    let host = insert_user(&mut conn);
    let guest = insert_nameless_user(&mut conn);
    let listing = insert_listing(&mut conn, &host, dec!(100.00));
    let booking = insert_booking(&mut conn, &listing, &guest);

    Mock::given(method("POST"))
        .and(path("/v1/transaction/initialize"))
        .and(body_partial_json(json!({
            "amount": "100.00",
            "currency": "ETB",
            "email": guest.email,
            "first_name": "Guest",
            "last_name": "User",
            "tx_ref": format!("CHAPA-{}", booking.id)
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Hosted Link",
            "data": { "checkout_url": "https://pay.example/xyz" }
        })))
        .expect(2)
        .mount(&chapa)
        .await;

    let response = PaymentService::initiate_payment(&ctx.state, booking.id)
        .await
        .unwrap();
    assert_eq!(response.checkout_url, "https://pay.example/xyz");
    assert_eq!(response.message, "Payment initialized successfully.");

    let stored = payments_for(&mut conn, &booking);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].amount, dec!(100.00));
    assert_eq!(stored[0].amount.to_string(), "100.00");
    assert_eq!(stored[0].currency, "ETB");
    assert_eq!(stored[0].status, PaymentStatus::Pending);
    assert_eq!(stored[0].chapa_tx_ref.as_deref(), Some(stored[0].transaction_reference.as_str()));

    // a retry reuses the stored payment
    PaymentService::initiate_payment(&ctx.state, booking.id)
        .await
        .unwrap();
    let again = payments_for(&mut conn, &booking);
    assert_eq!(again.len(), 1);
    assert_eq!(again[0].id, stored[0].id);
}

#[tokio::test]
#[serial]
async fn test_initiate_rejects_completed_payment() {
    let chapa = MockServer::start().await;
    let Some(ctx) = create_test_app_state(&chapa_base(&chapa)) else {
        return;
    };
    let mut conn = ctx.state.db.get().unwrap();

    let host = insert_user(&mut conn);
    let guest = insert_user(&mut conn);
    let listing = insert_listing(&mut conn, &host, dec!(100.00));
    let booking = insert_booking(&mut conn, &listing, &guest);
    insert_payment(&mut conn, &booking, dec!(100.00), PaymentStatus::Completed);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&chapa)
        .await;

    let server = create_test_server(ctx.state.clone());
    let response = server
        .post(&format!("/api/initiate-payment/{}/", booking.id))
        .authorization_bearer(token_for(&ctx.state, guest.id))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Payment already completed.");
    assert_eq!(payments_for(&mut conn, &booking).len(), 1);
}

#[tokio::test]
#[serial]
async fn test_initiate_reuses_failed_payment() {
    let chapa = MockServer::start().await;
    let Some(ctx) = create_test_app_state(&chapa_base(&chapa)) else {
        return;
    };
    mount_checkout(&chapa, "https://pay.example/retry").await;
    let mut conn = ctx.state.db.get().unwrap();

    let host = insert_user(&mut conn);
    let guest = insert_user(&mut conn);
    let listing = insert_listing(&mut conn, &host, dec!(250.00));
    let booking = insert_booking(&mut conn, &listing, &guest);
    let failed = insert_payment(&mut conn, &booking, dec!(250.00), PaymentStatus::Failed);

    let response = PaymentService::initiate_payment(&ctx.state, booking.id)
        .await
        .unwrap();
    assert_eq!(response.checkout_url, "https://pay.example/retry");

    let stored = payments_for(&mut conn, &booking);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, failed.id);
    assert_eq!(stored[0].status, PaymentStatus::Failed);
}

#[tokio::test]
#[serial]
async fn test_initiate_for_missing_booking_returns_404() {
    let Some(ctx) = create_test_app_state(UNREACHABLE_CHAPA_URL) else {
        return;
    };

    let result = PaymentService::initiate_payment(&ctx.state, Uuid::new_v4()).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
#[serial]
async fn test_initiate_provider_rejection_returns_400() {
    let chapa = MockServer::start().await;
    let Some(ctx) = create_test_app_state(&chapa_base(&chapa)) else {
        return;
    };

    Mock::given(method("POST"))
        .and(path("/v1/transaction/initialize"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "failed",
            "message": "Invalid API key"
        })))
        .mount(&chapa)
        .await;

    let mut conn = ctx.state.db.get().unwrap();
    let host = insert_user(&mut conn);
    let guest = insert_user(&mut conn);
    let listing = insert_listing(&mut conn, &host, dec!(100.00));
    let booking = insert_booking(&mut conn, &listing, &guest);

    let server = create_test_server(ctx.state.clone());
    let response = server
        .post(&format!("/api/initiate-payment/{}/", booking.id))
        .authorization_bearer(token_for(&ctx.state, guest.id))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid API key");

    let stored = payments_for(&mut conn, &booking);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].chapa_tx_ref, None);
}

#[tokio::test]
#[serial]
async fn test_initiate_with_unreachable_provider_returns_502() {
    let Some(ctx) = create_test_app_state(UNREACHABLE_CHAPA_URL) else {
        return;
    };
    let mut conn = ctx.state.db.get().unwrap();
    let host = insert_user(&mut conn);
    let guest = insert_user(&mut conn);
    let listing = insert_listing(&mut conn, &host, dec!(100.00));
    let booking = insert_booking(&mut conn, &listing, &guest);

    let result = PaymentService::initiate_payment(&ctx.state, booking.id).await;
    assert!(matches!(result, Err(ApiError::Payment(ChapaError::Network(_)))));

    let server = create_test_server(ctx.state.clone());
    let response = server
        .post(&format!("/api/initiate-payment/{}/", booking.id))
        .authorization_bearer(token_for(&ctx.state, guest.id))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Network error"));
}

#[tokio::test]
#[serial]
async fn test_verify_without_payment_returns_404() {
    let chapa = MockServer::start().await;
    let Some(ctx) = create_test_app_state(&chapa_base(&chapa)) else {
        return;
    };

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&chapa)
        .await;

    let mut conn = ctx.state.db.get().unwrap();
    let host = insert_user(&mut conn);
    let guest = insert_user(&mut conn);
    let listing = insert_listing(&mut conn, &host, dec!(100.00));
    let booking = insert_booking(&mut conn, &listing, &guest);

    let server = create_test_server(ctx.state.clone());
    let response = server
        .get(&format!("/api/verify-payment/{}/", booking.id))
        .authorization_bearer(token_for(&ctx.state, guest.id))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "No payment found for this booking.");
    assert!(payments_for(&mut conn, &booking).is_empty());
}

async fn verify_with_provider_status(provider_status: Option<&str>) -> Option<(PaymentStatus, Value)> {
    let chapa = MockServer::start().await;
    let ctx = create_test_app_state(&chapa_base(&chapa))?;

    let mut conn = ctx.state.db.get().unwrap();
    let host = insert_user(&mut conn);
    let guest = insert_user(&mut conn);
    let listing = insert_listing(&mut conn, &host, dec!(100.00));
    let booking = insert_booking(&mut conn, &listing, &guest);
    insert_payment(&mut conn, &booking, dec!(100.00), PaymentStatus::Pending);

    let data = match provider_status {
        Some(status) => json!({ "status": status, "tx_ref": format!("CHAPA-{}", booking.id) }),
        None => Value::Null,
    };
    let body = json!({ "status": "success", "message": "Payment details", "data": data });

    Mock::given(method("GET"))
        .and(path(format!("/v1/transaction/verify/CHAPA-{}", booking.id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&chapa)
        .await;

    let server = create_test_server(ctx.state.clone());
    let response = server
        .get(&format!("/api/verify-payment/{}/", booking.id))
        .authorization_bearer(token_for(&ctx.state, guest.id))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["booking_id"], booking.id.to_string());
    assert_eq!(json["chapa_response"], body);

    let stored = payments_for(&mut conn, &booking);
    assert_eq!(json["payment_status"], stored[0].status.to_string());
    Some((stored[0].status, json))
}

#[tokio::test]
#[serial]
async fn test_verify_success_completes_payment() {
    if let Some((status, _)) = verify_with_provider_status(Some("success")).await {
        assert_eq!(status, PaymentStatus::Completed);
    }
}

#[tokio::test]
#[serial]
async fn test_verify_failed_marks_payment_failed() {
    if let Some((status, _)) = verify_with_provider_status(Some("failed")).await {
        assert_eq!(status, PaymentStatus::Failed);
    }
}

#[tokio::test]
#[serial]
async fn test_verify_unknown_status_stays_pending() {
    if let Some((status, _)) = verify_with_provider_status(Some("processing")).await {
        assert_eq!(status, PaymentStatus::Pending);
    }
    if let Some((status, _)) = verify_with_provider_status(None).await {
        assert_eq!(status, PaymentStatus::Pending);
    }
}

#[tokio::test]
#[serial]
async fn test_verify_rejection_leaves_status_untouched() {
    let chapa = MockServer::start().await;
    let Some(ctx) = create_test_app_state(&chapa_base(&chapa)) else {
        return;
    };

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "status": "failed" })))
        .mount(&chapa)
        .await;

    let mut conn = ctx.state.db.get().unwrap();
    let host = insert_user(&mut conn);
    let guest = insert_user(&mut conn);
    let listing = insert_listing(&mut conn, &host, dec!(100.00));
    let booking = insert_booking(&mut conn, &listing, &guest);
    let payment = insert_payment(&mut conn, &booking, dec!(100.00), PaymentStatus::Failed);

    let result = PaymentService::verify_payment(&ctx.state, booking.id).await;
    match result {
        Err(ApiError::Payment(ChapaError::Rejected(msg))) => assert_eq!(msg, "Verification failed."),
        other => panic!("expected rejection, got {:?}", other),
    }

    let stored = payments_for(&mut conn, &booking);
    assert_eq!(stored[0].status, PaymentStatus::Failed);
    assert_eq!(stored[0].updated_at, payment.updated_at);
}
