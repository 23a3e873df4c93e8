mod common;

use actix_web::{
    http::{header::ContentType, StatusCode},
    test,
};
use serde_json::{json, Value};

use common::{bearer_for, TestApp, GUIDE_ID, HOMESTAY_ID, SCOOTER_ID, VILLA_ID};
use tourism_market_api::services::pricing_service::{PricingOptions, SameDayPolicy};

#[actix_rt::test]
async fn test_quote_two_nights() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/quotes")
        .set_json(json!({
            "kind": "accommodation",
            "item_id": VILLA_ID,
            "start": "2024-01-10T00:00:00Z",
            "end": "2024-01-12T00:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["duration_units"], 2);
    assert_eq!(body["quantity"], 1);
    assert_eq!(body["total"], 600000.0);
    assert_eq!(body["grand_total"], 600000.0);
}

#[actix_rt::test]
async fn test_quote_rental_days_and_quantity() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/quotes")
        .set_json(json!({
            "kind": "vehicle",
            "item_id": SCOOTER_ID,
            "start": "2024-02-01T09:00:00Z",
            "end": "2024-02-04T12:00:00Z",
            "quantity": 2
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    // 3 days and 3 hours rounds up to 4 days
    assert_eq!(body["duration_units"], 4);
    assert_eq!(body["total"], 600000.0);
}

#[actix_rt::test]
async fn test_quote_rejections() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let cases = [
        (
            json!({ "kind": "accommodation", "item_id": VILLA_ID }),
            "missing_dates",
        ),
        (
            json!({
                "kind": "accommodation",
                "item_id": VILLA_ID,
                "start": "2024-01-10T00:00:00Z",
                "end": "2024-01-10T00:00:00Z"
            }),
            "empty_range",
        ),
        (
            json!({
                "kind": "accommodation",
                "item_id": VILLA_ID,
                "start": "2024-01-10T00:00:00Z",
                "end": "2024-01-12T00:00:00Z",
                "quantity": 3
            }),
            "exceeds_availability",
        ),
        (
            json!({
                "kind": "tour_guide",
                "item_id": GUIDE_ID,
                "start": "2024-01-10T00:00:00Z",
                "end": "2024-01-12T00:00:00Z",
                "quantity": 0
            }),
            "invalid_quantity",
        ),
    ];

    for (payload, code) in cases {
        let req = test::TestRequest::post()
            .uri("/api/quotes")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", code);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], code);
    }
}

#[actix_rt::test]
async fn test_quote_same_day_with_minimum_one_unit() {
    let test_app = TestApp::with_pricing(PricingOptions {
        same_day_policy: SameDayPolicy::MinimumOneUnit,
        ..Default::default()
    });
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/quotes")
        .set_json(json!({
            "kind": "tour_guide",
            "item_id": GUIDE_ID,
            "start": "2024-01-10T00:00:00Z",
            "end": "2024-01-10T00:00:00Z"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["duration_units"], 1);
    assert_eq!(body["total"], 450000.0);
}

#[actix_rt::test]
async fn test_quote_includes_service_fee() {
    let test_app = TestApp::with_pricing(PricingOptions {
        service_fee_percent: 10.0,
        ..Default::default()
    });
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/quotes")
        .set_json(json!({
            "kind": "accommodation",
            "item_id": HOMESTAY_ID,
            "start": "2024-01-10T00:00:00Z",
            "end": "2024-01-11T00:00:00Z"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 150000.0);
    assert_eq!(body["service_fee"], 15000.0);
    assert_eq!(body["grand_total"], 165000.0);
}

#[actix_rt::test]
async fn test_quote_unknown_item() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    // A vehicle id is not an accommodation
    let req = test::TestRequest::post()
        .uri("/api/quotes")
        .set_json(json!({
            "kind": "accommodation",
            "item_id": SCOOTER_ID,
            "start": "2024-01-10T00:00:00Z",
            "end": "2024-01-12T00:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_bookings_require_a_token() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let requests = [
        test::TestRequest::get().uri("/api/account/bookings").to_request(),
        test::TestRequest::get()
            .uri("/api/account/bookings")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request(),
        test::TestRequest::post()
            .uri("/api/bookings")
            .set_json(json!({}))
            .to_request(),
    ];

    for req in requests {
        let status = match test::try_call_service(&app, req).await {
            Ok(resp) => resp.status(),
            Err(err) => err.as_response_error().status_code(),
        };
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

#[actix_rt::test]
async fn test_create_and_list_bookings() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .insert_header(("Authorization", bearer_for("traveler_1")))
        .set_json(json!({
            "kind": "accommodation",
            "item_id": VILLA_ID,
            "start": "2024-01-10T00:00:00Z",
            "end": "2024-01-12T00:00:00Z",
            "quantity": 2,
            "total": 1200000
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["status"], "pending");
    assert_eq!(created["user_id"], "traveler_1");
    assert_eq!(created["total"], 1200000.0);
    assert!(created["reference"].as_str().is_some_and(|r| !r.is_empty()));

    let req = test::TestRequest::get()
        .uri("/api/account/bookings")
        .insert_header(("Authorization", bearer_for("traveler_1")))
        .to_request();
    let mine: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(mine.as_array().map(Vec::len), Some(1));
    assert_eq!(mine[0]["reference"], created["reference"]);

    let req = test::TestRequest::get()
        .uri("/api/account/bookings")
        .insert_header(("Authorization", bearer_for("traveler_2")))
        .to_request();
    let theirs: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(theirs.as_array().map(Vec::len), Some(0));
}

#[actix_rt::test]
async fn test_booking_with_tampered_total_is_rejected() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .insert_header(("Authorization", bearer_for("traveler_1")))
        .set_json(json!({
            "kind": "vehicle",
            "item_id": SCOOTER_ID,
            "start": "2024-01-10T00:00:00Z",
            "end": "2024-01-12T00:00:00Z",
            "total": 1
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "total_mismatch");

    let req = test::TestRequest::get()
        .uri("/api/account/bookings")
        .insert_header(("Authorization", bearer_for("traveler_1")))
        .to_request();
    let mine: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(mine.as_array().map(Vec::len), Some(0));
}

#[actix_rt::test]
async fn test_booking_with_empty_range_is_rejected() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .insert_header(("Authorization", bearer_for("traveler_1")))
        .set_json(json!({
            "kind": "tour_guide",
            "item_id": GUIDE_ID,
            "start": "2024-01-12T00:00:00Z",
            "end": "2024-01-10T00:00:00Z",
            "total": 0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn test_malformed_quote_body_uses_error_body() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/quotes")
        .insert_header(ContentType::json())
        .set_payload("{\"kind\": \"accommodation\",")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "bad_request");

    let req = test::TestRequest::post()
        .uri("/api/quotes")
        .set_json(json!({ "kind": "spaceship", "item_id": VILLA_ID }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "bad_request");
}
