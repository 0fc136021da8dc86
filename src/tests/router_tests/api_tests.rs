use crate::router::handle;
use crate::tests::utils::{body_string, init_test_estimator};
use astra::Body;
use http::{Method, Request};

fn post_json(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/estimate")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string().into_bytes()))
        .unwrap()
}

#[test]
fn api_returns_price_and_range() {
    let estimator = init_test_estimator();
    let req = post_json(serde_json::json!({
        "borough": "Camden",
        "property_type": "Flat",
        "floor_area_sqm": 75.0,
        "room_count": 4,
        "is_new_build": false,
    }));

    let resp = handle(req, &estimator).unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    let price = json["price"].as_f64().unwrap();
    assert!(json["low"].as_f64().unwrap() < price);
    assert!(json["high"].as_f64().unwrap() > price);
    assert_eq!(json["version"], "2025.1");
}

#[test]
fn api_matches_the_estimator() {
    let estimator = init_test_estimator();
    let input = crate::domain::RawInput {
        borough: "Wandsworth".into(),
        property_type: "Terraced House".into(),
        floor_area_sqm: 110.0,
        room_count: 5,
        is_new_build: true,
    };
    let expected = estimator.predict(&input).unwrap().value();

    let resp = handle(post_json(serde_json::to_value(&input).unwrap()), &estimator).unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    let price = json["price"].as_f64().unwrap();
    assert!((price - expected).abs() / expected < 1e-12);
}

#[test]
fn api_reports_invalid_category() {
    let estimator = init_test_estimator();
    let req = post_json(serde_json::json!({
        "borough": "Camden",
        "property_type": "Castle",
        "floor_area_sqm": 75.0,
        "room_count": 4,
    }));

    let resp = handle(req, &estimator).unwrap();
    assert_eq!(resp.status(), 422);

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["kind"], "invalid_category");
}

#[test]
fn api_reports_invalid_range() {
    let estimator = init_test_estimator();
    let req = post_json(serde_json::json!({
        "borough": "Camden",
        "property_type": "Flat",
        "floor_area_sqm": -5.0,
        "room_count": 4,
    }));

    let resp = handle(req, &estimator).unwrap();
    assert_eq!(resp.status(), 422);

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["kind"], "invalid_range");
}

#[test]
fn api_rejects_malformed_json() {
    let estimator = init_test_estimator();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/estimate")
        .body(Body::from("{\"borough\": ".as_bytes().to_vec()))
        .unwrap();

    let resp = handle(req, &estimator).unwrap();
    assert_eq!(resp.status(), 400);

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["kind"], "bad_request");
}

#[test]
fn api_missing_field_is_invalid_range_like_the_form() {
    let estimator = init_test_estimator();
    let req = post_json(serde_json::json!({
        "borough": "Camden",
        "property_type": "Flat",
        "room_count": 4,
    }));

    let resp = handle(req, &estimator).unwrap();
    assert_eq!(resp.status(), 422);

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["kind"], "invalid_range");
    assert!(json["error"].as_str().unwrap().contains("floor area is required"));
}

#[test]
fn api_wrong_type_is_still_a_bad_request() {
    let estimator = init_test_estimator();
    let req = post_json(serde_json::json!({
        "borough": "Camden",
        "property_type": "Flat",
        "floor_area_sqm": "big",
        "room_count": 4,
    }));

    let resp = handle(req, &estimator).unwrap();
    assert_eq!(resp.status(), 400);
}
