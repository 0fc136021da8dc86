use crate::router::handle;
use crate::tests::utils::{body_string, form_body, init_test_estimator};
use http::{Method, Request};

fn post_form(pairs: &[(&str, &str)]) -> Request<astra::Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/estimate")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form_body(pairs))
        .unwrap()
}

#[test]
fn valid_form_renders_estimate() {
    let estimator = init_test_estimator();
    let req = post_form(&[
        ("borough", "Camden"),
        ("property_type", "Flat"),
        ("floor_area_sqm", "75"),
        ("room_count", "4"),
    ]);

    let resp = handle(req, &estimator).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Estimated Price: £"));
    assert!(body.contains("Likely range"));
    assert!(body.contains("Borough (Camden)"));
    assert!(body.contains("Sale year (2025)"));
    assert!(body.contains("consult professional valuers"));
}

#[test]
fn submitted_values_stay_selected() {
    let estimator = init_test_estimator();
    let req = post_form(&[
        ("borough", "Lambeth"),
        ("property_type", "Maisonette"),
        ("floor_area_sqm", "60"),
        ("room_count", "3"),
        ("is_new_build", "on"),
    ]);

    let body = body_string(handle(req, &estimator).unwrap());
    assert!(body.contains(r#"<option value="Lambeth" selected>"#));
    assert!(body.contains(r#"<option value="Maisonette" selected>"#));
    assert!(body.contains(r#"value="on" checked"#));
}

#[test]
fn unknown_borough_re_renders_form_with_message() {
    let estimator = init_test_estimator();
    let req = post_form(&[
        ("borough", "Gotham"),
        ("property_type", "Flat"),
        ("floor_area_sqm", "75"),
        ("room_count", "4"),
    ]);

    let resp = handle(req, &estimator).expect("input errors are rendered, not raised");
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("Please choose a borough from the list."));
    assert!(body.contains(r#"action="/estimate""#));
    assert!(!body.contains("Estimated Price"));
}

#[test]
fn out_of_range_rooms_re_renders_form_with_message() {
    let estimator = init_test_estimator();
    let req = post_form(&[
        ("borough", "Camden"),
        ("property_type", "Flat"),
        ("floor_area_sqm", "75"),
        ("room_count", "11"),
    ]);

    let resp = handle(req, &estimator).unwrap();
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("The room count must be between 1 and 10, got 11."));
}

#[test]
fn zero_floor_area_is_rejected() {
    let estimator = init_test_estimator();
    let req = post_form(&[
        ("borough", "Camden"),
        ("property_type", "Flat"),
        ("floor_area_sqm", "0"),
        ("room_count", "4"),
    ]);

    let resp = handle(req, &estimator).unwrap();
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("The floor area must be greater than 0"));
}

#[test]
fn missing_fields_are_rejected() {
    let estimator = init_test_estimator();
    let req = post_form(&[("borough", "Camden")]);

    let resp = handle(req, &estimator).unwrap();
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("is required"));
}

#[test]
fn enormous_floor_area_renders_full_digits() {
    let estimator = init_test_estimator();
    let req = post_form(&[
        ("borough", "Camden"),
        ("property_type", "Flat"),
        ("floor_area_sqm", "1e300"),
        ("room_count", "4"),
    ]);

    let resp = handle(req, &estimator).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Estimated Price: £"));
    assert!(!body.contains("18,446,744,073,709,551,615"));
}

#[test]
fn oversized_body_is_rejected_not_truncated() {
    let estimator = init_test_estimator();
    let padding = "x".repeat(20 * 1024);
    let req = post_form(&[
        ("notes", padding.as_str()),
        ("borough", "Camden"),
        ("property_type", "Flat"),
        ("floor_area_sqm", "75"),
        ("room_count", "4"),
    ]);

    let err = handle(req, &estimator).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));
    assert_eq!(crate::templates::html_error_response(err).status(), 400);
}
