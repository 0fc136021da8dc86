use crate::router::handle;
use crate::tests::utils::{body_string, init_test_estimator};
use astra::Body;
use http::{Method, Request};

#[test]
fn home_page_renders_the_form() {
    let estimator = init_test_estimator();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &estimator).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"action="/estimate""#));
    assert!(body.contains("Kensington and Chelsea"));
    assert!(body.contains("Semi-Detached Bungalow"));
    assert!(body.contains("consult professional valuers"));
}

#[test]
fn home_page_preselects_defaults() {
    let estimator = init_test_estimator();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let body = body_string(handle(req, &estimator).unwrap());
    assert!(body.contains(r#"<option value="Hackney" selected>"#));
    assert!(body.contains(r#"<option value="Flat" selected>"#));
}

#[test]
fn unknown_route_is_not_found() {
    let estimator = init_test_estimator();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/admin")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &estimator).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));
    assert_eq!(crate::templates::html_error_response(err).status(), 404);
}

#[test]
fn health_reports_the_loaded_artifact() {
    let estimator = init_test_estimator();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/healthz")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &estimator).unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["model"], "london-epc-linear");
    assert_eq!(json["categories_version"], "2025.1");
}
