use crate::domain::input::ApiInput;
use crate::domain::{EstimateError, Estimator, RawInput};
use crate::errors::ServerError;
use crate::responses::{
    html_response, html_response_with_status, json_error_response, json_response, ResultResp,
};
use crate::templates;
use astra::Request;
use log::{debug, error, warn};
use serde::Serialize;
use std::io::Read;
use url::form_urlencoded;

/// Form posts are five short fields; anything bigger is not ours.
const MAX_BODY_BYTES: u64 = 16 * 1024;

pub fn handle(req: Request, estimator: &Estimator) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!("{method} {path}");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page(
            estimator,
            &RawInput::default(),
            None,
        )),
        ("POST", "/estimate") => estimate_form(req, estimator),
        ("POST", "/api/estimate") => estimate_api(req, estimator),
        ("GET", "/healthz") => health(estimator),
        _ => Err(ServerError::NotFound),
    }
}

fn estimate_form(req: Request, estimator: &Estimator) -> ResultResp {
    let body = read_body(req)?;
    let parsed = RawInput::from_form(form_urlencoded::parse(&body));

    let input = match parsed {
        Ok(input) => input,
        Err(e) => return rejected_form(estimator, None, e),
    };

    match estimator.estimate(&input) {
        Ok(estimate) => html_response(templates::pages::estimate_page(estimator, &input, &estimate)),
        Err(e) if e.is_user_error() => rejected_form(estimator, Some(input), e),
        Err(e) => {
            error!("estimate failed: {e}");
            Err(e.into())
        }
    }
}

/// Re-render the form with the corrective message. Keeps what the user
/// typed when it could be parsed.
fn rejected_form(estimator: &Estimator, input: Option<RawInput>, err: EstimateError) -> ResultResp {
    warn!("rejected estimate input: {err}");
    let input = input.unwrap_or_default();
    let message = corrective_message(&err);
    html_response_with_status(
        422,
        templates::pages::home_page(estimator, &input, Some(&message)),
    )
}

fn corrective_message(err: &EstimateError) -> String {
    match err {
        EstimateError::InvalidCategory { field, .. } => {
            format!("Please choose a {field} from the list.")
        }
        EstimateError::InvalidRange { field, reason } => format!("The {field} {reason}."),
        EstimateError::ShapeMismatch(_) => "The estimator is misconfigured.".to_string(),
    }
}

#[derive(Debug, Serialize)]
struct ApiEstimate<'a> {
    price: f64,
    low: f64,
    high: f64,
    model: &'a str,
    version: &'a str,
}

fn estimate_api(req: Request, estimator: &Estimator) -> ResultResp {
    let body = read_body(req)?;

    let api: ApiInput = match serde_json::from_slice(&body) {
        Ok(api) => api,
        Err(e) => return json_error_response(&ServerError::BadRequest(format!("invalid JSON: {e}"))),
    };

    match api.into_raw().and_then(|input| estimator.estimate(&input)) {
        Ok(estimate) => {
            let bundle = estimator.bundle();
            json_response(
                200,
                &ApiEstimate {
                    price: estimate.price.value(),
                    low: estimate.range.low,
                    high: estimate.range.high,
                    model: &bundle.name,
                    version: &bundle.version,
                },
            )
        }
        Err(e) => {
            if e.is_user_error() {
                warn!("rejected estimate input: {e}");
            } else {
                error!("estimate failed: {e}");
            }
            json_error_response(&ServerError::Estimate(e))
        }
    }
}

#[derive(Debug, Serialize)]
struct Health<'a> {
    status: &'a str,
    model: &'a str,
    version: &'a str,
    categories_version: &'a str,
}

fn health(estimator: &Estimator) -> ResultResp {
    let bundle = estimator.bundle();
    json_response(
        200,
        &Health {
            status: "ok",
            model: &bundle.name,
            version: &bundle.version,
            categories_version: bundle.categories.version(),
        },
    )
}

/// Reads at most `MAX_BODY_BYTES`; a longer body is rejected rather than cut.
fn read_body(req: Request) -> Result<Vec<u8>, ServerError> {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read request body: {e}")))?;

    if body.len() as u64 > MAX_BODY_BYTES {
        warn!("rejected request body over {MAX_BODY_BYTES} bytes");
        return Err(ServerError::BadRequest(format!(
            "request body exceeds {MAX_BODY_BYTES} bytes"
        )));
    }
    Ok(body)
}
