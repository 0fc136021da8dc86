// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize `value` as the response body.
pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: String,
    pub kind: &'a str,
}

/// JSON rendering of a ServerError for the API routes.
pub fn json_error_response(err: &ServerError) -> ResultResp {
    let kind = match err {
        ServerError::NotFound => "not_found",
        ServerError::BadRequest(_) => "bad_request",
        ServerError::Estimate(e) => e.kind(),
        ServerError::InternalError => "internal",
    };
    let body = ErrorBody {
        error: err.to_string(),
        kind,
    };
    json_response(err.status(), &body)
}
