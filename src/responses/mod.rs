pub mod html;
pub mod json;

use crate::errors::ServerError;
use astra::Response;

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

pub use html::{html_response, html_response_with_status};
pub use json::{json_error_response, json_response};
