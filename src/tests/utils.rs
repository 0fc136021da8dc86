use crate::domain::Estimator;
use crate::model::ModelBundle;
use astra::{Body, Response};
use std::io::Read;

/// Estimator over the shipped artifact, loaded the way `main` loads it.
pub fn init_test_estimator() -> Estimator {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/model/london.json");
    let bundle = ModelBundle::load(path, None)
        .unwrap_or_else(|e| panic!("Model bundle failed to load: {e}"));

    Estimator::new(bundle)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn form_body(pairs: &[(&str, &str)]) -> Body {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    Body::from(encoded.into_bytes())
}
