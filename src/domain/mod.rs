pub mod encoder;
pub mod errors;
pub mod estimator;
pub mod input;

pub use errors::EstimateError;
pub use estimator::{Breakdown, Estimate, Estimator};
pub use input::RawInput;
