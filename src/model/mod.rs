pub mod bundle;
pub mod registry;
pub mod scaling;
pub mod trained;

pub use bundle::ModelBundle;
pub use registry::{CategoryRegistry, Slot};
pub use scaling::{FloorAreaTransform, ScalingParameters};
pub use trained::{Target, TrainedModel};
