mod error;
mod estimator;
mod model;
mod needs;
mod profile;

pub use error::EstimatorError;
pub use estimator::*;
pub use model::*;
pub use needs::*;
pub use profile::*;
