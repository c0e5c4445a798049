mod database;
mod error;
mod features;
mod food;

pub use database::*;
pub use error::CatalogError;
pub use features::*;
pub use food::*;
