use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate food item in catalog: {0}")]
    DuplicateItem(String),

    #[error("Food item {name} has an invalid {field} value: {value}")]
    InvalidNutrition {
        name: String,
        field: &'static str,
        value: f64,
    },
}
