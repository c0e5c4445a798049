use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("Failed to access calorie model {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid calorie model: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Need at least {minimum} training samples, got {current}")]
    InsufficientSamples { minimum: usize, current: usize },

    #[error("Training data is degenerate, the regression has no unique solution")]
    SingularSystem,

    #[error("Calorie model produced a non-finite prediction")]
    NonFinitePrediction,
}
