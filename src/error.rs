use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid drawing width: {width}")]
    InvalidWidth { width: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid layout config: {0}")]
    InvalidConfig(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
