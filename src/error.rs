use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart '{chart}' received an empty data collection")]
    EmptyData { chart: &'static str },

    #[error("label '{label}' does not match date format '{format}'")]
    InvalidDate { label: String, format: String },

    #[error("entry '{label}' has a non-finite result value")]
    NonFiniteValue { label: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
