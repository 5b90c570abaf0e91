use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("CSV processing error: {0}")]
    MalformedCsv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("input must be an array of objects")]
    ShapeError,

    #[error("missing key \"{key}\" in record {row}")]
    MissingKey { key: String, row: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
