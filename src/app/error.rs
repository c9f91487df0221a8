use std::io;
use thiserror::Error;

use crate::domain::DomainError;
use crate::generator::GeneratorError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{flag} {reason}")]
    MalformedArgument { flag: String, reason: String },

    #[error("Invalid partition: {0}")]
    InvalidPartitionSpec(String),

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
