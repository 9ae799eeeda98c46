//! Error types for relative time conversion.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelativeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, RelativeError>;
