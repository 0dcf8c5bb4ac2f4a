//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and drawing-library errors, and provides semantic
//! variants for argument validation and conversion failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Drawing error: {0}")]
    Drawing(#[from] crate::io::DrawingError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
