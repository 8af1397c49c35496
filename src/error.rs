use thiserror::Error;

/// Errors raised at the parameter boundary. Physics functions never fail.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed document, missing field or wrong type
    #[error("invalid parameters: {0}")]
    Json(#[from] serde_json::Error),

    /// A numeric field is NaN or infinite
    #[error("field `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
