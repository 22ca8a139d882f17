use astlens_api::{ApiError, BoxError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstlensError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Invalid dump: {0}")]
    InvalidDump(String),
    #[error("Dump source error: {0}")]
    DumpSource(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AstlensError {
    /// True for the configuration error raised by an unrecognized filter profile name.
    pub fn is_unknown_filter_profile(&self) -> bool {
        matches!(self, AstlensError::Api(ApiError::UnknownFilterProfile(_)))
    }
}

impl From<BoxError> for AstlensError {
    fn from(err: BoxError) -> Self {
        AstlensError::DumpSource(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AstlensError>;
