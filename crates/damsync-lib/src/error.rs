use thiserror::Error;

#[derive(Error, Debug)]
pub enum DamSyncError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request: {details}")]
    InvalidRequest { details: String },

    #[error("Invalid manifest data from {url}: {details}")]
    ManifestData { url: String, details: String },

    #[error("CLI argument validation error: {details}")]
    CliArgumentValidation { details: String },

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}

impl DamSyncError {
    /// HTTP status the trigger endpoint answers with for this error.
    ///
    /// Only bad caller input (missing trigger parameters, a malformed or
    /// empty manifest) maps to a client error; everything else, including
    /// manifest-fetch transport failures, is a server error.
    pub fn status_code(&self) -> u16 {
        match self {
            DamSyncError::InvalidRequest { .. }
            | DamSyncError::ManifestData { .. }
            | DamSyncError::CliArgumentValidation { .. } => 400,
            _ => 500,
        }
    }
}
