use thiserror::Error;

pub type SiteKitResult<T> = Result<T, SiteKitError>;

#[derive(Error, Debug)]
pub enum SiteKitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Page snapshot error: {0}")]
    Snapshot(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for SiteKitError {
    fn from(err: config::ConfigError) -> Self {
        SiteKitError::Config(err.to_string())
    }
}
