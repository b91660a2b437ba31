use thiserror::Error;

/// Errors raised by the surfaces around the metadata pipeline (configuration,
/// CLI input). Parsing, normalizing and applying metadata never fail.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, MetadataError>;
