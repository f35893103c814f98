use thiserror::Error;

/// Top-level error type for the Aerofast site services.
///
/// Each bounded context (catalog, concierge, contact) defines its own error
/// type and converts into or from this one so that `?` works across crate
/// boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AerofastError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Concierge error: {0}")]
    Concierge(String),

    #[error("Contact error: {0}")]
    Contact(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for AerofastError {
    fn from(err: toml::de::Error) -> Self {
        AerofastError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AerofastError {
    fn from(err: toml::ser::Error) -> Self {
        AerofastError::Config(err.to_string())
    }
}

/// A specialized `Result` type for Aerofast operations.
pub type Result<T> = std::result::Result<T, AerofastError>;
