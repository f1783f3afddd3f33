use thiserror::Error;

/// Errors raised during service bootstrap: configuration loading,
/// listener binding, provider construction.
///
/// Request-level failures do not use this type; each service defines its
/// own error taxonomy with an `IntoResponse` impl for its wire format.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}
