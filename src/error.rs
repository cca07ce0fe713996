/// Main application error type
///
/// Nothing in this core is fatal: store failures degrade to defaults,
/// gateway failures are logged by the spawning caller and the
/// optimistic local state stands until the next full reload.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Gateway request failed: {0}")]
    Gateway(#[from] reqwest::Error),
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
