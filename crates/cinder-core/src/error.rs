use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Platform-wide error.
///
/// Keep this small. Crates with richer failure modes define their own error and map into this one.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("config error: {0}")]
    Config(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("{0}")]
    Other(String),
}
