use std::error::Error;
use thiserror::Error;

/// Result alias for remote store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by remote score stores regardless of the transport behind them.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store could not be reached or answered with garbage.
    #[error("score store unavailable: {message}")]
    Unavailable {
        /// Backend-specific description.
        message: String,
        /// Underlying failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The store answered but refused the update.
    #[error("score store rejected the update (status {status})")]
    Rejected {
        /// HTTP status returned by the store.
        status: u16,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}
