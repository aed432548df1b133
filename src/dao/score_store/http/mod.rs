mod config;
mod error;
mod store;

pub use config::HttpStoreConfig;
pub use error::{ScoreApiError, ScoreApiResult};
pub use store::HttpScoreStore;

use crate::dao::storage::StorageError;

impl From<ScoreApiError> for StorageError {
    fn from(err: ScoreApiError) -> Self {
        match err {
            ScoreApiError::RequestStatus { status, .. } => StorageError::Rejected {
                status: status.as_u16(),
            },
            other => StorageError::unavailable(other.to_string(), other),
        }
    }
}
