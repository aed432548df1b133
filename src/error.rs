//! Failures of the score synchronisation engine.

use thiserror::Error;

use crate::{dao::storage::StorageError, sync::StatusKind};

/// Why a sync attempt did not end with an acknowledged score.
///
/// None of these reach the key handler; they only surface as a status message.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Identity or credential missing.
    #[error("no logged in session")]
    NoSession,
    /// The store could not be reached or refused the update.
    #[error("score update failed")]
    Transport(#[source] StorageError),
    /// The store did not answer within the sync timeout.
    #[error("score update timed out")]
    Timeout,
}

impl From<StorageError> for SyncError {
    fn from(err: StorageError) -> Self {
        SyncError::Transport(err)
    }
}

impl SyncError {
    /// Status message shown for this failure.
    pub fn status(&self) -> StatusKind {
        match self {
            SyncError::NoSession => StatusKind::LoginRequired,
            SyncError::Transport(_) | SyncError::Timeout => StatusKind::Failed,
        }
    }
}
