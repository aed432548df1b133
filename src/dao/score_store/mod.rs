//! Remote authority for cumulative scores.

/// REST implementation of [`ScoreStore`].
pub mod http;

use futures::future::BoxFuture;

use crate::dao::{models::ScoreUpdateEntity, storage::StorageResult};

/// Remote authority that persists a player's cumulative score.
pub trait ScoreStore: Send + Sync {
    /// Push `update` on behalf of the holder of `credential`.
    ///
    /// Resolves to `Ok(())` only when the store acknowledged the write.
    fn update_score(
        &self,
        credential: String,
        update: ScoreUpdateEntity,
    ) -> BoxFuture<'static, StorageResult<()>>;
}
