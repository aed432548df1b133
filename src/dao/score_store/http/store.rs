use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::Client;
use tracing::debug;

use crate::dao::{
    models::ScoreUpdateEntity, score_store::ScoreStore, storage::StorageResult,
};

use super::{
    config::HttpStoreConfig,
    error::{ScoreApiError, ScoreApiResult},
};

/// [`ScoreStore`] backed by the REST `updatePoints` endpoint.
#[derive(Clone)]
pub struct HttpScoreStore {
    client: Client,
    update_url: Arc<str>,
}

impl HttpScoreStore {
    /// Build the HTTP client. No request is sent until the first update.
    pub fn new(config: HttpStoreConfig) -> ScoreApiResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| ScoreApiError::ClientBuilder { source })?;

        Ok(Self {
            client,
            update_url: Arc::from(config.update_url()),
        })
    }

    async fn put_update(&self, credential: &str, update: &ScoreUpdateEntity) -> ScoreApiResult<()> {
        let url = self.update_url.to_string();
        let response = self
            .client
            .put(&url)
            .bearer_auth(credential)
            .json(update)
            .send()
            .await
            .map_err(|source| ScoreApiError::RequestSend {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let counts = update.counts();
        debug!(
            %status,
            points = counts.points,
            attempts = counts.attempts,
            "score API answered"
        );
        if status.is_success() {
            Ok(())
        } else {
            Err(ScoreApiError::RequestStatus { url, status })
        }
    }
}

impl ScoreStore for HttpScoreStore {
    fn update_score(
        &self,
        credential: String,
        update: ScoreUpdateEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .put_update(&credential, &update)
                .await
                .map_err(Into::into)
        })
    }
}
