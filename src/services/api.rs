use futures::FutureExt;
use futures::future::BoxFuture;

use super::error::ServiceError;
use crate::model::FeedbackPayload;

/// Delivers a finished report to the backend.
pub trait FeedbackApi: Send + Sync {
    fn post(&self, payload: FeedbackPayload) -> BoxFuture<'_, Result<(), ServiceError>>;
}

/// POSTs the payload as JSON with `reqwest`.
///
/// Any non-2xx response is reported as [`ServiceError::Http`].
#[derive(Debug, Clone)]
pub struct HttpFeedbackApi {
    client: reqwest::Client,
    url: String,
}

impl HttpFeedbackApi {
    /// Creates a client posting to `base_url` joined with `path`.
    pub fn new(base_url: &str, path: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: join_url(base_url, path),
        }
    }

    /// Returns the full endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FeedbackApi for HttpFeedbackApi {
    fn post(&self, payload: FeedbackPayload) -> BoxFuture<'_, Result<(), ServiceError>> {
        async move {
            let response = self.client.post(&self.url).json(&payload).send().await?;
            let status = response.status();
            response.error_for_status()?;
            tracing::info!(url = %self.url, %status, "feedback delivered");
            Ok(())
        }
        .boxed()
    }
}

/// Joins a base URL and a path with exactly one `/` between them.
fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
