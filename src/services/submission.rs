use super::Services;
use super::error::ServiceError;
use crate::model::{FeedbackPayload, SubmitJob};

/// Why a submission did not reach the backend.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The screenshot could not be read or encoded; nothing was sent.
    #[error("could not encode screenshot: {0}")]
    Encode(#[source] ServiceError),

    /// The request failed or the backend rejected it.
    #[error("could not send feedback: {0}")]
    Network(#[source] ServiceError),
}

/// Encodes the job's screenshot (if any), builds the payload, and posts it.
///
/// Makes at most one call to [`FeedbackApi::post`](super::FeedbackApi::post)
/// and none when encoding fails.
pub async fn deliver(
    services: &Services,
    job: SubmitJob,
    legacy_space: bool,
) -> Result<(), SubmitError> {
    let encoded = match job.screenshot {
        Some(file) => Some(
            services
                .encoder
                .read_as_base64(file)
                .await
                .map_err(SubmitError::Encode)?,
        ),
        None => None,
    };

    let payload = FeedbackPayload::new(
        job.feedback_type,
        encoded.as_deref(),
        job.comment,
        legacy_space,
    );
    services
        .api
        .post(payload)
        .await
        .map_err(SubmitError::Network)
}
