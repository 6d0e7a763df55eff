use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures::FutureExt;
use futures::future::BoxFuture;

use super::error::ServiceError;
use crate::model::FileRef;

/// Reads a local file and returns its contents as base64 text.
pub trait FileEncoder: Send + Sync {
    fn read_as_base64(&self, file: FileRef) -> BoxFuture<'_, Result<String, ServiceError>>;
}

/// Reads with `tokio::fs` and encodes with the standard padded alphabet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64FileEncoder;

impl FileEncoder for Base64FileEncoder {
    fn read_as_base64(&self, file: FileRef) -> BoxFuture<'_, Result<String, ServiceError>> {
        async move {
            let bytes = tokio::fs::read(file.path()).await?;
            tracing::debug!(path = %file, bytes = bytes.len(), "encoding screenshot");
            Ok(STANDARD.encode(bytes))
        }
        .boxed()
    }
}
