//! In-memory service doubles that record how they were called.

use std::io;
use std::sync::{Arc, Mutex};

use futures::FutureExt;
use futures::future::BoxFuture;

use super::{CaptureOptions, FeedbackApi, FileEncoder, ScreenCapture, ServiceError};
use crate::model::{FeedbackPayload, FileRef};

fn boom() -> ServiceError {
    ServiceError::Io(io::Error::other("boom"))
}

#[derive(Debug, Clone)]
pub(crate) struct FakeCapture {
    result: Option<FileRef>,
    calls: Arc<Mutex<Vec<CaptureOptions>>>,
}

impl FakeCapture {
    pub(crate) fn ok(path: &str) -> Self {
        Self {
            result: Some(FileRef::new(path)),
            calls: Arc::default(),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            result: None,
            calls: Arc::default(),
        }
    }

    pub(crate) fn calls(&self) -> Vec<CaptureOptions> {
        self.calls.lock().unwrap().clone()
    }
}

impl ScreenCapture for FakeCapture {
    fn capture(&self, options: CaptureOptions) -> BoxFuture<'_, Result<FileRef, ServiceError>> {
        self.calls.lock().unwrap().push(options);
        let result = self.result.clone().ok_or_else(boom);
        async move { result }.boxed()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct FakeEncoder {
    result: Option<String>,
    calls: Arc<Mutex<usize>>,
}

impl FakeEncoder {
    pub(crate) fn ok(encoded: &str) -> Self {
        Self {
            result: Some(encoded.to_string()),
            calls: Arc::default(),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            result: None,
            calls: Arc::default(),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl FileEncoder for FakeEncoder {
    fn read_as_base64(&self, _file: FileRef) -> BoxFuture<'_, Result<String, ServiceError>> {
        *self.calls.lock().unwrap() += 1;
        let result = self.result.clone().ok_or_else(boom);
        async move { result }.boxed()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct FakeApi {
    succeed: bool,
    sent: Arc<Mutex<Vec<FeedbackPayload>>>,
}

impl FakeApi {
    pub(crate) fn ok() -> Self {
        Self {
            succeed: true,
            sent: Arc::default(),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            succeed: false,
            sent: Arc::default(),
        }
    }

    /// Payloads received, including ones that were answered with a failure.
    pub(crate) fn sent(&self) -> Vec<FeedbackPayload> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl FeedbackApi for FakeApi {
    fn post(&self, payload: FeedbackPayload) -> BoxFuture<'_, Result<(), ServiceError>> {
        self.sent.lock().unwrap().push(payload);
        let result = if self.succeed { Ok(()) } else { Err(boom()) };
        async move { result }.boxed()
    }
}
