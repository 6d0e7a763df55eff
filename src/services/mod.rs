//! External collaborators of the feedback form: screen capture, file
//! encoding, and report submission.
//!
//! Each collaborator is a trait returning a boxed future so the form's
//! runtime can hold them as trait objects and swap in doubles for tests.

mod api;
mod capture;
mod encoding;
mod error;
mod submission;
#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

pub use api::{FeedbackApi, HttpFeedbackApi};
pub use capture::{
    CaptureFormat, CaptureOptions, ScreenCapture, XcapCapture, screenshot_path, write_image,
};
pub use encoding::{Base64FileEncoder, FileEncoder};
pub use error::ServiceError;
pub use submission::{SubmitError, deliver};

/// The three collaborators, shared between background tasks.
#[derive(Clone)]
pub struct Services {
    pub capture: Arc<dyn ScreenCapture>,
    pub encoder: Arc<dyn FileEncoder>,
    pub api: Arc<dyn FeedbackApi>,
}

impl Services {
    pub fn new(
        capture: impl ScreenCapture + 'static,
        encoder: impl FileEncoder + 'static,
        api: impl FeedbackApi + 'static,
    ) -> Self {
        Self {
            capture: Arc::new(capture),
            encoder: Arc::new(encoder),
            api: Arc::new(api),
        }
    }
}
