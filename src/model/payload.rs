use serde::Serialize;

use super::FeedbackType;

/// Prefix of the `screenshot` data URI; the backend only accepts PNG.
const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// JSON body posted to the feedbacks endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackPayload {
    #[serde(rename = "type")]
    pub feedback_type: FeedbackType,
    pub screenshot: String,
    pub comment: String,
}

impl FeedbackPayload {
    pub fn new(
        feedback_type: FeedbackType,
        encoded_screenshot: Option<&str>,
        comment: impl Into<String>,
        legacy_space: bool,
    ) -> Self {
        Self {
            feedback_type,
            screenshot: screenshot_data_uri(encoded_screenshot.unwrap_or(""), legacy_space),
            comment: comment.into(),
        }
    }
}

/// Builds the `screenshot` field.
///
/// With `legacy_space` a single space follows the comma, which is what the
/// deployed backend has always received.
pub fn screenshot_data_uri(encoded: &str, legacy_space: bool) -> String {
    let sep = if legacy_space { " " } else { "" };
    format!("{DATA_URI_PREFIX}{sep}{encoded}")
}
