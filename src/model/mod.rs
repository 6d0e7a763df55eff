mod draft;
mod feedback_type;
mod payload;
mod type_info;

pub use draft::{DraftFeedback, FileRef, SubmitJob};
pub use feedback_type::FeedbackType;
pub use payload::{FeedbackPayload, screenshot_data_uri};
pub use type_info::{FeedbackTypeCatalog, FeedbackTypeInfo};
