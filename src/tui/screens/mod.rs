//! TUI screen implementations.

pub mod feedback_form;
pub mod success;
pub mod type_select;

pub use feedback_form::{FeedbackForm, draw_feedback_form};
pub use success::{SuccessState, draw_success};
pub use type_select::{TypeSelectState, draw_type_select};
