use crate::model::FeedbackType;

/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when mounting a feedback form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The type-info catalog has no entry for the requested type.
    #[error("no display info for feedback type {0}")]
    UnknownFeedbackType(FeedbackType),
}
