//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use crate::model::{FeedbackType, SubmitJob};

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to start background work, mount or unmount the
/// form, and navigate between screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Mount a fresh form for the given feedback type.
    OpenForm(FeedbackType),
    /// Run the capture service for the current form.
    CaptureScreenshot,
    /// Deliver the given snapshot of the current form's draft.
    SubmitFeedback(SubmitJob),
    /// The user abandoned the current form.
    FeedbackCanceled,
    /// The current form's report was accepted by the backend.
    FeedbackSent,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
