//! Feedback form — the comment, screenshot, and submit step of the widget.
//!
//! The form owns its [`DraftFeedback`] and is the only place it changes.
//! Anything that has to wait (capture, encode, network) is requested through
//! an [`Action`] and comes back through [`FeedbackForm::screenshot_captured`]
//! or [`FeedbackForm::submit_finished`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_textarea::{CursorMove, TextArea};

use crate::model::{
    DraftFeedback, FeedbackType, FeedbackTypeCatalog, FeedbackTypeInfo, FileRef,
};
use crate::services::{ServiceError, SubmitError};
use crate::tui::action::{Action, ScreenState};
use crate::tui::error::FormError;
use crate::tui::runtime::FormId;
use crate::tui::widgets::{draw_screenshot_button, draw_send_button};

const PLACEHOLDER: &str =
    "Something not working right? We want to fix it. Tell us in detail what is happening...";

/// State for the feedback form screen.
#[derive(Debug, Clone)]
pub struct FeedbackForm {
    id: FormId,
    info: FeedbackTypeInfo,
    draft: DraftFeedback,
    editor: TextArea<'static>,
}

impl FeedbackForm {
    /// Mounts an empty form for `feedback_type`.
    ///
    /// Fails if `catalog` has no display info for the type.
    pub fn new(
        id: FormId,
        feedback_type: FeedbackType,
        catalog: &FeedbackTypeCatalog,
    ) -> Result<Self, FormError> {
        let info = catalog
            .get(feedback_type)
            .cloned()
            .ok_or(FormError::UnknownFeedbackType(feedback_type))?;
        Ok(Self {
            id,
            info,
            draft: DraftFeedback::new(feedback_type),
            editor: new_editor(Vec::new()),
        })
    }

    /// Asks the app to run the capture service for this form.
    ///
    /// Not gated by [`is_submitting`](Self::is_submitting).
    pub fn request_screenshot(&self) -> Action {
        Action::CaptureScreenshot
    }

    /// Applies the outcome of a capture started by this form.
    ///
    /// A failure is logged and leaves the screenshot as it was.
    pub fn screenshot_captured(&mut self, result: Result<FileRef, ServiceError>) {
        match result {
            Ok(file) => {
                tracing::debug!(form = %self.id, path = %file, "screenshot attached");
                self.draft.screenshot = Some(file);
            }
            Err(e) => tracing::warn!(form = %self.id, error = %e, "screenshot capture failed"),
        }
    }

    /// Detaches the current screenshot, if any.
    pub fn clear_screenshot(&mut self) {
        self.draft.screenshot = None;
    }

    /// Replaces the comment text and puts the cursor at its end.
    ///
    /// The stored comment is always the editor's lines joined with `\n`, so
    /// CRLF line endings are normalized.
    pub fn update_comment(&mut self, text: impl Into<String>) {
        let text = text.into();
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        self.editor = new_editor(lines);
        self.editor.move_cursor(CursorMove::Bottom);
        self.editor.move_cursor(CursorMove::End);
        self.draft.comment = self.editor.lines().join("\n");
    }

    /// Starts a submission unless one is already in flight.
    ///
    /// Returns [`Action::SubmitFeedback`] carrying a snapshot of the draft, or
    /// [`Action::None`] while submitting.
    pub fn submit(&mut self) -> Action {
        if self.draft.is_submitting {
            tracing::debug!(form = %self.id, "submit ignored while sending");
            return Action::None;
        }
        self.draft.is_submitting = true;
        Action::SubmitFeedback(self.draft.to_job())
    }

    /// Applies the outcome of a submission started by this form.
    ///
    /// On success the form stays in the submitting state; the caller is
    /// expected to unmount it. Only a network failure re-enables submit.
    pub fn submit_finished(&mut self, result: Result<(), SubmitError>) -> Action {
        match result {
            Ok(()) => Action::FeedbackSent,
            Err(e @ SubmitError::Network(_)) => {
                tracing::warn!(form = %self.id, error = %e, "feedback not sent");
                self.draft.is_submitting = false;
                Action::None
            }
            Err(e @ SubmitError::Encode(_)) => {
                tracing::warn!(form = %self.id, error = %e, "feedback not sent");
                Action::None
            }
        }
    }

    /// Abandons the form. Never blocked by an in-flight submission.
    pub fn cancel(&self) -> Action {
        Action::FeedbackCanceled
    }

    pub fn id(&self) -> FormId {
        self.id
    }

    pub fn info(&self) -> &FeedbackTypeInfo {
        &self.info
    }

    pub fn feedback_type(&self) -> FeedbackType {
        self.draft.feedback_type
    }

    pub fn screenshot(&self) -> Option<&FileRef> {
        self.draft.screenshot.as_ref()
    }

    pub fn comment(&self) -> &str {
        &self.draft.comment
    }

    pub fn is_submitting(&self) -> bool {
        self.draft.is_submitting
    }

    /// Returns the comment editor for rendering.
    pub fn editor(&self) -> &TextArea<'static> {
        &self.editor
    }
}

impl ScreenState for FeedbackForm {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers == KeyModifiers::CONTROL {
            match key.code {
                KeyCode::Char('t') => return self.request_screenshot(),
                KeyCode::Char('r') => {
                    self.clear_screenshot();
                    return Action::None;
                }
                KeyCode::Char('s') => return self.submit(),
                _ => {}
            }
        }

        if key.code == KeyCode::Esc {
            return self.cancel();
        }

        if self.editor.input(key) {
            self.draft.comment = self.editor.lines().join("\n");
        }
        Action::None
    }
}

fn new_editor(lines: Vec<String>) -> TextArea<'static> {
    let mut editor = TextArea::new(lines);
    editor.set_placeholder_text(PLACEHOLDER);
    editor.set_cursor_line_style(Style::default());
    editor.set_block(
        Block::default()
            .title(" Comment ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    editor
}

/// Renders the feedback form screen.
#[mutants::skip]
pub fn draw_feedback_form(form: &FeedbackForm, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header_area, editor_area, buttons_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let info = form.info();
    let header = Line::from(vec![
        Span::styled("← ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{} ", info.image)),
        Span::styled(
            info.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), header_area);

    frame.render_widget(form.editor(), editor_area);

    let [shot_area, send_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(buttons_area);
    draw_screenshot_button(form.screenshot(), frame, shot_area);
    draw_send_button(form.is_submitting(), frame, send_area);

    let footer = Paragraph::new("Ctrl+T: screenshot  Ctrl+R: remove  Ctrl+S: send  Esc: back")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
