use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};

use crate::model::{FeedbackType, FeedbackTypeCatalog};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::runtime::{FormId, TaskEvent, TaskRunner};
use super::screens::{
    FeedbackForm, SuccessState, TypeSelectState, draw_feedback_form, draw_success,
    draw_type_select,
};

/// How long the loop waits for input before draining task completions.
const TICK: Duration = Duration::from_millis(50);

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Pick the kind of feedback to send.
    TypeSelect,
    /// Write the comment, attach a screenshot, and send.
    Form,
    /// Confirmation after a report was delivered.
    Success,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    catalog: FeedbackTypeCatalog,
    type_select: TypeSelectState,
    success: SuccessState,
    form: Option<FeedbackForm>,
    runner: TaskRunner,
    next_form_id: u64,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::TypeSelect`] screen.
    pub fn new(catalog: FeedbackTypeCatalog, runner: TaskRunner) -> Self {
        Self {
            screen: Screen::TypeSelect,
            type_select: TypeSelectState::new(&catalog),
            catalog,
            success: SuccessState,
            form: None,
            runner,
            next_form_id: 0,
            should_quit: false,
        }
    }

    /// Main event loop: draw → apply finished tasks → read input → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            while let Some(task_event) = self.runner.try_next() {
                self.handle_task_event(task_event);
            }
            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match (self.screen, &self.form) {
            (Screen::TypeSelect, _) => draw_type_select(&self.type_select, frame, area),
            (Screen::Form, Some(form)) => draw_feedback_form(form, frame, area),
            (Screen::Form, None) => draw_type_select(&self.type_select, frame, area),
            (Screen::Success, _) => draw_success(frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let action = match self.screen {
            Screen::TypeSelect => self.type_select.handle_key(key),
            Screen::Form => self
                .form
                .as_mut()
                .map_or(Action::None, |form| form.handle_key(key)),
            Screen::Success => self.success.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies the completion of a background task to the form that started it.
    ///
    /// Completions for a form that is no longer mounted are dropped.
    pub fn handle_task_event(&mut self, task_event: TaskEvent) {
        let origin = task_event.form();
        let Some(form) = self.form.as_mut().filter(|f| f.id() == origin) else {
            tracing::debug!(form = %origin, "dropping completion for unmounted form");
            return;
        };

        let action = match task_event {
            TaskEvent::ScreenshotCaptured { result, .. } => {
                form.screenshot_captured(result);
                Action::None
            }
            TaskEvent::SubmitFinished { result, .. } => form.submit_finished(result),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::OpenForm(ty) => self.open_form(ty),
            Action::CaptureScreenshot => {
                if let Some(form) = &self.form {
                    self.runner.capture(form.id());
                }
            }
            Action::SubmitFeedback(job) => {
                if let Some(form) = &self.form {
                    self.runner.submit(form.id(), job);
                }
            }
            Action::FeedbackCanceled => {
                if let Some(form) = self.form.take() {
                    tracing::info!(form = %form.id(), "feedback canceled");
                }
                self.screen = Screen::TypeSelect;
            }
            Action::FeedbackSent => {
                if let Some(form) = self.form.take() {
                    tracing::info!(form = %form.id(), "feedback sent");
                }
                self.screen = Screen::Success;
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn open_form(&mut self, ty: FeedbackType) {
        let id = FormId(self.next_form_id);
        self.next_form_id += 1;
        match FeedbackForm::new(id, ty, &self.catalog) {
            Ok(form) => {
                self.form = Some(form);
                self.screen = Screen::Form;
            }
            Err(e) => tracing::error!(error = %e, "cannot open feedback form"),
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the mounted form, if any.
    pub fn form(&self) -> Option<&FeedbackForm> {
        self.form.as_ref()
    }
}
