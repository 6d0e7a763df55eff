//! TUI: App state, event loop, background tasks, screens, widgets.

pub mod action;
pub mod app;
pub mod error;
pub mod runtime;
pub mod screens;
pub mod widgets;

pub use app::{App, Screen};
pub use error::{AppError, FormError};
pub use runtime::{FormId, RunnerSettings, TaskEvent, TaskRunner};
