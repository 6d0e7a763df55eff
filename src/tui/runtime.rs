//! Background execution of service calls.
//!
//! The UI thread never awaits. It hands work to a [`TaskRunner`], which
//! spawns it on the tokio runtime and reports completion as a [`TaskEvent`]
//! on a channel the app drains every tick.

use std::fmt;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::config::Config;
use crate::model::{FileRef, SubmitJob};
use crate::services::{CaptureOptions, ServiceError, Services, SubmitError, deliver};

/// Identifies one mounted form. Completions for an unmounted form are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(pub u64);

#[mutants::skip]
impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "form#{}", self.0)
    }
}

/// Completion of a background task.
#[derive(Debug)]
pub enum TaskEvent {
    ScreenshotCaptured {
        form: FormId,
        result: Result<FileRef, ServiceError>,
    },
    SubmitFinished {
        form: FormId,
        result: Result<(), SubmitError>,
    },
}

impl TaskEvent {
    /// The form that started the task.
    pub fn form(&self) -> FormId {
        match self {
            Self::ScreenshotCaptured { form, .. } | Self::SubmitFinished { form, .. } => *form,
        }
    }
}

/// Parameters the runner applies to every task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunnerSettings {
    pub capture: CaptureOptions,
    pub legacy_data_uri_space: bool,
}

impl RunnerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            capture: config.capture.options(),
            legacy_data_uri_space: config.payload.legacy_data_uri_space,
        }
    }
}

/// Spawns capture and submit work and collects the results.
pub struct TaskRunner {
    handle: Handle,
    services: Services,
    settings: RunnerSettings,
    tx: UnboundedSender<TaskEvent>,
    rx: UnboundedReceiver<TaskEvent>,
}

impl TaskRunner {
    pub fn new(handle: Handle, services: Services, settings: RunnerSettings) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            services,
            settings,
            tx,
            rx,
        }
    }

    /// Starts a screen capture on behalf of `form`.
    pub fn capture(&self, form: FormId) {
        let services = self.services.clone();
        let options = self.settings.capture;
        let tx = self.tx.clone();
        tracing::debug!(%form, ?options, "capture requested");
        self.handle.spawn(async move {
            let result = services.capture.capture(options).await;
            let _ = tx.send(TaskEvent::ScreenshotCaptured { form, result });
        });
    }

    /// Starts delivering `job` on behalf of `form`.
    pub fn submit(&self, form: FormId, job: SubmitJob) {
        let services = self.services.clone();
        let legacy_space = self.settings.legacy_data_uri_space;
        let tx = self.tx.clone();
        tracing::info!(%form, feedback_type = %job.feedback_type, "submitting feedback");
        self.handle.spawn(async move {
            let result = deliver(&services, job, legacy_space).await;
            let _ = tx.send(TaskEvent::SubmitFinished { form, result });
        });
    }

    /// Returns a finished task's event without waiting.
    pub fn try_next(&mut self) -> Option<TaskEvent> {
        self.rx.try_recv().ok()
    }

    /// Waits for the next finished task.
    #[cfg(test)]
    pub async fn next(&mut self) -> Option<TaskEvent> {
        self.rx.recv().await
    }
}
