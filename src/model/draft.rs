use std::fmt;
use std::path::{Path, PathBuf};

use super::FeedbackType;

/// Opaque handle to a local file produced by the capture service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRef(PathBuf);

impl FileRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the underlying path.
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Returns the final path component for display, or the whole path if
    /// there is none.
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.display().to_string())
    }
}

#[mutants::skip]
impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// The in-progress, unsubmitted report held by a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftFeedback {
    pub feedback_type: FeedbackType,
    pub screenshot: Option<FileRef>,
    pub comment: String,
    /// True from the moment a submission is accepted until it settles.
    pub is_submitting: bool,
}

impl DraftFeedback {
    /// Creates an empty draft for the given type.
    pub fn new(feedback_type: FeedbackType) -> Self {
        Self {
            feedback_type,
            screenshot: None,
            comment: String::new(),
            is_submitting: false,
        }
    }

    /// Snapshots the fields a submission needs.
    pub fn to_job(&self) -> SubmitJob {
        SubmitJob {
            feedback_type: self.feedback_type,
            screenshot: self.screenshot.clone(),
            comment: self.comment.clone(),
        }
    }
}

/// What a submission sends, captured when `submit` was accepted.
///
/// Later edits to the draft do not affect a job already in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitJob {
    pub feedback_type: FeedbackType,
    pub screenshot: Option<FileRef>,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_is_empty() {
        let draft = DraftFeedback::new(FeedbackType::Idea);
        assert_eq!(draft.feedback_type, FeedbackType::Idea);
        assert!(draft.screenshot.is_none());
        assert!(draft.comment.is_empty());
        assert!(!draft.is_submitting);
    }

    #[test]
    fn to_job_copies_fields() {
        let mut draft = DraftFeedback::new(FeedbackType::Bug);
        draft.screenshot = Some(FileRef::new("/tmp/shot.png"));
        draft.comment = "it crashes".into();

        let job = draft.to_job();
        assert_eq!(job.feedback_type, FeedbackType::Bug);
        assert_eq!(job.screenshot, Some(FileRef::new("/tmp/shot.png")));
        assert_eq!(job.comment, "it crashes");
    }

    #[test]
    fn job_is_independent_of_later_edits() {
        let mut draft = DraftFeedback::new(FeedbackType::Bug);
        draft.comment = "before".into();
        let job = draft.to_job();
        draft.comment = "after".into();
        draft.screenshot = Some(FileRef::new("late.png"));
        assert_eq!(job.comment, "before");
        assert!(job.screenshot.is_none());
    }

    #[test]
    fn file_name_is_last_component() {
        let file = FileRef::new("/var/tmp/tattle/screenshot-1.png");
        assert_eq!(file.file_name(), "screenshot-1.png");
    }

    #[test]
    fn file_name_falls_back_to_full_path() {
        let file = FileRef::new("/");
        assert_eq!(file.file_name(), "/");
    }
}
