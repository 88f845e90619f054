//! User-facing notices and the clear confirmation

/// Severity of a modal notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A modal message waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Fire-and-forget notifications.
///
/// Confirmations are not part of this surface: they are opened and resolved
/// explicitly so the mutation that follows stays synchronous.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);

    fn info(&mut self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeKind::Info, title, message));
    }

    fn success(&mut self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeKind::Success, title, message));
    }

    fn error(&mut self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeKind::Error, title, message));
    }
}

/// Answer choices in the clear confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearChoice {
    Confirm,
    #[default]
    Keep,
}

impl ClearChoice {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Confirm => Self::Keep,
            Self::Keep => Self::Confirm,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirm => "Yes, clear it",
            Self::Keep => "No, keep them",
        }
    }

    pub fn is_confirm(&self) -> bool {
        matches!(self, Self::Confirm)
    }
}

/// Open confirmation before wiping every submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingClearAction {
    /// Number of submissions that would be removed
    pub submission_count: usize,
    pub selected_option: ClearChoice,
}

impl PendingClearAction {
    pub const TITLE: &'static str = "Are you sure?";
    pub const MESSAGE: &'static str = "This will permanently remove all submissions.";

    pub fn new(submission_count: usize) -> Self {
        Self {
            submission_count,
            selected_option: ClearChoice::default(),
        }
    }
}
