//! Application state container

use super::forms::{EnquiryForm, FieldName};
use super::notice::{Notice, Notifier, PendingClearAction};
use super::submissions::SubmissionStore;
use super::validation::{failed_fields, validate, ErrorMap, ValidationRules};
use std::collections::VecDeque;

/// Everything the enquiry screen owns: form values, inline errors, the
/// hidden submission list and any open dialogs
#[derive(Debug, Default)]
pub struct AppState {
    pub form: EnquiryForm,
    pub errors: ErrorMap,
    pub submissions: SubmissionStore,
    pub rules: ValidationRules,
    /// Modal notices, oldest first
    pub notices: VecDeque<Notice>,
    pub pending_clear: Option<PendingClearAction>,
    /// One-line feedback in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            rules,
            ..Default::default()
        }
    }

    /// Store raw input for a field (capacity keeps digits only)
    pub fn set_field(&mut self, field: FieldName, raw: &str) {
        self.form.data.set(field, raw);
    }

    /// Validate and, when clean, record a snapshot of the form.
    ///
    /// The error map is replaced on every attempt. The form itself is left
    /// as is either way.
    pub fn submit(&mut self) -> bool {
        self.errors = validate(&self.form.data, self.rules);
        if !self.errors.is_empty() {
            tracing::debug!(fields = %failed_fields(&self.errors), "Submission rejected");
            return false;
        }

        let position = self.submissions.record(self.form.data.clone());
        match serde_json::to_string(&self.form.data) {
            Ok(json) => tracing::info!(position, form = %json, "Enquiry recorded"),
            Err(e) => tracing::warn!(position, "Enquiry recorded, form not serializable: {e}"),
        }
        self.success("Saved Successfully 🎉", "Your enquiry has been recorded.");
        true
    }

    /// Clear every field and every error; submissions are untouched
    pub fn reset(&mut self) {
        self.form.reset();
        self.errors.clear();
    }

    /// Open the clear confirmation, or explain that there is nothing to clear
    pub fn request_clear(&mut self) {
        if self.submissions.is_empty() {
            self.info("No Data", "There are no submissions to clear.");
            return;
        }
        self.pending_clear = Some(PendingClearAction::new(self.submissions.len()));
    }

    /// Close the confirmation; only an explicit yes empties the store.
    /// Returns whether anything was removed.
    pub fn resolve_clear(&mut self, confirmed: bool) -> bool {
        if self.pending_clear.take().is_none() || !confirmed {
            return false;
        }
        let removed = self.submissions.clear();
        tracing::info!(removed, "Submissions cleared");
        self.success("Cleared!", "All submissions have been removed.");
        true
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    /// True while a dialog is capturing input
    pub fn has_modal(&self) -> bool {
        !self.notices.is_empty() || self.pending_clear.is_some()
    }

    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

impl Notifier for AppState {
    fn notify(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }
}
