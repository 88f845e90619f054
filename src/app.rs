//! Application state and core logic

use crate::config::EnquiryConfig;
use crate::export::Exporter;
use crate::platform::{ACTION_MODIFIER, CLEAR_KEY, EXPORT_KEY};
use crate::state::{AppState, FieldName, Form, FormButton, Notifier};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Builds and saves the submissions document
    exporter: Exporter,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App from user configuration
    pub fn new(config: &EnquiryConfig) -> Self {
        let export_dir = config.export_dir_or_default();
        tracing::info!(export_dir = %export_dir.display(), "Exports will be written here");
        Self::with_exporter(
            AppState::new(config.validation_rules()),
            Exporter::docx_to_dir(export_dir),
        )
    }

    pub fn with_exporter(state: AppState, exporter: Exporter) -> Self {
        Self {
            state,
            exporter,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notices are modal and dismissed first
        if self.state.current_notice().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        // Clear confirmation (modal)
        if self.state.pending_clear.is_some() {
            self.handle_clear_dialog_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        if key.modifiers.contains(ACTION_MODIFIER) {
            match key.code {
                KeyCode::Char(EXPORT_KEY) => {
                    self.export_all().await;
                    return Ok(());
                }
                KeyCode::Char(CLEAR_KEY) => {
                    self.state.request_clear();
                    return Ok(());
                }
                KeyCode::Char('r') => {
                    self.state.reset();
                    return Ok(());
                }
                _ => {}
            }
        }
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit();
            return Ok(());
        }

        self.handle_form_key(key);
        Ok(())
    }

    /// Handle pasted text: appended to the focused field as raw input
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_modal() {
            return;
        }
        let Some(field) = self.state.form.focused_field() else {
            return;
        };
        let raw = match field {
            FieldName::Type => text.trim().to_string(),
            _ => format!("{}{}", self.state.form.data.value(field), text),
        };
        self.state.set_field(field, &raw);
    }

    /// Submit the form; on failure focus the first field with an error
    fn submit(&mut self) {
        if self.state.submit() {
            return;
        }
        if let Some(first) = self.state.errors.keys().next().copied() {
            self.state.form.focus(first);
        }
    }

    /// Handle keys while the form has focus
    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        let on_buttons = form.is_buttons_row_active();
        let focused = form.focused_field();

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            // Button row navigation
            KeyCode::Left | KeyCode::Right if on_buttons => {
                form.selected_button = form.selected_button.toggle();
            }
            KeyCode::Enter if on_buttons => match form.selected_button {
                FormButton::Submit => self.submit(),
                FormButton::Reset => self.state.reset(),
            },
            // Type select
            KeyCode::Right if focused == Some(FieldName::Type) => form.cycle_type_next(),
            KeyCode::Left if focused == Some(FieldName::Type) => form.cycle_type_prev(),
            KeyCode::Enter if focused == Some(FieldName::Enquiry) => form.input_char('\n'),
            KeyCode::Enter => form.next_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.input_char(c)
            }
            _ => {}
        }
    }

    /// Handle keys for the clear confirmation
    fn handle_clear_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => {
                self.state.resolve_clear(false);
            }
            KeyCode::Char('y') => {
                self.state.resolve_clear(true);
            }
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::Char('k')
            | KeyCode::Char('j') => {
                if let Some(ref mut action) = self.state.pending_clear {
                    action.selected_option = action.selected_option.toggle();
                }
            }
            KeyCode::Enter => {
                let confirmed = self
                    .state
                    .pending_clear
                    .as_ref()
                    .is_some_and(|a| a.selected_option.is_confirm());
                self.state.resolve_clear(confirmed);
            }
            _ => {}
        }
    }

    /// Export every submission into one Word document
    pub async fn export_all(&mut self) {
        if self.state.submissions.is_empty() {
            self.state
                .info("No Data", "No submissions available to download.");
            return;
        }

        let count = self.state.submissions.len();
        match self.exporter.export(self.state.submissions.all()).await {
            Ok(path) => {
                tracing::info!(count, path = %path.display(), "Submissions exported");
                self.state.status_message = Some(format!(
                    "Exported {count} submission(s) to {}",
                    path.display()
                ));
                self.state
                    .success("Downloaded", &format!("Saved to {}", path.display()));
            }
            Err(e) => {
                tracing::error!("Export failed: {e}");
                self.state.error("Export failed", &e.to_string());
            }
        }
    }
}
