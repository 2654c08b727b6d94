//! Application state definitions

use super::forms::{ApplicationForm, Form};
use super::session::FormSession;
use crate::config::DEFAULT_MAX_FILE_BYTES;
use crate::error::FormError;

/// Everything the applicant has entered plus where they are in the flow
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: FormSession,
    pub form: ApplicationForm,
    /// Upload ceiling for statement files
    pub max_file_bytes: u64,
}

impl AppState {
    pub fn new(max_file_bytes: u64) -> Self {
        Self {
            session: FormSession::new(),
            form: ApplicationForm::new(),
            max_file_bytes,
        }
    }

    /// Focus the section the session is showing, cursor on its first field
    pub fn show_step_from_top(&mut self) {
        self.form.set_focus_step(self.session.current_step());
        self.form.set_active_field(0);
    }

    /// Resolve the path typed into the active file field.
    ///
    /// Returns `Ok(false)` when the active field is not a file input.
    pub fn select_active_file(&mut self) -> Result<bool, FormError> {
        let max = self.max_file_bytes;
        let Some(slot) = self
            .form
            .get_active_field_mut()
            .and_then(|f| f.file_slot_mut())
        else {
            return Ok(false);
        };
        slot.select_path(max)?;
        Ok(true)
    }

    /// Drop the selection of the active file field
    pub fn clear_active_file(&mut self) {
        if let Some(slot) = self
            .form
            .get_active_field_mut()
            .and_then(|f| f.file_slot_mut())
        {
            slot.clear();
        }
    }

    #[allow(dead_code)]
    pub fn active_field_name(&self) -> Option<&str> {
        self.form
            .get_field(self.form.active_field())
            .map(|f| f.name.as_str())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_BYTES)
    }
}
