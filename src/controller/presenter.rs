//! Presentation seam between step navigation and whatever draws it

use crate::state::FormSession;

/// Which navigation controls are showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlVisibility {
    pub back: bool,
    /// The Continue button
    pub proceed: bool,
    pub submit: bool,
}

impl ControlVisibility {
    /// Back hidden on the first step; Continue and Submit swap on the last
    pub fn for_session(session: &FormSession) -> Self {
        Self {
            back: !session.is_first_step(),
            proceed: !session.is_last_step(),
            submit: session.is_last_step(),
        }
    }
}

/// Everything the step controller needs from the screen
#[cfg_attr(test, mockall::automock)]
pub trait Presenter {
    fn set_progress(&mut self, percent: u16);
    fn set_step_label(&mut self, text: &str);
    fn set_step_indicator(&mut self, text: &str);
    fn set_active_step(&mut self, index: usize);
    fn set_control_visibility(&mut self, controls: ControlVisibility);
    fn set_field_error_marker(&mut self, field: &str, invalid: bool);
    fn show_processing_overlay(&mut self, visible: bool);
    fn notify_user(&mut self, message: &str);
    fn scroll_to_top(&mut self);
}
