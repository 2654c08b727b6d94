//! View model the terminal UI draws from

use crate::controller::{ControlVisibility, Presenter};
use std::collections::{BTreeSet, VecDeque};

/// Latest presentation state pushed by the step controller.
///
/// Each setter overwrites its slot, so pushing the same state twice leaves
/// the model unchanged. Notices queue up and are dismissed one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenModel {
    pub progress_percent: u16,
    pub step_label: String,
    pub step_indicator: String,
    pub active_step: usize,
    pub controls: ControlVisibility,
    pub error_markers: BTreeSet<String>,
    pub processing_overlay: bool,
    pub notices: VecDeque<String>,
    /// First field row drawn in the step body
    pub scroll_offset: usize,
}

impl ScreenModel {
    pub fn current_notice(&self) -> Option<&str> {
        self.notices.front().map(String::as_str)
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    pub fn has_error_marker(&self, field: &str) -> bool {
        self.error_markers.contains(field)
    }

    /// Move the scroll window only as far as needed to keep `active` among
    /// the `visible` field rows
    pub fn follow_cursor(&mut self, active: usize, visible: usize) {
        self.scroll_offset = Self::window_start(self.scroll_offset, active, visible);
    }

    /// First row of a `visible`-row window starting near `offset` that
    /// contains `active`
    pub fn window_start(offset: usize, active: usize, visible: usize) -> usize {
        let visible = visible.max(1);
        if active < offset {
            active
        } else if active >= offset + visible {
            active + 1 - visible
        } else {
            offset
        }
    }
}

impl Presenter for ScreenModel {
    fn set_progress(&mut self, percent: u16) {
        self.progress_percent = percent.min(100);
    }

    fn set_step_label(&mut self, text: &str) {
        self.step_label = text.to_string();
    }

    fn set_step_indicator(&mut self, text: &str) {
        self.step_indicator = text.to_string();
    }

    fn set_active_step(&mut self, index: usize) {
        self.active_step = index;
    }

    fn set_control_visibility(&mut self, controls: ControlVisibility) {
        self.controls = controls;
    }

    fn set_field_error_marker(&mut self, field: &str, invalid: bool) {
        if invalid {
            self.error_markers.insert(field.to_string());
        } else {
            self.error_markers.remove(field);
        }
    }

    fn show_processing_overlay(&mut self, visible: bool) {
        self.processing_overlay = visible;
    }

    fn notify_user(&mut self, message: &str) {
        tracing::debug!("Notice: {message}");
        self.notices.push_back(message.to_string());
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_blank() {
        let model = ScreenModel::default();
        assert_eq!(model.progress_percent, 0);
        assert!(model.current_notice().is_none());
        assert!(!model.processing_overlay);
    }

    #[test]
    fn test_markers_set_and_clear() {
        let mut model = ScreenModel::default();
        model.set_field_error_marker("email", true);
        model.set_field_error_marker("email", true);
        assert_eq!(model.error_markers.len(), 1);
        model.set_field_error_marker("email", false);
        assert!(!model.has_error_marker("email"));
    }

    #[test]
    fn test_notices_queue_in_order() {
        let mut model = ScreenModel::default();
        model.notify_user("first");
        model.notify_user("second");
        assert_eq!(model.current_notice(), Some("first"));
        model.dismiss_notice();
        assert_eq!(model.current_notice(), Some("second"));
        model.dismiss_notice();
        model.dismiss_notice();
        assert!(model.current_notice().is_none());
    }

    #[test]
    fn test_scroll_to_top_resets_offset() {
        let mut model = ScreenModel {
            scroll_offset: 7,
            ..Default::default()
        };
        model.scroll_to_top();
        assert_eq!(model.scroll_offset, 0);
    }

    #[test]
    fn test_window_unchanged_when_active_visible() {
        assert_eq!(ScreenModel::window_start(0, 2, 4), 0);
    }

    #[test]
    fn test_window_follows_active_down_and_up() {
        assert_eq!(ScreenModel::window_start(0, 5, 4), 2);
        assert_eq!(ScreenModel::window_start(3, 1, 4), 1);
    }

    #[test]
    fn test_follow_cursor_updates_offset() {
        let mut model = ScreenModel::default();
        model.follow_cursor(6, 3);
        assert_eq!(model.scroll_offset, 4);
        model.follow_cursor(5, 3);
        assert_eq!(model.scroll_offset, 4);
        model.scroll_to_top();
        model.follow_cursor(0, 3);
        assert_eq!(model.scroll_offset, 0);
    }

    #[test]
    fn test_progress_is_capped() {
        let mut model = ScreenModel::default();
        model.set_progress(250);
        assert_eq!(model.progress_percent, 100);
    }
}
