//! Application state and core logic

use crate::config::ApplyConfig;
use crate::controller::{Presenter, StepController};
use crate::state::{AppState, FieldKind, Form, FormField, Phase, ProgressAnimation, ScreenModel};
use crate::submission::{ProcessingTask, SimulatedSubmission, SubmissionClient};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Window for the second Ctrl+C press
const DOUBLE_TAP_WINDOW: Duration = Duration::from_secs(1);

/// Field rows assumed visible until the first frame reports the real size
const DEFAULT_VISIBLE_FIELDS: usize = 4;

/// Main application struct
pub struct App {
    /// Entered values and step session
    pub state: AppState,
    /// Step controller with the view model it renders into
    pub controller: StepController<ScreenModel>,
    /// Where the finished application goes
    submission: Arc<dyn SubmissionClient>,
    /// In-flight submission, if any
    processing: Option<ProcessingTask>,
    /// Drawn progress bar position
    pub progress: ProgressAnimation,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
    /// Field rows the step section can show at the current terminal size
    visible_fields: usize,
}

impl App {
    /// Create a new App instance backed by the simulated submission service
    pub fn new(config: &ApplyConfig) -> Self {
        let submission = Arc::new(SimulatedSubmission::new(
            config.processing_delay(),
            config.confirmation_delay(),
        ));
        Self::with_client(config.max_file_bytes(), submission)
    }

    pub fn with_client(max_file_bytes: u64, submission: Arc<dyn SubmissionClient>) -> Self {
        let state = AppState::new(max_file_bytes);
        let mut controller = StepController::new(ScreenModel::default());
        controller.render(&state.session);
        let progress = ProgressAnimation::new(controller.presenter().progress_percent);

        Self {
            state,
            controller,
            submission,
            processing: None,
            progress,
            quit: false,
            last_ctrl_c: None,
            visible_fields: DEFAULT_VISIBLE_FIELDS,
        }
    }

    pub fn screen(&self) -> &ScreenModel {
        self.controller.presenter()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the UI needs fast redraws
    pub fn is_animating(&self) -> bool {
        self.progress.is_animating() || self.processing.is_some()
    }

    /// Update how many field rows fit, keeping the cursor in view
    pub fn set_visible_fields(&mut self, visible: usize) {
        self.visible_fields = visible.max(1);
        self.follow_cursor();
    }

    /// Per-frame housekeeping: settle finished submissions, ease the bar
    pub fn tick(&mut self) {
        self.poll_processing();
        self.progress.retarget(self.screen().progress_percent);
    }

    /// Hand a finished submission back to the controller
    pub fn poll_processing(&mut self) {
        let Some(task) = self.processing.as_mut() else {
            return;
        };
        let Some(outcome) = task.try_outcome() else {
            return;
        };
        self.processing = None;

        let session = std::mem::take(&mut self.state.session);
        self.state.session = self.controller.on_processing_complete(session, outcome);
        if self.state.session.is_editing() {
            // Failure re-rendered the last step from the top
            self.state.show_step_from_top();
        }
        self.follow_cursor();
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.dispatch_key(key);
        self.follow_cursor();
    }

    fn dispatch_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.handle_ctrl_c();
            return;
        }

        // Notices are modal until dismissed
        if self.screen().current_notice().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.controller.presenter_mut().dismiss_notice();
                if self.is_submitted() && self.screen().current_notice().is_none() {
                    self.quit = true;
                }
            }
            return;
        }

        if !self.state.session.is_editing() {
            return;
        }

        match key.code {
            KeyCode::Char('n') if ctrl => self.continue_step(),
            KeyCode::Char('b') if ctrl => self.back_step(),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Right => self.with_active_field(|f| f.next_option()),
            KeyCode::Left => self.with_active_field(|f| f.prev_option()),
            KeyCode::Enter => self.confirm_active_field(),
            KeyCode::Delete => self.state.clear_active_file(),
            KeyCode::Backspace => self.with_active_field(|f| f.pop_char()),
            KeyCode::Char(' ') if self.active_field_is_toggle() => self.state.form.toggle_active(),
            KeyCode::Char(c) if !ctrl => self.with_active_field(|f| {
                if f.accepts_text() {
                    f.push_char(c);
                }
            }),
            _ => {}
        }
    }

    /// Scroll the step section so the active field stays visible
    fn follow_cursor(&mut self) {
        let active = self.state.form.active_field();
        let visible = self.visible_fields;
        self.controller.presenter_mut().follow_cursor(active, visible);
    }

    fn is_submitted(&self) -> bool {
        matches!(self.state.session.phase, Phase::Submitted(_))
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        let double_tap = self
            .last_ctrl_c
            .is_some_and(|last| now.duration_since(last) < DOUBLE_TAP_WINDOW);

        if double_tap {
            if let Some(task) = self.processing.take() {
                task.cancel();
            }
            self.quit = true;
        } else {
            self.last_ctrl_c = Some(now);
        }
    }

    fn with_active_field(&mut self, edit: impl FnOnce(&mut FormField)) {
        if let Some(field) = self.state.form.get_active_field_mut() {
            edit(field);
        }
    }

    fn active_field_is_toggle(&self) -> bool {
        self.state
            .form
            .get_field(self.state.form.active_field())
            .is_some_and(|f| matches!(f.kind, FieldKind::Checkbox | FieldKind::Radio { .. }))
    }

    /// Enter picks the typed file on a file field and moves on elsewhere
    fn confirm_active_field(&mut self) {
        match self.state.select_active_file() {
            Ok(true) => {}
            Ok(false) => self.state.form.next_field(),
            Err(e) => self.controller.presenter_mut().notify_user(&e.to_string()),
        }
    }

    fn continue_step(&mut self) {
        if !self.screen().controls.proceed {
            return;
        }
        let session = std::mem::take(&mut self.state.session);
        let from = session.current_step();
        self.state.session = self.controller.on_continue(session, &self.state.form);
        if self.state.session.current_step() != from {
            self.state.show_step_from_top();
        }
    }

    fn back_step(&mut self) {
        if !self.screen().controls.back {
            return;
        }
        let session = std::mem::take(&mut self.state.session);
        let from = session.current_step();
        self.state.session = self.controller.on_back(session);
        if self.state.session.current_step() != from {
            self.state.show_step_from_top();
        }
    }

    fn submit(&mut self) {
        if !self.screen().controls.submit || self.processing.is_some() {
            return;
        }
        let session = std::mem::take(&mut self.state.session);
        let (session, task) =
            self.controller
                .on_submit(session, &self.state.form, &self.submission);
        self.state.session = session;
        self.processing = task;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{FILL_REQUIRED_NOTICE, THANK_YOU_NOTICE};
    use crate::error::SubmissionError;
    use crate::state::{FieldValue, FilePick, NO_FILE_CHOSEN};
    use crate::submission::{MockSubmissionClient, SubmissionReceipt};
    use pretty_assertions::assert_eq;

    const MIB: u64 = 1024 * 1024;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_with(mock: MockSubmissionClient) -> App {
        App::with_client(5 * MIB, Arc::new(mock))
    }

    fn accepting_app() -> App {
        let mut mock = MockSubmissionClient::new();
        mock.expect_submit()
            .returning(|_| Ok(SubmissionReceipt::new()));
        app_with(mock)
    }

    /// Put a valid value into every field of `step`
    fn fill_step(app: &mut App, step: usize) {
        let names: Vec<String> = app
            .state
            .form
            .fields_for_step(step)
            .map(|f| f.name.clone())
            .collect();
        let mut checked_groups = Vec::new();

        for name in names {
            let field = app.state.form.field_mut(&name).unwrap();
            match field.kind.clone() {
                FieldKind::Text { mask: Some(_) } => field.set_text("5551234567"),
                FieldKind::Text { mask: None } => field.set_text("value"),
                FieldKind::Select { .. } => field.next_option(),
                FieldKind::Checkbox => field.set_checked(true),
                FieldKind::Radio { group, .. } => {
                    if !checked_groups.contains(&group) {
                        field.set_checked(true);
                        checked_groups.push(group);
                    }
                }
                FieldKind::File => {
                    if let FieldValue::File(slot) = &mut field.value {
                        slot.select(
                            Some(FilePick {
                                file_name: format!("{name}.pdf"),
                                size_bytes: 1024,
                            }),
                            5 * MIB,
                        )
                        .unwrap();
                    }
                }
            }
        }
    }

    async fn wait_for_outcome(app: &mut App) {
        for _ in 0..100 {
            app.tick();
            if !matches!(app.state.session.phase, Phase::Processing) {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("submission never settled");
    }

    mod startup {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_rendered_on_step_one() {
            let app = accepting_app();
            let screen = app.screen();
            assert_eq!(screen.progress_percent, 20);
            assert_eq!(screen.step_label, "Basic Information");
            assert_eq!(screen.step_indicator, "Step 1 of 5");
            assert!(!screen.controls.back);
            assert!(screen.controls.proceed);
            assert!(!screen.controls.submit);
            assert!(!app.should_quit());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_active_field() {
            let mut app = accepting_app();
            type_text(&mut app, "Ada");
            assert_eq!(app.state.form.field("first_name").unwrap().as_text(), "Ada");
        }

        #[test]
        fn test_phone_is_masked_while_typing() {
            let mut app = accepting_app();
            for _ in 0..3 {
                app.handle_key(key(KeyCode::Tab));
            }
            assert_eq!(app.state.active_field_name(), Some("phone"));

            type_text(&mut app, "555");
            assert_eq!(app.state.form.field("phone").unwrap().as_text(), "(555) ");
            type_text(&mut app, "1234567");
            assert_eq!(
                app.state.form.field("phone").unwrap().as_text(),
                "(555) 123-4567"
            );
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(
                app.state.form.field("phone").unwrap().as_text(),
                "(555) 123-456"
            );
        }

        #[test]
        fn test_arrows_cycle_select() {
            let mut app = accepting_app();
            for _ in 0..4 {
                app.handle_key(key(KeyCode::Down));
            }
            assert_eq!(app.state.active_field_name(), Some("funding_amount"));
            app.handle_key(key(KeyCode::Right));
            assert_eq!(
                app.state.form.field("funding_amount").unwrap().as_text(),
                "$10,000 - $25,000"
            );
        }

        #[test]
        fn test_enter_on_text_field_moves_on() {
            let mut app = accepting_app();
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.active_field_name(), Some("last_name"));
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_continue_blocked_until_step_valid() {
            let mut app = accepting_app();
            app.handle_key(ctrl('n'));

            assert_eq!(app.state.session.current_step(), 1);
            assert_eq!(app.screen().current_notice(), Some(FILL_REQUIRED_NOTICE));
            assert!(app.screen().has_error_marker("first_name"));

            // Modal notice swallows input until dismissed
            app.handle_key(key(KeyCode::Char('x')));
            assert_eq!(app.state.form.field("first_name").unwrap().as_text(), "");
            app.handle_key(key(KeyCode::Esc));
            assert!(app.screen().current_notice().is_none());
        }

        #[test]
        fn test_continue_and_back() {
            let mut app = accepting_app();
            fill_step(&mut app, 1);

            app.handle_key(ctrl('n'));
            assert_eq!(app.state.session.current_step(), 2);
            assert_eq!(app.state.active_field_name(), Some("business_name"));
            assert_eq!(app.screen().progress_percent, 40);

            app.handle_key(ctrl('b'));
            assert_eq!(app.state.session.current_step(), 1);
            assert_eq!(app.state.form.field("first_name").unwrap().as_text(), "value");
        }

        #[test]
        fn test_scroll_follows_cursor_and_resets_on_new_step() {
            let mut app = accepting_app();
            app.set_visible_fields(2);
            for _ in 0..4 {
                app.handle_key(key(KeyCode::Tab));
            }
            assert_eq!(app.screen().scroll_offset, 3);

            fill_step(&mut app, 1);
            app.handle_key(ctrl('n'));
            assert_eq!(app.state.session.current_step(), 2);
            assert_eq!(app.screen().scroll_offset, 0);
            assert_eq!(app.state.active_field_name(), Some("business_name"));

            // A rejected Continue keeps both the cursor and the window
            for _ in 0..3 {
                app.handle_key(key(KeyCode::Tab));
            }
            app.handle_key(ctrl('n'));
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.state.active_field_name(), Some("business_phone"));
            assert_eq!(app.screen().scroll_offset, 2);
        }

        #[test]
        fn test_submit_shortcut_ignored_before_last_step() {
            let mut mock = MockSubmissionClient::new();
            mock.expect_submit().never();
            let mut app = app_with(mock);
            app.handle_key(ctrl('s'));
            assert_eq!(app.state.session.phase, Phase::Editing);
            assert!(app.screen().current_notice().is_none());
        }
    }

    mod files {
        use super::*;
        use pretty_assertions::assert_eq;

        fn on_last_step(app: &mut App) {
            for step in 1..=4 {
                fill_step(app, step);
                app.handle_key(ctrl('n'));
            }
            assert_eq!(app.state.session.current_step(), 5);
        }

        #[test]
        fn test_oversized_statement_notifies_and_restores_placeholder() {
            let file = tempfile::NamedTempFile::new().unwrap();
            file.as_file().set_len(6 * MIB).unwrap();
            let mut app = accepting_app();
            on_last_step(&mut app);

            type_text(&mut app, &file.path().display().to_string());
            app.handle_key(key(KeyCode::Enter));

            assert_eq!(
                app.screen().current_notice(),
                Some("File size must be less than 5MB")
            );
            assert_eq!(
                app.state.form.field("statement_1").unwrap().display_value(),
                NO_FILE_CHOSEN
            );
        }

        #[test]
        fn test_statement_selected_and_cleared() {
            let file = tempfile::NamedTempFile::new().unwrap();
            let mut app = accepting_app();
            on_last_step(&mut app);

            type_text(&mut app, &file.path().display().to_string());
            app.handle_key(key(KeyCode::Enter));
            assert!(app.state.form.field("statement_1").unwrap().file_pick().is_some());

            app.handle_key(key(KeyCode::Delete));
            assert!(app.state.form.field("statement_1").unwrap().file_pick().is_none());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        fn completed_app(mock: MockSubmissionClient) -> App {
            let mut app = app_with(mock);
            for step in 1..=4 {
                fill_step(&mut app, step);
                app.handle_key(ctrl('n'));
            }
            fill_step(&mut app, 5);
            app
        }

        #[tokio::test]
        async fn test_full_application_is_submitted() {
            let mut mock = MockSubmissionClient::new();
            mock.expect_submit()
                .withf(|payload| payload.get("statement_3").is_some() && payload.len() > 30)
                .times(1)
                .returning(|_| Ok(SubmissionReceipt::new()));
            let mut app = completed_app(mock);

            assert!(app.screen().controls.submit);
            app.handle_key(ctrl('s'));
            assert_eq!(app.state.session.phase, Phase::Processing);
            assert!(app.screen().processing_overlay);

            // Editing is locked while processing
            app.handle_key(ctrl('b'));
            assert_eq!(app.state.session.current_step(), 5);

            wait_for_outcome(&mut app).await;

            assert!(matches!(app.state.session.phase, Phase::Submitted(_)));
            assert!(app
                .screen()
                .current_notice()
                .unwrap()
                .starts_with(THANK_YOU_NOTICE));

            app.handle_key(key(KeyCode::Enter));
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_failed_submission_can_be_retried() {
            let mut mock = MockSubmissionClient::new();
            let mut calls = 0;
            mock.expect_submit().times(2).returning(move |_| {
                calls += 1;
                if calls == 1 {
                    Err(SubmissionError::Rejected("try later".to_string()))
                } else {
                    Ok(SubmissionReceipt::new())
                }
            });
            let mut app = completed_app(mock);

            app.handle_key(ctrl('s'));
            wait_for_outcome(&mut app).await;

            assert_eq!(app.state.session.phase, Phase::Editing);
            assert_eq!(app.state.session.current_step(), 5);
            assert!(!app.screen().processing_overlay);
            app.handle_key(key(KeyCode::Enter));

            app.handle_key(ctrl('s'));
            wait_for_outcome(&mut app).await;
            assert!(matches!(app.state.session.phase, Phase::Submitted(_)));
        }

        #[tokio::test]
        async fn test_failed_submission_shows_last_step_from_top() {
            let mut mock = MockSubmissionClient::new();
            mock.expect_submit()
                .returning(|_| Err(SubmissionError::Transport("offline".to_string())));
            let mut app = completed_app(mock);
            app.set_visible_fields(2);

            for _ in 0..3 {
                app.handle_key(key(KeyCode::Tab));
            }
            assert_eq!(app.state.active_field_name(), Some("monthly_revenue"));
            assert_eq!(app.screen().scroll_offset, 2);

            app.handle_key(ctrl('s'));
            wait_for_outcome(&mut app).await;

            assert_eq!(app.state.session.phase, Phase::Editing);
            assert_eq!(app.state.active_field_name(), Some("statement_1"));
            assert_eq!(app.screen().scroll_offset, 0);
        }

        #[tokio::test(start_paused = true)]
        async fn test_double_ctrl_c_cancels_processing() {
            let mut app = App::new(&ApplyConfig::default());
            for step in 1..=5 {
                fill_step(&mut app, step);
                app.handle_key(ctrl('n'));
            }
            app.handle_key(ctrl('s'));
            assert!(app.is_animating());

            app.handle_key(ctrl('c'));
            assert!(!app.should_quit());
            app.handle_key(ctrl('c'));
            assert!(app.should_quit());
            assert!(app.processing.is_none());
        }
    }
}
