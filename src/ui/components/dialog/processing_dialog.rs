//! Processing overlay shown while the application is being submitted

use super::base::{render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

pub fn render_processing_dialog(frame: &mut Frame) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Processing Your Application",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: "Please wait while we review your information.\nThis only takes a moment.",
            hint: None,
            max_width: 56,
        },
    );
}
