//! Notice dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a user notice centered on the screen
pub fn render_notice_dialog(frame: &mut Frame, message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    let color = notice_color(message);
    render_dialog(
        frame,
        DialogConfig {
            title: "SwiftCap",
            title_color: color,
            border_color: color,
            message,
            hint: Some(hint),
            max_width: 64,
        },
    );
}

/// Confirmations in green, problems in yellow
fn notice_color(message: &str) -> Color {
    if message.starts_with("Thank you") {
        Color::Green
    } else {
        Color::Yellow
    }
}
