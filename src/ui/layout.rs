//! Layout components (header, navigation controls, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::controller::ControlVisibility;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Width of one navigation button
const NAV_BUTTON_WIDTH: u16 = 16;

/// Screen regions, top to bottom
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub controls: Rect,
    pub status: Rect,
}

/// Split the screen into header, step body, controls row and status bar
pub fn create_layout(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Header: indicator + progress
            Constraint::Min(0),                // Step body
            Constraint::Length(BUTTON_HEIGHT), // Back / Continue / Submit
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        controls: chunks[2],
        status: chunks[3],
    }
}

/// Draw the title, step indicator and progress bar
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let screen = app.screen();
    let block = Block::default()
        .title(" SwiftCap Funding Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let indicator = Line::from(vec![
        Span::styled(
            &screen.step_indicator,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(&screen.step_label, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(indicator), rows[0]);

    let ratio = (app.progress.value() as f64 / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(ratio)
        .label(format!("{}%", screen.progress_percent));
    frame.render_widget(gauge, rows[1]);
}

/// Draw whichever navigation buttons are visible
pub fn draw_controls(frame: &mut Frame, area: Rect, app: &App) {
    let ControlVisibility {
        back,
        proceed,
        submit,
    } = app.screen().controls;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(NAV_BUTTON_WIDTH), // Back
            Constraint::Min(0),                   // Spacer
            Constraint::Length(NAV_BUTTON_WIDTH), // Continue or Submit
        ])
        .split(area);

    let editable = app.state.session.is_editing();

    if back {
        render_button(frame, chunks[0], "◀ Back  ^B", false, editable, None);
    }
    if proceed {
        render_button(frame, chunks[2], "Continue ^N", true, editable, Some(Color::Cyan));
    } else if submit {
        render_button(frame, chunks[2], "Submit  ^S", true, editable, Some(Color::Green));
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_field_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    let flagged = app.screen().error_markers.len();
    if flagged > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{flagged} required field(s) missing"),
            Style::default().fg(Color::Red),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the active field
fn get_field_hints(app: &App) -> String {
    use crate::state::{FieldKind, Form};

    if !app.state.session.is_editing() {
        return "Processing...".to_string();
    }

    let form = &app.state.form;
    let field_hint = match form.get_field(form.active_field()).map(|f| &f.kind) {
        Some(FieldKind::Select { .. }) => "←/→:choose",
        Some(FieldKind::Checkbox) => "Space:toggle",
        Some(FieldKind::Radio { .. }) => "Space:select",
        Some(FieldKind::File) => "type path  Enter:attach  Del:remove",
        _ => "type to edit",
    };

    format!("Tab/↑↓:field  {field_hint}")
}
