//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField, NO_FILE_CHOSEN};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by one field box
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a form field using FormField from the domain layer.
///
/// Fields carrying the error marker get a red border, even when active.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, is_invalid: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_invalid {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let line = match &field.kind {
        FieldKind::Text { .. } => Line::from(vec![Span::styled(field.display_value(), style), cursor]),
        FieldKind::Select { .. } => select_line(field, style, is_active),
        FieldKind::Checkbox => Line::from(vec![
            Span::styled(field.display_value(), style),
            Span::raw(" "),
            Span::styled(field.label.clone(), style),
        ]),
        FieldKind::Radio { value, .. } => {
            let mark = if field.is_checked() { "(•)" } else { "( )" };
            Line::from(vec![
                Span::styled(mark, style),
                Span::raw(" "),
                Span::styled(*value, style),
            ])
        }
        FieldKind::File => file_line(field, style, cursor, is_active),
    };

    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(line).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// Box title: the label with a required star; radios show their group
fn field_title(field: &FormField) -> String {
    let label = match &field.kind {
        FieldKind::Radio { group, .. } => group.replace('_', " "),
        FieldKind::Checkbox => String::new(),
        _ => field.label.clone(),
    };
    match (label.is_empty(), field.required) {
        (true, _) => String::new(),
        (false, true) => format!(" {label} * "),
        (false, false) => format!(" {label} "),
    }
}

fn select_line(field: &FormField, style: Style, is_active: bool) -> Line<'static> {
    let choice = field.as_text();
    let shown = if choice.is_empty() {
        Span::styled("(select)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(choice.to_string(), style)
    };
    if is_active {
        Line::from(vec![Span::styled("◀ ", style), shown, Span::styled(" ▶", style)])
    } else {
        Line::from(shown)
    }
}

/// While active the typed path is shown next to the current file display
fn file_line<'a>(field: &'a FormField, style: Style, cursor: Span<'a>, is_active: bool) -> Line<'a> {
    let display = field.display_value();
    let display_style = if display == NO_FILE_CHOSEN {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };

    match field.file_slot() {
        Some(slot) if is_active => Line::from(vec![
            Span::styled(slot.path_input.as_str(), style),
            cursor,
            Span::raw("  "),
            Span::styled(display, display_style),
        ]),
        _ => Line::from(Span::styled(display, display_style)),
    }
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_fields_get_a_star() {
        let field = FormField::text(1, "first_name", "First Name").required();
        assert_eq!(field_title(&field), " First Name * ");
        let field = FormField::text(1, "nickname", "Nickname");
        assert_eq!(field_title(&field), " Nickname ");
    }

    #[test]
    fn test_radio_title_is_the_group() {
        let field = FormField::radio(2, "entity_type", "LLC").required();
        assert_eq!(field_title(&field), " entity type * ");
    }

    #[test]
    fn test_checkbox_has_no_title() {
        let field = FormField::checkbox(4, "agree_terms", "I agree").required();
        assert_eq!(field_title(&field), "");
    }
}
