//! The active step's section of the form

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, ScreenModel};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the fields of the active step, scrolled so the cursor stays visible
pub fn draw_step(frame: &mut Frame, area: Rect, app: &App) {
    let screen = app.screen();
    let form = &app.state.form;

    let block = Block::default()
        .title(format!(" {} ", screen.step_label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields_height = fields_height(inner.height);
    let visible = fields_that_fit(inner.height);
    // Recomputed in case the terminal shrank since the model last followed
    // the cursor
    let offset = ScreenModel::window_start(screen.scroll_offset, form.active_field(), visible);

    let active = form.active_field();
    let mut y = inner.y;
    for (index, field) in form
        .fields_for_step(screen.active_step)
        .enumerate()
        .skip(offset)
        .take(visible)
    {
        if y + FIELD_HEIGHT > inner.y + fields_height {
            break;
        }
        let rect = Rect::new(inner.x, y, inner.width, FIELD_HEIGHT);
        draw_field(
            frame,
            rect,
            field,
            index == active,
            screen.has_error_marker(&field.name),
        );
        y += FIELD_HEIGHT;
    }

    let total = form.field_count();
    if inner.height > 0 {
        let help_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        let more = if offset + visible < total {
            format!("↓ {} more", total - offset - visible)
        } else {
            String::new()
        };
        draw_help_text(frame, help_area, &more);
    }
}

/// Rows left for field boxes; the last row holds the help text
fn fields_height(inner_height: u16) -> u16 {
    inner_height.saturating_sub(1)
}

/// Whole field boxes that fit inside the bordered step section
pub fn fields_that_fit(inner_height: u16) -> usize {
    (fields_height(inner_height) / FIELD_HEIGHT).max(1) as usize
}
