//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header, app);
    forms::draw_step(frame, areas.body, app);
    layout::draw_controls(frame, areas.controls, app);
    layout::draw_status_bar(frame, areas.status, app);

    // Overlays last so they sit on top
    let screen = app.screen();
    if screen.processing_overlay {
        components::render_processing_dialog(frame);
    }
    if let Some(notice) = screen.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}

/// Field boxes the step section shows on a terminal `height` rows tall
pub fn visible_field_rows(height: u16) -> usize {
    let body = layout::create_layout(Rect::new(0, 0, 80, height)).body;
    let inner = Block::default().borders(Borders::ALL).inner(body);
    forms::fields_that_fit(inner.height)
}
