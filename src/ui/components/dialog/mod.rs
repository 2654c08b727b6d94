//! Dialog components for TUI

mod base;
mod notice_dialog;
mod processing_dialog;

pub use notice_dialog::render_notice_dialog;
pub use processing_dialog::render_processing_dialog;
