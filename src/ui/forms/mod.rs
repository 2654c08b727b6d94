//! Form rendering module
//!
//! - `field_renderer`: one bordered box per field
//! - `step_form`: the active step's section with scrolling

mod field_renderer;
mod step_form;

pub use step_form::{draw_step, fields_that_fit};
