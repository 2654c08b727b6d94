//! Application state module

mod app_state;
mod forms;
mod progress_state;
mod screen_model;
mod session;

pub use app_state::*;
pub use forms::*;
pub use progress_state::*;
pub use screen_model::*;
pub use session::*;
