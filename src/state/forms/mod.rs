//! Form domain layer
//!
//! Fields, input masks, the file observer and per-step validation for the
//! application form.

mod field;
mod file_pick;
mod form_state;
mod mask;
mod validation;

pub use field::{FieldKind, FieldValue, FormField};
pub use file_pick::{FilePick, FileSlot, NO_FILE_CHOSEN};
pub use form_state::{ApplicationForm, Form};
pub use mask::InputMask;
pub use validation::{validate_step, StepReport};
