//! Submission collaborator: the one outward-facing seam of the form

mod payload;
mod simulated;
mod task;
mod traits;

pub use payload::{SubmissionPayload, SubmissionReceipt, SubmittedValue};
pub use simulated::SimulatedSubmission;
pub use task::ProcessingTask;
pub use traits::SubmissionClient;

#[cfg(test)]
pub use traits::MockSubmissionClient;
