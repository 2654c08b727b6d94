//! Trait abstraction for the submission backend to enable mocking in tests

use super::payload::{SubmissionPayload, SubmissionReceipt};
use crate::error::SubmissionError;
use async_trait::async_trait;

/// Receives the collected application once the last step validates
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Submit every collected field value
    async fn submit(
        &self,
        payload: SubmissionPayload,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}
