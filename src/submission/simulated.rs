//! Stand-in backend that accepts every application after a delay

use super::payload::{SubmissionPayload, SubmissionReceipt};
use super::traits::SubmissionClient;
use crate::error::SubmissionError;
use async_trait::async_trait;
use std::time::Duration;

/// Accepts every application after the processing and confirmation delays
#[derive(Debug, Clone)]
pub struct SimulatedSubmission {
    processing_delay: Duration,
    confirmation_delay: Duration,
}

impl SimulatedSubmission {
    pub fn new(processing_delay: Duration, confirmation_delay: Duration) -> Self {
        Self {
            processing_delay,
            confirmation_delay,
        }
    }
}

#[async_trait]
impl SubmissionClient for SimulatedSubmission {
    async fn submit(
        &self,
        payload: SubmissionPayload,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        tokio::time::sleep(self.processing_delay).await;
        let receipt = SubmissionReceipt::new();
        tracing::info!(
            "Application submitted: {} field(s), reference {}",
            payload.len(),
            receipt.reference
        );
        tokio::time::sleep(self.confirmation_delay).await;
        Ok(receipt)
    }
}
