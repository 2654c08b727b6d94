//! Cancellable background task wrapping one submission

use super::payload::{SubmissionPayload, SubmissionReceipt};
use super::traits::SubmissionClient;
use crate::error::SubmissionError;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub type SubmissionOutcome = Result<SubmissionReceipt, SubmissionError>;

/// An in-flight submission.
///
/// The event loop polls it without blocking; dropping or cancelling it aborts
/// the collaborator future.
#[derive(Debug)]
pub struct ProcessingTask {
    handle: JoinHandle<()>,
    outcome: oneshot::Receiver<SubmissionOutcome>,
}

impl ProcessingTask {
    /// Start submitting `payload` on the tokio runtime
    pub fn spawn(client: Arc<dyn SubmissionClient>, payload: SubmissionPayload) -> Self {
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let result = client.submit(payload).await;
            // Receiver gone means the task was cancelled; nothing to report.
            let _ = tx.send(result);
        });
        Self {
            handle,
            outcome: rx,
        }
    }

    pub fn cancel(&self) {
        tracing::info!("Cancelling submission");
        self.handle.abort();
    }

    /// The outcome if the collaborator has finished, without waiting
    pub fn try_outcome(&mut self) -> Option<SubmissionOutcome> {
        match self.outcome.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(SubmissionError::Cancelled)),
        }
    }

    /// Wait for the outcome
    #[allow(dead_code)]
    pub async fn outcome(&mut self) -> SubmissionOutcome {
        (&mut self.outcome)
            .await
            .unwrap_or(Err(SubmissionError::Cancelled))
    }
}

impl Drop for ProcessingTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
