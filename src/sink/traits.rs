//! Trait abstraction for submission delivery to enable mocking in tests

use crate::state::SubmissionRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Failure to hand a submission to its transport
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("submission sink unavailable: {0}")]
    Unavailable(String),
}

/// Destination for accepted registrations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver one accepted record
    async fn deliver(&mut self, record: &SubmissionRecord) -> Result<(), SinkError>;

    /// Short name shown in the status bar
    fn name(&self) -> &'static str;
}
