//! Sink that writes accepted submissions to the log

use super::traits::{SinkError, SubmissionSink};
use crate::state::SubmissionRecord;
use async_trait::async_trait;

/// Console-style sink: every record is emitted as a JSON log event
#[derive(Debug, Default)]
pub struct LogSink {
    pretty: bool,
    delivered: usize,
}

impl LogSink {
    pub fn new(pretty: bool) -> Self {
        Self {
            pretty,
            delivered: 0,
        }
    }

    /// Number of records delivered so far
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Encode a record the way it is logged
    pub fn encode(&self, record: &SubmissionRecord) -> Result<String, SinkError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        Ok(json)
    }
}

#[async_trait]
impl SubmissionSink for LogSink {
    async fn deliver(&mut self, record: &SubmissionRecord) -> Result<(), SinkError> {
        let json = self.encode(record)?;
        tracing::info!(target: "registration_tui::submission", "{json}");
        self.delivered += 1;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
