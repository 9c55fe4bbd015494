//! Submission transport module

mod log_sink;
mod traits;

pub use log_sink::LogSink;
pub use traits::{SinkError, SubmissionSink};

#[cfg(test)]
pub use traits::MockSubmissionSink;
