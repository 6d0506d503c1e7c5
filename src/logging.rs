use std::sync::Arc;

use tracing::error;

/// Destination for operator-visible log entries.
///
/// Implementations must be shareable across actix workers; tests substitute
/// a capturing or mocking sink through [`OperatorLog::with_sink`].
#[cfg_attr(test, mockall::automock)]
pub trait LogSink: Send + Sync {
    /// Records one entry at error severity.
    fn error(&self, message: &str);
}

/// Sink backed by the process-wide `tracing` subscriber.
struct TracingSink;

impl LogSink for TracingSink {
    fn error(&self, message: &str) {
        error!("{message}");
    }
}

// Cloneable handle to the operator-visible log stream, registered as shared
// application data. Handlers report faults through this instead of a
// free-floating global logger.
#[derive(Clone)]
pub struct OperatorLog {
    sink: Arc<dyn LogSink>,
}

impl OperatorLog {
    /// Stream backed by the `tracing` subscriber installed at startup.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    /// Stream backed by an arbitrary sink.
    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Emits one error-severity entry on the stream.
    pub fn error(&self, message: &str) {
        self.sink.error(message);
    }
}

impl Default for OperatorLog {
    fn default() -> Self {
        Self::new()
    }
}
