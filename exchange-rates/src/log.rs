//! `DiagnosticLog` backed by `tracing`.

use rates_types::DiagnosticLog;

/// Forwards diagnostics to `tracing`, tagged with a logger name.
#[derive(Debug, Clone)]
pub struct TracingLog {
    name: String,
}

impl TracingLog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for TracingLog {
    fn default() -> Self {
        Self::new("RateProvider")
    }
}

impl DiagnosticLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(logger = %self.name, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(logger = %self.name, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(logger = %self.name, "{}", message);
    }
}
