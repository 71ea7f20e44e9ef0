//! Diagnostic log port.

/// Console-style diagnostics, injected so tests can capture them.
pub trait DiagnosticLog: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}
