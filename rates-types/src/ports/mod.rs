//! Port traits (interfaces for adapters).
//!
//! The provider depends on these traits, not on concrete HTTP clients,
//! files or loggers.

mod log;
mod source;
mod stats;

pub use log::DiagnosticLog;
pub use source::RateSource;
pub use stats::StatsSink;
