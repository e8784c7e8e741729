//! Level-tagged diagnostics routed through a pluggable sink.
//!
//! The engine never writes to stdout/stderr directly and never panics for
//! business-level conditions. Every loader step, fallback hop, and audit
//! finding is reported as a `(message, level)` pair through the sink
//! installed on the handle, so hosts can redirect, silence, or capture
//! messages. The default sink forwards to `tracing`.

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Error,
    Warn,
    Info,
}

impl Level {
    /// Short lowercase tag, e.g. for prefixing log lines.
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Pluggable diagnostic sink receiving `(message, level)`.
///
/// Install a custom sink with [`crate::Phrasebook::set_sink`]; tests
/// typically capture messages into a shared `Vec`.
pub type DiagnosticSink = Box<dyn Fn(&str, Level) + Send + Sync>;

/// Default sink: forwards to `tracing` at the matching level.
pub(crate) fn default_sink() -> DiagnosticSink {
    Box::new(|msg, level| match level {
        Level::Error => tracing::error!(target: "phrasebook", "{}", msg),
        Level::Warn => tracing::warn!(target: "phrasebook", "{}", msg),
        Level::Info => tracing::info!(target: "phrasebook", "{}", msg),
    })
}
