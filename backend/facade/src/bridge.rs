//! Adapter from the facade's severity model onto `tracing`.

use duolog_core::{Backend, Severity};
use tracing::Level;

/// Event target used for all facade emissions, so `EnvFilter` directives
/// like `duolog=debug` apply uniformly.
pub const TRACING_TARGET: &str = "duolog";

/// [`Backend`] implementation forwarding into the global `tracing` dispatcher.
///
/// Fatal has no `tracing` counterpart and maps onto `ERROR`, mirroring
/// Verbose onto `TRACE`.
pub struct TracingBackend {
    name: String,
}

impl TracingBackend {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

const fn tracing_level(level: Severity) -> Level {
    match level {
        Severity::Verbose => Level::TRACE,
        Severity::Debug => Level::DEBUG,
        Severity::Info => Level::INFO,
        Severity::Warning => Level::WARN,
        Severity::Error | Severity::Fatal => Level::ERROR,
    }
}

impl Backend for TracingBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: Severity) -> bool {
        match level {
            Severity::Verbose => tracing::enabled!(target: TRACING_TARGET, Level::TRACE),
            Severity::Debug => tracing::enabled!(target: TRACING_TARGET, Level::DEBUG),
            Severity::Info => tracing::enabled!(target: TRACING_TARGET, Level::INFO),
            Severity::Warning => tracing::enabled!(target: TRACING_TARGET, Level::WARN),
            Severity::Error | Severity::Fatal => {
                tracing::enabled!(target: TRACING_TARGET, Level::ERROR)
            }
        }
    }

    fn emit(&self, level: Severity, message: &str, cause: Option<&str>) {
        macro_rules! forward {
            ($mac:ident) => {
                tracing::$mac!(
                    target: TRACING_TARGET,
                    source = %self.name,
                    cause = cause,
                    "{message}"
                )
            };
        }
        match level {
            Severity::Verbose => forward!(trace),
            Severity::Debug => forward!(debug),
            Severity::Info => forward!(info),
            Severity::Warning => forward!(warn),
            Severity::Error | Severity::Fatal => forward!(error),
        }
    }
}
