//! Process-wide logging state.
//!
//! State lives in an explicit [`LogContext`] shared by `Arc` rather than
//! ambient globals, so tests can build a fresh context per case. A single
//! process-global default context exists for application code that wants
//! the conventional one-per-process setup.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use duolog_core::LogWriter;
use duolog_sink::NullWriter;
use once_cell::sync::Lazy;

/// Environment variable probed for debug-mode when no explicit override is set.
pub const DEBUG_ENV_VAR: &str = "DUOLOG_DEBUG";

static GLOBAL: Lazy<Arc<LogContext>> = Lazy::new(|| Arc::new(LogContext::new()));

/// Mutable logging state read by every facade call.
///
/// Three independent cells: the active writer, the debug-mode override, and
/// the assert-on-fatal flag. Setter effects are visible to all threads as
/// soon as the setter returns; a reader never observes a partially swapped
/// writer reference.
pub struct LogContext {
    writer: RwLock<Arc<dyn LogWriter>>,
    debug_override: RwLock<Option<bool>>,
    assert_on_fatal: AtomicBool,
}

impl LogContext {
    /// Fresh context: inert writer, no debug override, asserts disabled.
    pub fn new() -> Self {
        Self {
            writer: RwLock::new(Arc::new(NullWriter)),
            debug_override: RwLock::new(None),
            assert_on_fatal: AtomicBool::new(false),
        }
    }

    /// The process-global default context.
    pub fn global() -> Arc<LogContext> {
        Arc::clone(&GLOBAL)
    }

    /// The currently active writer.
    pub fn writer(&self) -> Arc<dyn LogWriter> {
        Arc::clone(
            &self
                .writer
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Replace the active writer, effective for all subsequent calls.
    pub fn set_writer(&self, writer: Arc<dyn LogWriter>) {
        *self
            .writer
            .write()
            .unwrap_or_else(PoisonError::into_inner) = writer;
    }

    /// True when the active writer demands gated records.
    pub fn is_connected_to_file_writer(&self) -> bool {
        self.writer().is_writing()
    }

    /// When set, fatal calls raise a non-recoverable condition after logging.
    pub fn set_assert_on_fatal(&self, assert_on_fatal: bool) {
        self.assert_on_fatal
            .store(assert_on_fatal, Ordering::SeqCst);
    }

    pub fn assert_on_fatal(&self) -> bool {
        self.assert_on_fatal.load(Ordering::SeqCst)
    }

    /// Explicitly pin debug-mode, taking precedence over the environment probe.
    pub fn set_debug_override(&self, debug: bool) {
        *self
            .debug_override
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(debug);
    }

    /// Drop the override so the environment probe decides again.
    pub fn clear_debug_override(&self) {
        *self
            .debug_override
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Whether debug-gated records should reach the backend logger.
    ///
    /// Priority: explicit override, then the [`DEBUG_ENV_VAR`] probe, then
    /// false. The probe never fails; absent or unrecognized values fall
    /// through.
    pub fn is_debug_active(&self) -> bool {
        if let Some(debug) = *self
            .debug_override
            .read()
            .unwrap_or_else(PoisonError::into_inner)
        {
            return debug;
        }
        probe_env().unwrap_or(false)
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogContext")
            .field("assert_on_fatal", &self.assert_on_fatal())
            .field("is_debug_active", &self.is_debug_active())
            .finish_non_exhaustive()
    }
}

fn probe_env() -> Option<bool> {
    let raw = std::env::var(DEBUG_ENV_VAR).ok()?;
    parse_debug_flag(&raw)
}

/// Parse a debug-mode env value. Unrecognized input is `None`, not an error.
fn parse_debug_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duolog_core::Severity;

    #[test]
    fn test_fresh_context_defaults() {
        let ctx = LogContext::new();
        assert!(!ctx.assert_on_fatal());
        assert!(!ctx.is_connected_to_file_writer());
        assert!(!ctx.writer().is_writing_release_logs());
    }

    #[test]
    fn test_debug_override_precedence() {
        let ctx = LogContext::new();
        ctx.set_debug_override(true);
        assert!(ctx.is_debug_active());
        ctx.set_debug_override(false);
        assert!(!ctx.is_debug_active());
        ctx.clear_debug_override();
        // No override and no probed value defaults to false.
        if std::env::var(DEBUG_ENV_VAR).is_err() {
            assert!(!ctx.is_debug_active());
        }
    }

    #[test]
    fn test_parse_debug_flag() {
        assert_eq!(parse_debug_flag("1"), Some(true));
        assert_eq!(parse_debug_flag("TRUE"), Some(true));
        assert_eq!(parse_debug_flag(" on "), Some(true));
        assert_eq!(parse_debug_flag("0"), Some(false));
        assert_eq!(parse_debug_flag("off"), Some(false));
        assert_eq!(parse_debug_flag("maybe"), None);
        assert_eq!(parse_debug_flag(""), None);
    }

    #[test]
    fn test_set_writer_swaps_capabilities() {
        struct Marker;
        impl duolog_core::LogWriter for Marker {
            fn write(&self, _: &str, _: Severity, _: &str, _: Option<&str>) {}
            fn is_writing(&self) -> bool {
                true
            }
            fn is_writing_release_logs(&self) -> bool {
                false
            }
        }

        let ctx = LogContext::new();
        ctx.set_writer(std::sync::Arc::new(Marker));
        assert!(ctx.is_connected_to_file_writer());
        assert!(!ctx.writer().is_writing_release_logs());
    }

    #[test]
    fn test_assert_flag_round_trip() {
        let ctx = LogContext::new();
        ctx.set_assert_on_fatal(true);
        assert!(ctx.assert_on_fatal());
        ctx.set_assert_on_fatal(false);
        assert!(!ctx.assert_on_fatal());
    }
}
