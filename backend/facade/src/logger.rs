//! The routing facade: one logger per source name, two call families.
//!
//! Gated calls reach the backend only in debug-mode and only when the
//! backend reports the level enabled; they reach the file writer whenever
//! the level is enabled or the writer demands every record. Release calls
//! always reach the backend and are duplicated into the writer only when it
//! asks for release records. Fatal is the single path allowed to terminate
//! the calling flow.

use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Display, Write as _};
use std::sync::Arc;

use duolog_core::{render, render_cause, Backend, LogError, Severity};

use crate::bridge::TracingBackend;
use crate::context::LogContext;

/// Leveled logger bound to one source name.
pub struct Logger {
    ctx: Arc<LogContext>,
    backend: Arc<dyn Backend>,
}

impl Logger {
    /// Logger over the `tracing` backend. Fails for an empty source name;
    /// this is the only synchronous rejection in the facade.
    pub fn new(ctx: Arc<LogContext>, name: impl Into<String>) -> Result<Self, LogError> {
        let name = name.into();
        if name.is_empty() {
            return Err(LogError::EmptySource);
        }
        Ok(Self {
            ctx,
            backend: Arc::new(TracingBackend::new(name)),
        })
    }

    /// Logger bound to the process-global context.
    pub fn get(name: impl Into<String>) -> Result<Self, LogError> {
        Self::new(LogContext::global(), name)
    }

    /// Logger over an explicit backend; the backend's name is the source.
    pub fn with_backend(ctx: Arc<LogContext>, backend: Arc<dyn Backend>) -> Result<Self, LogError> {
        if backend.name().is_empty() {
            return Err(LogError::EmptySource);
        }
        Ok(Self { ctx, backend })
    }

    /// Source name this logger was constructed with.
    pub fn name(&self) -> &str {
        self.backend.name()
    }

    /// The context this logger reads on every call.
    pub fn context(&self) -> &Arc<LogContext> {
        &self.ctx
    }

    fn gated(
        &self,
        level: Severity,
        template: &str,
        args: &[&dyn Display],
        cause: Option<&dyn Error>,
    ) {
        let enabled = self.backend.is_enabled(level);
        let writer = self.ctx.writer();
        let asserting = level == Severity::Fatal && self.ctx.assert_on_fatal();
        if !enabled && !writer.is_writing() && !asserting {
            // Nothing wants this record; skip rendering entirely.
            return;
        }

        let mut message = render(template, args);
        let rendered_cause = cause.map(render_cause);
        if level == Severity::Fatal && rendered_cause.is_none() && !asserting {
            append_thread_trace(&mut message);
        }

        writer.write(self.backend.name(), level, &message, rendered_cause.as_deref());
        if enabled && self.ctx.is_debug_active() {
            self.backend.emit(level, &message, rendered_cause.as_deref());
        }
        if asserting {
            panic!("fatal: {message}");
        }
    }

    fn release(
        &self,
        level: Severity,
        template: &str,
        args: &[&dyn Display],
        cause: Option<&dyn Error>,
    ) {
        let asserting = level == Severity::Fatal && self.ctx.assert_on_fatal();
        let mut message = render(template, args);
        let rendered_cause = cause.map(render_cause);
        if level == Severity::Fatal && rendered_cause.is_none() && !asserting {
            append_thread_trace(&mut message);
        }

        let writer = self.ctx.writer();
        if writer.is_writing_release_logs() {
            writer.write(self.backend.name(), level, &message, rendered_cause.as_deref());
        }
        // The backend applies its own filtering; release records always
        // reach it regardless of debug-mode.
        self.backend.emit(level, &message, rendered_cause.as_deref());
        if asserting {
            panic!("fatal: {message}");
        }
    }

    /// Dispatch a gated call by runtime level.
    pub fn log(&self, level: Severity, template: &str, args: &[&dyn Display]) {
        self.gated(level, template, args, None);
    }

    /// Dispatch a gated call carrying a cause by runtime level.
    pub fn log_cause(
        &self,
        level: Severity,
        template: &str,
        args: &[&dyn Display],
        cause: &dyn Error,
    ) {
        self.gated(level, template, args, Some(cause));
    }

    /* gated family */

    /// Log VERBOSE in debug deployments only.
    pub fn verbose(&self, template: &str, args: &[&dyn Display]) {
        self.gated(Severity::Verbose, template, args, None);
    }

    pub fn verbose_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        self.gated(Severity::Verbose, template, args, Some(cause));
    }

    /// Log DEBUG in debug deployments only.
    pub fn debug(&self, template: &str, args: &[&dyn Display]) {
        self.gated(Severity::Debug, template, args, None);
    }

    pub fn debug_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        self.gated(Severity::Debug, template, args, Some(cause));
    }

    /// Log INFO in debug deployments only.
    pub fn info(&self, template: &str, args: &[&dyn Display]) {
        self.gated(Severity::Info, template, args, None);
    }

    pub fn info_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        self.gated(Severity::Info, template, args, Some(cause));
    }

    /// Log WARNING in debug deployments only.
    pub fn warn(&self, template: &str, args: &[&dyn Display]) {
        self.gated(Severity::Warning, template, args, None);
    }

    pub fn warn_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        self.gated(Severity::Warning, template, args, Some(cause));
    }

    /// Log ERROR in debug deployments only.
    pub fn error(&self, template: &str, args: &[&dyn Display]) {
        self.gated(Severity::Error, template, args, None);
    }

    pub fn error_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        self.gated(Severity::Error, template, args, Some(cause));
    }

    /// Log FATAL. Without a cause the calling thread's own backtrace is
    /// appended to the message; with assert-on-fatal set this call panics
    /// after forwarding.
    pub fn fatal(&self, template: &str, args: &[&dyn Display]) {
        self.gated(Severity::Fatal, template, args, None);
    }

    pub fn fatal_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        self.gated(Severity::Fatal, template, args, Some(cause));
    }

    /* release family: always reaches the backend logger */

    pub fn r_verbose(&self, template: &str, args: &[&dyn Display]) {
        self.release(Severity::Verbose, template, args, None);
    }

    pub fn r_verbose_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        self.release(Severity::Verbose, template, args, Some(cause));
    }

    pub fn r_debug(&self, template: &str, args: &[&dyn Display]) {
        self.release(Severity::Debug, template, args, None);
    }

    pub fn r_debug_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        self.release(Severity::Debug, template, args, Some(cause));
    }

    /// Log INFO regardless of build mode or backend verbosity filtering.
    pub fn r_info(&self, template: &str, args: &[&dyn Display]) {
        self.release(Severity::Info, template, args, None);
    }

    pub fn r_info_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        self.release(Severity::Info, template, args, Some(cause));
    }

    pub fn r_warn(&self, template: &str, args: &[&dyn Display]) {
        self.release(Severity::Warning, template, args, None);
    }

    pub fn r_warn_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        self.release(Severity::Warning, template, args, Some(cause));
    }

    pub fn r_error(&self, template: &str, args: &[&dyn Display]) {
        self.release(Severity::Error, template, args, None);
    }

    pub fn r_error_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        self.release(Severity::Error, template, args, Some(cause));
    }

    pub fn r_fatal(&self, template: &str, args: &[&dyn Display]) {
        self.release(Severity::Fatal, template, args, None);
    }

    pub fn r_fatal_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        self.release(Severity::Fatal, template, args, Some(cause));
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("source", &self.backend.name())
            .finish_non_exhaustive()
    }
}

/// Append the calling thread's captured backtrace to a fatal message.
///
/// Only used when asserting is disabled; with asserting enabled the host's
/// own fault reporting captures context instead.
fn append_thread_trace(message: &mut String) {
    let trace = Backtrace::force_capture();
    let _ = write!(message, "\n{trace}");
}
