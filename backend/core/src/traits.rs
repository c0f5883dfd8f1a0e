use crate::severity::Severity;

/// Hook receiving records destined for the auxiliary log file.
///
/// The routing facade only ever talks to a writer through this trait; the
/// two capability queries are consulted on every call and may be toggled
/// independently by an implementation.
pub trait LogWriter: Send + Sync {
    /// Append one record. Must never panic and never surface failure;
    /// a writer unable to persist the record drops it.
    ///
    /// `cause` is a pre-rendered failure description (error chain or
    /// backtrace), appended after the formatted line by file-backed
    /// implementations.
    fn write(&self, source: &str, level: Severity, message: &str, cause: Option<&str>);

    /// True when every gated record should be routed to this writer even if
    /// the backend logger would have skipped the level. Controls whether the
    /// facade bothers rendering the message at all.
    fn is_writing(&self) -> bool;

    /// True when release-family records must be duplicated into this writer.
    /// Independent of [`is_writing`](Self::is_writing); release records reach
    /// the backend logger either way.
    fn is_writing_release_logs(&self) -> bool;
}

/// Adapter over the structured backend logger.
///
/// Emission is assumed non-throwing; backend failures are the backend's own
/// concern and never propagate into the facade.
pub trait Backend: Send + Sync {
    /// Source name this backend instance is bound to.
    fn name(&self) -> &str;

    /// Whether the backend would currently accept the given level.
    fn is_enabled(&self, level: Severity) -> bool;

    /// Forward a fully rendered message (and optional rendered cause).
    fn emit(&self, level: Severity, message: &str, cause: Option<&str>);
}
