//! Severity levels shared by the routing facade and the file writer.

/// Log severity. Priority is numeric with lower = more severe (1-4);
/// `Verbose`/`Debug` and `Info`/`Warning` intentionally share a priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Finest-grained tracing output.
    Verbose,
    /// Developer diagnostics.
    Debug,
    /// Normal operational messages.
    Info,
    /// Something unexpected but recoverable.
    Warning,
    /// An operation failed.
    Error,
    /// The process is in an unrecoverable state.
    Fatal,
}

impl Severity {
    /// Single-letter display character used in compact line prefixes.
    #[inline]
    pub const fn display_char(self) -> char {
        match self {
            Severity::Verbose => 'V',
            Severity::Debug => 'D',
            Severity::Info => 'I',
            Severity::Warning => 'W',
            Severity::Error => 'E',
            Severity::Fatal => 'F',
        }
    }

    /// Numeric priority, lower is more severe.
    #[inline]
    pub const fn priority(self) -> u8 {
        match self {
            Severity::Verbose | Severity::Debug => 4,
            Severity::Info | Severity::Warning => 3,
            Severity::Error => 2,
            Severity::Fatal => 1,
        }
    }

    /// Upper-case level name as written into log file lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Verbose => "VERBOSE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// All six levels, most verbose first.
    pub const ALL: [Severity; 6] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
