//! Log writers for the duolog facade.
//!
//! Two built-in [`LogWriter`] variants: [`NullWriter`], the inert default,
//! and [`FileWriter`], which appends to a per-run file with directory
//! fallback.

pub mod file;
pub mod paths;

use duolog_core::{LogWriter, Severity};

pub use file::{FileWriter, ManagedDirProvider};

/// Inert writer: both capability queries false, `write` drops everything.
///
/// This is the writer a fresh context starts with, so applications that
/// never opt into file logging pay nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullWriter;

impl LogWriter for NullWriter {
    fn write(&self, _source: &str, _level: Severity, _message: &str, _cause: Option<&str>) {}

    fn is_writing(&self) -> bool {
        false
    }

    fn is_writing_release_logs(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_writer_capabilities() {
        let writer = NullWriter;
        assert!(!writer.is_writing());
        assert!(!writer.is_writing_release_logs());
        writer.write("X", Severity::Error, "discarded", None);
    }
}
