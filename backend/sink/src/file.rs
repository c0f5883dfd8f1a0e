//! Fallback file writer: appends formatted lines to one file per process run.
//!
//! The writer resolves its target directory per call, either from a single
//! application-managed directory or by walking an ordered candidate list.
//! Every failure is swallowed; logging must never become a source of
//! application failure.

use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use duolog_core::{LogWriter, Severity};

use crate::paths;

/// Source name used when a record arrives from an unnamed origin.
const UNNAMED_SOURCE: &str = "duolog";

/// Supplies the single canonical logs directory in managed-directory mode.
///
/// Returning `None` means the directory is currently unavailable; the writer
/// gives up for that call and must not fall back to any other path.
pub trait ManagedDirProvider: Send + Sync {
    fn logs_dir(&self) -> Option<PathBuf>;
}

enum Target {
    Managed(Box<dyn ManagedDirProvider>),
    Candidates(Vec<PathBuf>),
}

/// File-backed [`LogWriter`] with directory fallback.
///
/// The target filename carries the process-start timestamp and is fixed for
/// the lifetime of the writer: one file per run, not per call. The file is
/// opened and closed on every append; a single lock serializes the whole
/// directory-check + open + append + flush sequence across callers.
pub struct FileWriter {
    file_name: String,
    target: Target,
    lock: Mutex<()>,
}

impl FileWriter {
    /// Default filename prefix.
    pub const DEFAULT_PREFIX: &'static str = "duolog";

    /// Writer in legacy multi-candidate mode, candidates derived from the
    /// platform storage root (see [`paths::legacy_candidates`]).
    pub fn legacy() -> Self {
        let root = paths::external_storage_root();
        Self::with_candidates(
            Self::DEFAULT_PREFIX,
            paths::legacy_candidates(root.as_deref()),
        )
    }

    /// Writer in managed-directory mode: exactly one authoritative directory,
    /// no fallback.
    pub fn managed<P: ManagedDirProvider + 'static>(provider: P) -> Self {
        Self::new(Self::DEFAULT_PREFIX, Target::Managed(Box::new(provider)))
    }

    /// Writer over an explicit ordered candidate list.
    pub fn with_candidates(prefix: &str, candidates: Vec<PathBuf>) -> Self {
        Self::new(prefix, Target::Candidates(candidates))
    }

    fn new(prefix: &str, target: Target) -> Self {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        Self {
            file_name: format!("{prefix}_{stamp}.txt"),
            target,
            lock: Mutex::new(()),
        }
    }

    /// The per-run target filename (without directory).
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Create the directory if needed, then append. Any step failing aborts
    /// this candidate; the caller decides whether another one is tried.
    fn try_append(&self, dir: &Path, line: &str) -> io::Result<()> {
        // Creation is idempotent; if it fails the open below fails too.
        let _ = fs::create_dir_all(dir);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(&self.file_name))?;
        file.write_all(line.as_bytes())?;
        file.flush()
    }
}

impl LogWriter for FileWriter {
    fn write(&self, source: &str, level: Severity, message: &str, cause: Option<&str>) {
        let source = if source.is_empty() { UNNAMED_SOURCE } else { source };
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let mut line = format!("{stamp} [{}] {source} - {message}\n", level.as_str());
        if let Some(cause) = cause {
            // Cause block follows the line directly, no separating blank line.
            line.push_str(cause);
            if !cause.ends_with('\n') {
                line.push('\n');
            }
        }

        // Serializes all file I/O for this writer; a poisoned lock is
        // recovered because a logging call must never panic.
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        match &self.target {
            Target::Managed(provider) => {
                if let Some(dir) = provider.logs_dir() {
                    let _ = self.try_append(&dir, &line);
                }
            }
            Target::Candidates(candidates) => {
                for dir in candidates {
                    if self.try_append(dir, &line).is_ok() {
                        break;
                    }
                }
            }
        }
    }

    fn is_writing(&self) -> bool {
        true
    }

    fn is_writing_release_logs(&self) -> bool {
        true
    }
}
