//! Core types and trait seams for the duolog dual-sink logging facade.
//!
//! Holds the pieces shared by every sink: the severity model, `{}` template
//! and cause rendering, and the `LogWriter`/`Backend` capability traits.

pub mod error;
pub mod format;
pub mod severity;
pub mod traits;

pub use error::LogError;
pub use format::{render, render_cause};
pub use severity::Severity;
pub use traits::{Backend, LogWriter};
