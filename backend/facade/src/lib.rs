//! Dual-sink leveled logging facade.
//!
//! Sits between application code and `tracing`: each call is routed, per
//! severity and call family, to the structured backend, to an auxiliary
//! fallback log file, to both, or to neither. Release-family calls survive
//! backend muting; file writes never fail the caller.
//!
//! ```no_run
//! use std::sync::Arc;
//! use duolog::{FileWriter, LogContext, Logger};
//!
//! let ctx = LogContext::global();
//! ctx.set_writer(Arc::new(FileWriter::legacy()));
//! duolog::configurator::init_default();
//!
//! let log = Logger::get("net::session").unwrap();
//! log.r_info("listening on {}", &[&"0.0.0.0:7070"]);
//! log.debug("handshake took {} ms", &[&12]);
//! ```

pub mod bridge;
pub mod configurator;
pub mod context;
pub mod logger;
mod macros;

pub use bridge::{TracingBackend, TRACING_TARGET};
pub use configurator::{is_configured, init_default, reconfigure, FileOutput, LogConfig};
pub use context::{LogContext, DEBUG_ENV_VAR};
pub use duolog_core::{render, render_cause, Backend, LogError, LogWriter, Severity};
pub use duolog_sink::{FileWriter, ManagedDirProvider, NullWriter};
pub use logger::Logger;
