//! Backend subscriber configuration glue.
//!
//! Thin wrapper over `tracing-subscriber`: checks whether a global
//! subscriber is installed, installs a console default when none is, and
//! applies a YAML configuration file on request. All failure modes degrade
//! to `false`/no-op; configuration problems must never take the caller down.

use std::path::Path;
use std::sync::Once;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::bridge::TRACING_TARGET;

static DEFAULT_CONFIG_WARNING: Once = Once::new();

/// Declarative subscriber configuration loaded from YAML.
#[derive(Debug, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive string, e.g. `info` or `duolog=debug`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Whether a console layer is installed.
    #[serde(default = "default_console")]
    pub console: bool,
    /// Optional daily-rolling file output.
    #[serde(default)]
    pub file: Option<FileOutput>,
}

#[derive(Debug, Deserialize)]
pub struct FileOutput {
    pub dir: std::path::PathBuf,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Emit NDJSON instead of plain text.
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

const fn default_console() -> bool {
    true
}

fn default_prefix() -> String {
    "duolog.log".to_string()
}

/// Whether a global `tracing` subscriber has been installed.
pub fn is_configured() -> bool {
    tracing::dispatcher::has_been_set()
}

/// Install a console default when no subscriber is configured yet.
///
/// Safe to call repeatedly; emits a one-time warning through the backend so
/// a missing configuration file is noticed exactly once.
pub fn init_default() {
    if !is_configured() {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let console = fmt::layer().with_writer(std::io::stdout).with_target(false);
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(console)
            .try_init();
        DEFAULT_CONFIG_WARNING.call_once(|| {
            tracing::warn!(
                target: TRACING_TARGET,
                "no logging configuration loaded, using console defaults"
            );
        });
    }
}

/// Re-configure the backend from a YAML file.
///
/// Returns true when the configuration was parsed and installed. A missing
/// or invalid file, or an already-installed global subscriber, yields false;
/// never an error.
pub fn reconfigure(path: &Path) -> bool {
    match load_config(path) {
        Ok(config) => install(&config),
        Err(err) => {
            // Best-effort notice through whatever backend exists.
            tracing::warn!(
                target: TRACING_TARGET,
                error = %err,
                path = %path.display(),
                "logging reconfiguration failed"
            );
            false
        }
    }
}

fn load_config(path: &Path) -> Result<LogConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read logging config: {}", path.display()))?;
    serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse logging config YAML: {}", path.display()))
}

fn install(config: &LogConfig) -> bool {
    let Ok(env_filter) = EnvFilter::try_new(&config.level) else {
        return false;
    };

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    if config.console {
        layers.push(fmt::layer().with_writer(std::io::stdout).with_target(false).boxed());
    }
    if let Some(file) = &config.file {
        let appender = tracing_appender::rolling::daily(&file.dir, &file.prefix);
        if file.json {
            layers.push(fmt::layer().json().with_writer(appender).with_ansi(false).boxed());
        } else {
            layers.push(fmt::layer().with_writer(appender).with_ansi(false).boxed());
        }
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config: LogConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.level, "info");
        assert!(config.console);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_config_with_file_output() {
        let yaml = "level: duolog=debug\nconsole: false\nfile:\n  dir: /var/log/app\n  json: true\n";
        let config: LogConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.level, "duolog=debug");
        assert!(!config.console);
        let file = config.file.unwrap();
        assert_eq!(file.dir, std::path::PathBuf::from("/var/log/app"));
        assert_eq!(file.prefix, "duolog.log");
        assert!(file.json);
    }

    #[test]
    fn test_reconfigure_missing_file_is_false() {
        assert!(!reconfigure(Path::new("/nonexistent/duolog.yaml")));
    }

    #[test]
    fn test_reconfigure_invalid_yaml_is_false() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.yaml");
        std::fs::write(&path, "level: [unterminated").unwrap();
        assert!(!reconfigure(&path));
    }
}
