//! Configuration and tracing setup for the edit-and-continue analysis crates.
//!
//! The analysis itself takes no options; what is configurable is how its diagnostics are
//! reported. Drivers load an [`EncConfig`] (usually from an `[enc]`-style TOML file) and pass
//! its [`LoggingConfig`] to [`init_tracing`] once per process.

use std::path::Path;
use std::sync::Once;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Tracing target used by `enc-analysis`.
pub const ANALYSIS_TARGET: &str = "enc.analysis";

/// Tracing target used by this crate.
pub const CONFIG_TARGET: &str = "enc.config";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Either a simple level (`info`, `debug`, ...) or a full `EnvFilter` directive string.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Emit logs in JSON format.
    #[serde(default)]
    pub json: bool,

    /// Write logs to stderr. When disabled, [`init_tracing`] installs nothing.
    #[serde(default = "LoggingConfig::default_stderr")]
    pub stderr: bool,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_owned()
    }

    fn default_stderr() -> bool {
        true
    }

    /// The configured level as `EnvFilter` directives.
    ///
    /// Bare level names are case-insensitive and `warning` is accepted for `warn`. Anything else
    /// is passed through as a directive string; an empty level means the default.
    pub fn directives(&self) -> String {
        let level = self.level.trim();
        let lowered = level.to_ascii_lowercase();
        let directives = match lowered.as_str() {
            "" => return Self::default_level(),
            "warning" => "warn",
            name @ ("trace" | "debug" | "info" | "warn" | "error") => name,
            _ => level,
        };
        directives.to_owned()
    }

    /// Create the effective `EnvFilter`, merging `RUST_LOG` into the configured directives.
    pub fn env_filter(&self) -> EnvFilter {
        self.env_filter_with(std::env::var("RUST_LOG").ok().as_deref())
    }

    /// Tries the merged directives, then `rust_log` alone, then the configured ones, and
    /// falls back to `info` when none of them parse.
    pub(crate) fn env_filter_with(&self, rust_log: Option<&str>) -> EnvFilter {
        let configured = self.directives();
        let rust_log = rust_log.map(str::trim).filter(|value| !value.is_empty());

        let mut candidates = Vec::with_capacity(3);
        if let Some(env) = rust_log {
            candidates.push(format!("{configured},{env}"));
            candidates.push(env.to_owned());
        }
        candidates.push(configured);

        candidates
            .into_iter()
            .find_map(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::default().add_directive(LevelFilter::INFO.into()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
            stderr: Self::default_stderr(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl EncConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|err| ConfigError::Toml(err.message().to_owned()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: CONFIG_TARGET, path = %path.display(), "loaded config");
        Ok(config)
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber described by `config`.
///
/// Only the first call in a process has an effect. Returns `true` if this call installed the
/// subscriber.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let mut installed = false;
    TRACING_INIT.call_once(|| {
        if !config.stderr {
            return;
        }

        use tracing_subscriber::fmt::writer::TestWriter;
        use tracing_subscriber::prelude::*;

        let filter = config.env_filter();
        // `TestWriter` keeps `cargo test` output capture working in debug builds.
        let result = if config.json {
            let layer = tracing_subscriber::fmt::layer().json().with_ansi(false);
            if cfg!(debug_assertions) {
                tracing_subscriber::registry()
                    .with(layer.with_writer(TestWriter::with_stderr))
                    .with(filter)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(layer.with_writer(std::io::stderr))
                    .with(filter)
                    .try_init()
            }
        } else {
            let layer = tracing_subscriber::fmt::layer();
            if cfg!(debug_assertions) {
                tracing_subscriber::registry()
                    .with(layer.with_writer(TestWriter::with_stderr))
                    .with(filter)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(layer.with_writer(std::io::stderr))
                    .with(filter)
                    .try_init()
            }
        };
        installed = result.is_ok();
    });
    installed
}
