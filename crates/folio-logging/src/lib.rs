//! Logging setup for the Folio site.
//!
//! Console output through `tracing-subscriber` (compact or pretty) and optional
//! rolling file output through `tracing-appender`. `RUST_LOG` overrides the
//! configured level.
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_logging::{FolioLogBuilder, LogConfig};
//!
//! // Pretty console output while developing
//! let _guard = FolioLogBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//! ```
//!
//! Keep the returned guard alive for as long as logs should reach the file;
//! dropping it flushes and stops the background writer.

pub mod config;

pub use config::{ConsoleConfig, FileConfig, LogConfig, RotationStrategy};
pub use tracing_appender::non_blocking::WorkerGuard;

use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use thiserror::Error;

type Stack = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<Stack> + Send + Sync + 'static>;

/// Errors setting up the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A level or filter directive did not parse
    #[error("Invalid log level {0:?}")]
    InvalidLevel(String),

    /// The log directory or file could not be created
    #[error("Failed to open log file: {0}")]
    File(#[from] tracing_appender::rolling::InitError),

    /// A global subscriber is already installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Builder for configuring and installing the global subscriber
#[derive(Debug, Clone, Default)]
pub struct FolioLogBuilder {
    config: LogConfig,
}

impl FolioLogBuilder {
    /// Builder with default configuration (compact console, `info`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Install the subscriber globally.
    ///
    /// Returns the file writer guard when file output is enabled.
    pub fn try_init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.config.default_level)
                .map_err(|_| LoggingError::InvalidLevel(self.config.default_level.clone()))?,
        };

        let mut layers: Vec<BoxedLayer> = Vec::new();
        let mut guard = None;

        if self.config.console.enabled {
            layers.push(console_layer(&self.config.console)?);
        }

        if let Some(file_config) = &self.config.file {
            let (writer, file_guard) = file_writer(file_config)?;
            guard = Some(file_guard);
            let layer: BoxedLayer = if file_config.json {
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(writer)
                    .boxed()
            } else {
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer)
                    .boxed()
            };
            layers.push(layer);
        }

        Registry::default().with(env_filter).with(layers).try_init()?;
        Ok(guard)
    }

    /// Install the subscriber, reporting failures on stderr instead of
    /// returning them.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: Failed to initialize logging: {}", e);
                None
            }
        }
    }
}

fn parse_level(level: Option<&str>) -> Result<LevelFilter, LoggingError> {
    match level {
        None => Ok(LevelFilter::TRACE),
        Some(level) => level
            .parse()
            .map_err(|_| LoggingError::InvalidLevel(level.to_string())),
    }
}

fn console_layer(console: &ConsoleConfig) -> Result<BoxedLayer, LoggingError> {
    let level = parse_level(console.level.as_deref())?;
    let layer = if console.pretty {
        tracing_subscriber::fmt::layer()
            .pretty()
            .with_ansi(console.ansi)
            .with_target(true)
            .with_filter(level)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(console.ansi)
            .with_target(false)
            .with_filter(level)
            .boxed()
    };
    Ok(layer)
}

fn file_writer(file: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    let rotation = match file.rotation {
        RotationStrategy::Daily => Rotation::DAILY,
        RotationStrategy::Hourly => Rotation::HOURLY,
        RotationStrategy::Never => Rotation::NEVER,
    };

    let mut builder = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(file.prefix.as_str())
        .filename_suffix("log");
    if let Some(max) = file.max_files {
        builder = builder.max_log_files(max);
    }

    let appender = builder.build(&file.directory)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Install a warn-level subscriber for tests; repeated calls are harmless.
pub fn init_testing() {
    let _ = FolioLogBuilder::new()
        .with_config(LogConfig::testing())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builder_defaults() {
        let builder = FolioLogBuilder::new();
        assert_eq!(builder.config().default_level, "info");
        assert!(builder.config().file.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let dir = std::path::PathBuf::from("/tmp/folio-logs");
        let builder = FolioLogBuilder::new()
            .with_level("trace")
            .with_console(false)
            .with_file_output(FileConfig::in_dir(&dir));
        assert_eq!(builder.config().default_level, "trace");
        assert!(!builder.config().console.enabled);
        assert_eq!(builder.config().file.as_ref().unwrap().directory, dir);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None).unwrap(), LevelFilter::TRACE);
        assert_eq!(parse_level(Some("warn")).unwrap(), LevelFilter::WARN);
        assert!(matches!(
            parse_level(Some("loud")),
            Err(LoggingError::InvalidLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn test_invalid_console_level_rejected_before_install() {
        let mut config = LogConfig::testing();
        config.console.level = Some("chatty".to_string());
        let err = FolioLogBuilder::new().with_config(config).try_init().unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLevel(_)));
    }

    #[test]
    fn test_file_writer_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("logs");
        let config = FileConfig {
            rotation: RotationStrategy::Never,
            ..FileConfig::in_dir(&dir)
        };
        let (_writer, _guard) = file_writer(&config).unwrap();
        assert!(dir.is_dir());
    }
}
