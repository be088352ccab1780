//! Item Registry Logging System
//!
//! Structured logging with configurable levels and output formats, built on
//! `tracing` and `tracing-subscriber`.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Logging configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum log level to output
    pub level: Level,
    /// Enable colored output
    pub color: bool,
    /// Show timestamps
    pub show_timestamps: bool,
    /// Show target/module name
    pub show_target: bool,
    /// Enable JSON format for machine parsing
    pub json_format: bool,
    /// Output to file instead of stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            color: true,
            show_timestamps: true,
            show_target: false,
            json_format: false,
            file_output: None,
        }
    }
}

impl LoggingConfig {
    /// Create config from CLI arguments
    pub fn from_args(quiet: bool, verbose: bool, json: bool) -> Self {
        let level = if verbose {
            Level::DEBUG
        } else if quiet {
            Level::ERROR
        } else {
            Level::INFO
        };

        Self {
            level,
            color: !quiet && !json && io::stdout().is_terminal(),
            // A server log without timestamps is hard to correlate across replicas
            show_timestamps: true,
            show_target: verbose,
            json_format: json,
            file_output: None,
        }
    }

    pub fn with_file_output(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.color = false;
        }
        self.file_output = path;
        self
    }

    /// Default filter directive when `RUST_LOG` is not set
    pub fn filter_directive(&self) -> String {
        let level = self.level.as_str().to_lowercase();
        format!("item_registry={},tower_http={}", level, level)
    }
}

/// Initialize the logging system
pub fn init_logging(config: LoggingConfig) -> io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    let registry = Registry::default().with(env_filter);

    if let Some(log_file) = &config.file_output {
        let directory = match log_file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = log_file.file_name().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Invalid log file name")
        })?;
        std::fs::create_dir_all(&directory)?;
        let file_appender = tracing_appender::rolling::never(directory, file_name);

        if config.json_format {
            let json_layer = fmt::layer().json().with_writer(file_appender);
            json_layer.with_subscriber(registry).try_init().map_err(io::Error::other)?;
        } else {
            let fmt_layer = fmt::layer()
                .with_target(config.show_target)
                .with_level(true)
                .with_ansi(false)
                .with_writer(file_appender);

            if config.show_timestamps {
                fmt_layer
                    .with_timer(fmt::time::ChronoUtc::rfc_3339())
                    .with_subscriber(registry)
                    .try_init()
                    .map_err(io::Error::other)?;
            } else {
                fmt_layer
                    .without_time()
                    .with_subscriber(registry)
                    .try_init()
                    .map_err(io::Error::other)?;
            }
        }
    } else if config.json_format {
        let json_layer = fmt::layer().json().with_writer(io::stdout);
        json_layer.with_subscriber(registry).try_init().map_err(io::Error::other)?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(config.show_target)
            .with_level(true)
            .with_ansi(config.color)
            .with_writer(io::stdout);

        if config.show_timestamps {
            fmt_layer
                .with_timer(fmt::time::ChronoUtc::rfc_3339())
                .with_subscriber(registry)
                .try_init()
                .map_err(io::Error::other)?;
        } else {
            fmt_layer
                .without_time()
                .with_subscriber(registry)
                .try_init()
                .map_err(io::Error::other)?;
        }
    }

    Ok(())
}

/// Log a successful item mutation
#[macro_export]
macro_rules! log_item_operation {
    ($operation:expr, $item_id:expr) => {
        tracing::info!(operation = $operation, item_id = %$item_id, "Item operation");
    };
    ($operation:expr, $item_id:expr, $details:expr) => {
        tracing::info!(
            operation = $operation,
            item_id = %$item_id,
            details = $details,
            "Item operation"
        );
    };
}
