//! Logging support for the `log` facade, backed by fern
//!
//! Records are always mirrored into a shared in-memory buffer that the
//! logs overlay reads. When logging is enabled in the configuration they
//! are also appended to a log file.

use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;
use crate::constants::LOG_BUFFER_CAP;

/// Shared log buffer that can be read across the application
#[derive(Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add an already-formatted entry, dropping the oldest ones past the cap
    pub fn push(&self, line: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(line);
            if entries.len() > LOG_BUFFER_CAP {
                let excess = entries.len() - LOG_BUFFER_CAP;
                entries.drain(..excess);
            }
        }
    }

    /// Get all entries sorted by date (newest first)
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        if let Ok(entries) = self.entries.lock() {
            let mut sorted_entries = entries.clone();
            // Reverse to show newest entries first (descending order by timestamp)
            sorted_entries.reverse();
            sorted_entries
        } else {
            Vec::new()
        }
    }

    /// Clear all entries
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

static BUFFER: Lazy<LogBuffer> = Lazy::new(LogBuffer::new);

/// The process-wide log buffer: fern writes into it, the logs overlay reads it
pub fn buffer() -> &'static LogBuffer {
    &BUFFER
}

/// Default log file location under the platform data directory
pub fn default_log_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("taskpad").join("taskpad.log"))
}

/// Install the global logger.
///
/// Every record is mirrored into the in-memory buffer; the file sink is
/// only chained when enabled in the configuration.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = config
        .level
        .parse::<log::LevelFilter>()
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(fern::Output::call(|record| {
            buffer().push(record.args().to_string());
        }));

    if config.enabled {
        let path = match &config.file {
            Some(path) => path.clone(),
            None => default_log_path()?,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file =
            fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("Logger already initialized")?;
    Ok(())
}
