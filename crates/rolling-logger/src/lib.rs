//! Rolling Logger
//!
//! A `log` backend that keeps the last N records in a circular buffer and
//! forwards each one to the browser console (wasm) or stderr (native).
//!
//! ```ignore
//! rolling_logger::init_logger("library", 200, log::LevelFilter::Info)?;
//! log::info!("[APP] started");
//! let last = rolling_logger::last_error();
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// One captured record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// `[HH:MM:SS.mmm LEVEL target] message`
    pub fn format(&self) -> String {
        format!(
            "[{} {} {}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct RollingLogger {
    app_name: String,
    capacity: usize,
    level: LevelFilter,
    buffer: Mutex<VecDeque<LogEntry>>,
    echo: bool,
}

impl RollingLogger {
    pub fn new(app_name: impl Into<String>, capacity: usize, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.into(),
            capacity: capacity.max(1),
            level,
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
            echo: true,
        }
    }

    /// Buffer only, nothing written to the console
    pub fn silent(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn push(&self, entry: LogEntry) {
        let Ok(mut buffer) = self.buffer.lock() else {
            return;
        };
        if buffer.len() == self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }

    /// Buffered records, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Most recent record at `Error` level
    pub fn last_error(&self) -> Option<LogEntry> {
        self.buffer
            .lock()
            .ok()?
            .iter()
            .rev()
            .find(|entry| entry.level == Level::Error)
            .cloned()
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn write_out(entry: &LogEntry) {
    let line = wasm_bindgen::JsValue::from_str(&entry.format());
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_out(entry: &LogEntry) {
    eprintln!("{}", entry.format());
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if self.echo {
            write_out(&entry);
        }
        self.push(entry);
    }

    fn flush(&self) {}
}

/// Install the global logger. Fails if a logger is already set.
pub fn init_logger(app_name: &str, capacity: usize, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, capacity, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Records captured by the global logger, oldest first
pub fn recent() -> Vec<LogEntry> {
    LOGGER.get().map(RollingLogger::entries).unwrap_or_default()
}

/// Latest error captured by the global logger
pub fn last_error() -> Option<LogEntry> {
    LOGGER.get().and_then(RollingLogger::last_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_buffer_rolls_over() {
        let logger = RollingLogger::new("test", 3, LevelFilter::Trace).silent();
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("msg {}", i));
        }

        let messages: Vec<_> = logger.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["msg 2", "msg 3", "msg 4"]);
    }

    #[test]
    fn test_level_filter_drops_records() {
        let logger = RollingLogger::new("test", 10, LevelFilter::Warn).silent();
        emit(&logger, Level::Debug, "noise");
        emit(&logger, Level::Warn, "careful");

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Warn);
    }

    #[test]
    fn test_last_error() {
        let logger = RollingLogger::new("test", 10, LevelFilter::Info).silent();
        assert!(logger.last_error().is_none());

        emit(&logger, Level::Error, "first");
        emit(&logger, Level::Error, "second");
        emit(&logger, Level::Info, "after");

        assert_eq!(logger.last_error().map(|e| e.message), Some("second".to_string()));
        logger.clear();
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_format() {
        let entry = LogEntry {
            timestamp: DateTime::parse_from_rfc3339("2024-03-15T09:05:03.250Z")
                .unwrap()
                .with_timezone(&Utc),
            level: Level::Info,
            target: "library_core::store".into(),
            message: "[LIBRARY] Done loading data".into(),
        };
        assert_eq!(entry.format(), "[09:05:03.250 INFO library_core::store] [LIBRARY] Done loading data");
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let logger = RollingLogger::new("test", 0, LevelFilter::Info).silent();
        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Info, "b");
        assert_eq!(logger.capacity(), 1);
        assert_eq!(logger.entries().len(), 1);
    }
}
