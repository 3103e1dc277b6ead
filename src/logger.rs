//! Custom logging module.
//!
//! This module provides a `log` implementation that formats records and
//! forwards them over a channel to the render loop, which appends them to the
//! log pane.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {:<5} {}", timestamp, level_str, record.args())
}

/// Logger that hands formatted records to the UI.
///
pub struct ChannelLogger {
    level: LevelFilter,
    sender: Mutex<Sender<String>>,
}

impl ChannelLogger {
    /// Return a logger and the receiving end its records are sent to.
    ///
    pub fn new(level: LevelFilter) -> (Self, Receiver<String>) {
        let (tx, rx) = mpsc::channel();
        (
            ChannelLogger {
                level,
                sender: Mutex::new(tx),
            },
            rx,
        )
    }
}

impl Log for ChannelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(sender) = self.sender.lock() {
                // The receiver is gone once the UI has shut down
                let _ = sender.send(format_log(record));
            }
        }
    }

    fn flush(&self) {}
}

/// Install the channel logger as the global logger.
///
pub fn init(level: LevelFilter) -> AppResult<Receiver<String>> {
    let (logger, rx) = ChannelLogger::new(level);
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(rx)
}
