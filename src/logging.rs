//! JSON-lines file logger.
//!
//! Library crates log through the `log` facade. The terminal host owns the
//! screen, so records go to a file instead: one JSON object per line with
//! `ts_ms`, `level`, `target` and `msg`.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LogLine<'a> {
    pub ts_ms: u64,
    pub level: &'a str,
    pub target: &'a str,
    pub msg: String,
}

/// Serialize one record as a JSON line (without the trailing newline).
pub fn format_record(record: &Record<'_>, ts_ms: u64) -> serde_json::Result<String> {
    serde_json::to_string(&LogLine {
        ts_ms,
        level: record.level().as_str(),
        target: record.target(),
        msg: record.args().to_string(),
    })
}

pub struct JsonLinesLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl JsonLinesLogger {
    pub fn open(path: &str, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {}", path))?;
        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for JsonLinesLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let ts_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let Ok(line) = format_record(record, ts_ms) else {
            return;
        };
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install the file logger as the global `log` backend.
pub fn init(path: &str, level: LevelFilter) -> Result<()> {
    let logger = JsonLinesLogger::open(path, level)?;
    log::set_boxed_logger(Box::new(logger)).context("install logger")?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_format_record_is_one_json_object() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("cleared {} rows", 2))
                .level(Level::Debug)
                .target("mono_tetris_core::board")
                .build(),
            1234,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["ts_ms"], 1234);
        assert_eq!(value["level"], "DEBUG");
        assert_eq!(value["target"], "mono_tetris_core::board");
        assert_eq!(value["msg"], "cleared 2 rows");
        assert!(!line.contains('\n'));
    }
}
