//! Rolling Logger
//!
//! `log` backend for extension surfaces. Each line is timestamped, kept in a
//! fixed-size circular buffer (the options page shows it), and forwarded to
//! the browser console (stderr off-wasm).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept in memory
pub const BUFFER_CAPACITY: usize = 200;

/// Fixed-capacity line buffer; the oldest line is dropped when full
#[derive(Debug)]
pub struct LineBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LineBuffer {
    pub fn new(capacity: usize) -> Self {
        Self { lines: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    /// Up to `limit` lines, newest first
    pub fn newest(&self, limit: usize) -> Vec<String> {
        self.lines.iter().rev().take(limit).cloned().collect()
    }
}

struct RollingLogger {
    app_name: &'static str,
    level: LevelFilter,
    buffer: Mutex<LineBuffer>,
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

fn format_line(app_name: &str, level: Level, target: &str, message: &str) -> String {
    format!(
        "[{}] {} {:<5} {}: {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        app_name,
        level,
        target,
        message
    )
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(self.app_name, record.level(), record.target(), &record.args().to_string());
        emit(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger as the global `log` backend
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger {
        app_name,
        level,
        buffer: Mutex::new(LineBuffer::new(BUFFER_CAPACITY)),
    });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Up to `limit` recent lines, newest first. Empty before `init_logger`.
pub fn recent_lines(limit: usize) -> Vec<String> {
    LOGGER
        .get()
        .and_then(|l| l.buffer.lock().ok().map(|b| b.newest(limit)))
        .unwrap_or_default()
}
