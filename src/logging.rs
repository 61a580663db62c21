//! FILENAME: src/logging.rs
// PURPOSE: Unified logging backend for the shell.
// FORMAT: seq|level|category|message

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;

use crate::config;

/// Global sequence counter, shared by every log line.
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Global log file handle. Absent when file logging could not be set up,
/// in which case lines go to the console only.
static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

static LOGGER: UnifiedLogger = UnifiedLogger;

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

fn level_letter(level: Level) -> &'static str {
    match level {
        Level::Error => "E",
        Level::Warn => "W",
        Level::Info => "I",
        Level::Debug => "D",
        Level::Trace => "T",
    }
}

/// Formats one log line in the unified format.
pub fn format_line(seq: u64, level: Level, category: &str, message: &str) -> String {
    format!("{}|{}|{}|{}", seq, level_letter(level), category, message)
}

struct UnifiedLogger;

impl Log for UnifiedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            next_seq(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(ref mut file) = *guard {
                if let Err(e) = writeln!(file, "{}", line) {
                    eprintln!("[LOG_ERROR] Failed to write: {}", e);
                }
                let _ = file.flush();
            }
        }
        println!("{}", line);
    }

    fn flush(&self) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.flush();
            }
        }
    }
}

fn candidate_log_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            dirs.push(parent.to_path_buf());
        }
    }
    dirs.push(std::env::temp_dir());
    dirs
}

/// Creates the log file, preferring the executable's directory and falling
/// back to the system temp directory.
pub fn init_log_file() -> Result<PathBuf, String> {
    let mut last_err = "no candidate log directory".to_string();
    for dir in candidate_log_dirs() {
        let path = dir.join(config::LOG_FILE_NAME);
        match OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
        {
            Ok(file) => {
                *LOG_FILE.lock().map_err(|e| e.to_string())? = Some(file);
                return Ok(path);
            }
            Err(e) => last_err = format!("failed to open {:?}: {}", path, e),
        }
    }
    Err(last_err)
}

/// Installs the unified logger. Failure to set up the log file degrades to
/// console-only logging.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
    match init_log_file() {
        Ok(path) => {
            log::info!(target: "SYS", "log file at {}", path.display());
        }
        Err(e) => {
            eprintln!("[LOG_INIT] {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }
}
