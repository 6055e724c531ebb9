// src/util/log.rs

//! File-based logging for the terminal UI.
//!
//! The alternate screen owns stdout, so every log line goes to a file under the
//! configured log directory, one file per severity. `tracing` events from the
//! async layers are routed to `trace.log` in the same directory by
//! [`init_tracing`].
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::{LazyLock, OnceLock};
use chrono::Local;

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

const DEFAULT_LOG_DIR: &str = "./logs";

/// Global logger instance. `None` when the log directory could not be created.
pub static LOGGER: LazyLock<Option<Logger>> = LazyLock::new(|| {
    let dir = LOG_DIR
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));
    Logger::new(dir).ok()
});

/// Point the global logger at `dir`. Only the first call wins, and only if it
/// happens before the first log line.
pub fn set_log_dir(dir: impl Into<PathBuf>) {
    let _ = LOG_DIR.set(dir.into());
}

/// Install a `tracing` subscriber writing to `<dir>/trace.log`.
pub fn init_tracing(dir: &Path) -> color_eyre::Result<()> {
    create_dir_all(dir)?;
    let file = File::create(dir.join("trace.log"))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to install tracing subscriber: {}", e))
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn filename(&self) -> &str {
        match self {
            LogLevel::Error => "error.log",
            LogLevel::Warn => "warn.log",
            LogLevel::Info => "info.log",
            LogLevel::Debug => "debug.log",
        }
    }
}

/// Logger that writes to separate files by severity
pub struct Logger {
    log_dir: PathBuf,
    error_file: Mutex<File>,
    warn_file: Mutex<File>,
    info_file: Mutex<File>,
    debug_file: Mutex<File>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

impl Logger {
    /// Create a new logger in `log_dir`, truncating any previous session's files.
    pub fn new(log_dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        DEBUG_ENABLED.get_or_init(|| {
            std::env::var("DEBUG").unwrap_or_default() == "true"
        });

        let log_dir = log_dir.into();
        create_dir_all(&log_dir)?;

        let open = |level: LogLevel| File::create(log_dir.join(level.filename()));

        Ok(Self {
            error_file: Mutex::new(open(LogLevel::Error)?),
            warn_file: Mutex::new(open(LogLevel::Warn)?),
            info_file: Mutex::new(open(LogLevel::Info)?),
            debug_file: Mutex::new(open(LogLevel::Debug)?),
            log_dir,
        })
    }

    /// Write a log entry to the appropriate file
    fn write_log(&self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!("[{}] [{}] {}\n", timestamp, level.as_str(), message);

        let file = match level {
            LogLevel::Error => &self.error_file,
            LogLevel::Warn => &self.warn_file,
            LogLevel::Info => &self.info_file,
            LogLevel::Debug => &self.debug_file,
        };

        if let Ok(mut file) = file.lock() {
            let _ = file.write_all(formatted.as_bytes());
            let _ = file.flush();
        }
    }

    pub fn error(&self, message: &str) {
        self.write_log(LogLevel::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.write_log(LogLevel::Warn, message);
    }

    pub fn info(&self, message: &str) {
        self.write_log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.write_log(LogLevel::Debug, message);
    }
}

/// Convenience macro for error logging with formatting
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.as_ref() {
            logger.error(&format!($($arg)*));
        }
    }};
}

/// Convenience macro for warning logging with formatting
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.as_ref() {
            logger.warn(&format!($($arg)*));
        }
    }};
}

/// Convenience macro for info logging with formatting
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.as_ref() {
            logger.info(&format!($($arg)*));
        }
    }};
}

/// Convenience macro for debug logging with formatting
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if *$crate::util::log::DEBUG_ENABLED.get().unwrap_or(&false) {
            if let Some(logger) = $crate::util::log::LOGGER.as_ref() {
                logger.debug(&format!($($arg)*));
            }
        }
    }};
}
