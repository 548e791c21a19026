//! File-based logger with size-based rotation.
//!
//! Native calls made through [`crate::Shell`] are traced at DEBUG and
//! `ShellExecuteW` failures at WARN. Lines go to
//! `~/.config/shellbind/logs/shellbind.log`; past the configured size the
//! file is rotated to `shellbind.log.1` (one backup kept). Until [`init`]
//! succeeds every macro is a no-op.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "shellbind.log";
const BACKUP_SUFFIX: &str = ".1";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

struct Logger {
    file: File,
    path: PathBuf,
    min_level: Level,
    max_bytes: u64,
    written: u64,
}

/// Initialises the global logger under the config directory.
///
/// Does nothing if `config.enabled` is `false`.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    init_in(config, &dir.join("logs"));
}

/// Initialises the global logger, writing into `log_dir`.
///
/// Only the first successful call takes effect.
pub fn init_in(config: &LogConfig, log_dir: &Path) {
    if !config.enabled {
        return;
    }
    let _ = fs::create_dir_all(log_dir);
    let path = log_dir.join(LOG_FILE_NAME);

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(_) => return,
    };
    let written = file.metadata().map(|m| m.len()).unwrap_or(0);

    let logger = Logger {
        file,
        path,
        min_level: Level::parse(&config.level),
        max_bytes: max_bytes(config),
        written,
    };

    let _ = LOGGER.set(Mutex::new(logger));
}

/// Returns the path of the active log file, if logging was initialised.
pub fn path() -> Option<PathBuf> {
    let logger = LOGGER.get()?.lock().ok()?;
    Some(logger.path.clone())
}

/// Rotation threshold in bytes. Saturates for oversized settings.
fn max_bytes(config: &LogConfig) -> u64 {
    config.max_file_mb.saturating_mul(1024 * 1024)
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    let line = format_line(&timestamp(), level, args);
    let bytes = line.len() as u64;

    let _ = logger.file.write_all(line.as_bytes());
    logger.written += bytes;

    if logger.max_bytes > 0 && logger.written >= logger.max_bytes {
        logger.rotate();
    }
}

impl Logger {
    fn rotate(&mut self) {
        let backup = self.path.with_extension(format!(
            "{}{}",
            LOG_FILE_NAME.rsplit('.').next().unwrap_or("log"),
            BACKUP_SUFFIX
        ));
        let _ = fs::rename(&self.path, &backup);
        if let Ok(f) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            self.file = f;
        }
        self.written = 0;
    }
}

fn format_line(now: &str, level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{now} [{lvl}] {args}\n", lvl = level.as_str())
}

fn timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parse_falls_back_to_info() {
        // Assert
        assert_eq!(Level::parse("DEBUG"), Level::Debug);
        assert_eq!(Level::parse("warn"), Level::Warn);
        assert_eq!(Level::parse("error"), Level::Error);
        assert_eq!(Level::parse("verbose"), Level::Info);
    }

    #[test]
    fn levels_are_ordered() {
        // Assert
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn line_format() {
        // Act
        let line = format_line("12:00:01", Level::Warn, format_args!("code {}", 31));

        // Assert
        assert_eq!(line, "12:00:01 [WARN] code 31\n");
    }

    #[test]
    fn default_config_is_disabled() {
        // Arrange
        let config = LogConfig::default();

        // Assert
        assert!(!config.enabled);
        assert_eq!(config.level, "info");
        assert_eq!(config.max_file_mb, 10);
    }

    #[test]
    fn disabled_config_creates_nothing() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("shellbind-log-{}", std::process::id()));

        // Act
        init_in(&LogConfig::default(), &dir);

        // Assert
        assert!(!dir.join(LOG_FILE_NAME).exists());
    }

    #[test]
    fn rotation_size_saturates_for_huge_limits() {
        // Arrange
        let config = LogConfig {
            enabled: true,
            level: "debug".into(),
            max_file_mb: u64::MAX / 2,
        };
        let dir = std::env::temp_dir().join(format!("shellbind-huge-{}", std::process::id()));

        // Act
        let bytes = max_bytes(&config);
        init_in(&config, &dir);

        // Assert
        assert_eq!(bytes, u64::MAX);
        assert_eq!(max_bytes(&LogConfig::default()), 10 * 1024 * 1024);
        assert!(path().is_some());
    }

    #[test]
    fn write_before_init_is_noop() {
        // Act
        crate::log_error!("nobody is listening");
    }
}
