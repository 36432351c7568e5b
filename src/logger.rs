//! Debug logging for the CLI.
//!
//! A thin `log` facade backend that can write to stdout, a file, or both,
//! toggled at runtime by the `--log`/`--log-file` flags. Disabled entirely
//! until [`enable_logging`] is called, so library consumers get no output
//! they did not ask for.

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

struct ShipNoteLogger;

static LOGGER: ShipNoteLogger = ShipNoteLogger;
static LOGGING_ENABLED: std::sync::LazyLock<Mutex<bool>> =
    std::sync::LazyLock::new(|| Mutex::new(false));
static LOG_FILE: std::sync::LazyLock<Mutex<Option<std::fs::File>>> =
    std::sync::LazyLock::new(|| Mutex::new(None));
static LOG_TO_STDOUT: std::sync::LazyLock<Mutex<bool>> =
    std::sync::LazyLock::new(|| Mutex::new(false));

impl log::Log for ShipNoteLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if !*LOGGING_ENABLED.lock() {
            return false;
        }

        // Our own logs at debug and above; transport internals (reqwest,
        // hyper, ...) only when they warn.
        if metadata.target().starts_with("ship_note_client") {
            metadata.level() <= Level::Debug
        } else {
            metadata.level() <= Level::Warn
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let message = format!(
            "{} {} [{}] - {}\n",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        );

        if let Some(file) = LOG_FILE.lock().as_mut() {
            let _ = file.write_all(message.as_bytes());
            let _ = file.flush();
        }

        if *LOG_TO_STDOUT.lock() {
            print!("{message}");
        }
    }

    fn flush(&self) {}
}

/// Install the logger. A second call returns an error from the `log`
/// facade, which callers are free to ignore.
pub fn init() -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug))
}

pub fn enable_logging() {
    *LOGGING_ENABLED.lock() = true;
}

pub fn disable_logging() {
    *LOGGING_ENABLED.lock() = false;
}

pub fn set_log_to_stdout(enabled: bool) {
    *LOG_TO_STDOUT.lock() = enabled;
}

/// Append log output to the given file.
pub fn set_log_file(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    *LOG_FILE.lock() = Some(file);
    Ok(())
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}
