use crate::error::{AptupError, Result};
use jiff::Zoned;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Severity of one operation-log entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

/// Append-only operation log, opened once at startup and passed by
/// reference into every component. Entries are
/// `[YYYY-MM-DD HH:MM:SS] LEVEL - message` lines; the file is closed when
/// the handle is dropped. A failed write is swallowed so the log can never
/// take down a running command.
pub struct Logbook {
    file: File,
}

impl Logbook {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AptupError::LogFile(format!(
                    "Failed to create log directory '{}': {e}",
                    parent.display()
                ))
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                AptupError::LogFile(format!("Failed to open '{}': {e}", path.display()))
            })?;

        Ok(Self { file })
    }

    pub fn info(&self, message: &str) {
        self.write(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.write(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.write(Level::Error, message);
    }

    fn write(&self, level: Level, message: &str) {
        let stamp = Zoned::now().strftime("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(&self.file, "[{stamp}] {} - {message}", level.label());
    }
}
