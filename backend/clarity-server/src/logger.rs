//! Process-wide logging through fern.
//!
//! Every sink writes the same line shape:
//! `[<rfc3339 time> - <LEVEL>] <message> [<file>:<line>]`.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Display;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, Record, info};

/// Initialize the global logger.
///
/// `log_file` = None logs to stdout; `colored` is ignored for files.
pub fn initialize(
    log_level: clarity_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    // Plain output for files and non-TTY (systemd, docker logs)
    let colors = (colored && log_file.is_none()).then(level_colors);
    let output: fern::Output = match log_file {
        Some(ref path) => open_log_file(path)?.into(),
        None => std::io::stdout().into(),
    };

    let sink = Dispatch::new()
        .format(move |out, _message, record| {
            let now = SystemTime::now();
            let line = match &colors {
                Some(colors) => render_line(now, colors.color(record.level()), record),
                None => render_line(now, record.level(), record),
            };
            out.finish(format_args!("{line}"))
        })
        .chain(output);

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}

/// One log line; `level` is the plain or colored level label
pub(crate) fn render_line(at: SystemTime, level: impl Display, record: &Record<'_>) -> String {
    format!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(at),
        level,
        record.args(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    )
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// Appends, creating the file and its directory on first use
fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ServerError::Logger {
            message: format!("Failed to create log directory {}: {}", parent.display(), e),
        })?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}
