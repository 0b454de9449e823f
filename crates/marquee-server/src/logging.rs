//! Tracing subscriber setup
//!
//! Logs go to stdout, or to a file through a non-blocking appender when
//! `MARQUEE_LOG_FILE` is set. `RUST_LOG` overrides the default `info` filter.

use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; hold it for the life
/// of the process.
pub fn init(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let (result, guard) = match log_file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let result = builder
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer)
                .try_init();
            (result, Some(guard))
        }
        None => (builder.try_init(), None),
    };

    result.map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(guard)
}

/// Appending, never-rotated file writer backed by a worker thread
pub fn file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_name = path.file_name().unwrap_or(OsStr::new("marquee.log"));
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(file_appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_writer_creates_and_appends() {
        let dir = std::env::temp_dir().join(format!("marquee-log-{}", std::process::id()));
        let path = dir.join("nested").join("server.log");
        let _ = std::fs::remove_dir_all(&dir);

        let (mut writer, guard) = file_writer(&path).unwrap();
        writer.write_all(b"first line\n").unwrap();
        drop(guard);

        let (mut writer, guard) = file_writer(&path).unwrap();
        writer.write_all(b"second line\n").unwrap();
        drop(guard);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
