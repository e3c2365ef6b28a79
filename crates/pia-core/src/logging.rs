//! Logging init: append to a file under the XDG state dir, or fall back to
//! stderr when that file cannot be opened.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Where log lines ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Filter used when `RUST_LOG` is unset. Each `-v` widens it.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info,pia=debug",
        1 => "debug",
        _ => "trace",
    }
}

fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)))
}

/// Log file location: `~/.local/state/pia/pia.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pia")?;
    Ok(xdg_dirs.get_state_home().join("pia.log"))
}

/// Writer that is the log file, or stderr if the handle cannot be cloned.
enum FileOrStderr {
    File(fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

fn open_log_file() -> Result<(fs::File, PathBuf)> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;
    Ok((file, path))
}

/// Installs the global subscriber. Terminal output stays clean for the
/// form surface, so logs go to the state file unless it is unusable.
pub fn init_logging(verbose: u8) -> LogTarget {
    let (writer, target) = match open_log_file() {
        Ok((file, path)) => (
            BoxMakeWriter::new(FileMakeWriter(file)),
            LogTarget::File(path),
        ),
        Err(err) => {
            eprintln!("pia: logging to stderr ({err:#})");
            (BoxMakeWriter::new(io::stderr), LogTarget::Stderr)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    if let LogTarget::File(path) = &target {
        tracing::info!("pia logging initialized at {}", path.display());
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_widen_with_verbosity() {
        assert_eq!(default_filter(0), "info,pia=debug");
        assert_eq!(default_filter(1), "debug");
        assert_eq!(default_filter(5), "trace");
    }

    #[test]
    fn log_file_name() {
        if let Ok(path) = log_file_path() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("pia.log"));
        }
    }
}
