//! Tracing setup: human-readable events on stderr, plus a plain log file
//! attached once the working directory exists.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Layer, Registry};

/// File name of the run log inside the log directory.
pub const LOG_FILE: &str = "application.log";

type FileLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Handle to the file layer slot of the installed subscriber. Empty until
/// [`FileLog::attach`] is called.
pub struct FileLog {
    handle: reload::Handle<Option<FileLayer>, Registry>,
}

impl FileLog {
    /// Starts appending events, without colour, to `<log_dir>/application.log`.
    /// The returned guard flushes the file when dropped and must live until
    /// the program exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or the subscriber
    /// is gone.
    pub fn attach(&self, log_dir: &Path) -> Result<WorkerGuard> {
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(LOG_FILE)
            .build(log_dir)
            .with_context(|| format!("Failed to open log file in {}", log_dir.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer: FileLayer = fmt::layer().with_writer(writer).with_ansi(false).boxed();
        self.handle
            .modify(|slot| *slot = Some(layer))
            .context("Failed to attach log file")?;
        Ok(guard)
    }
}

/// Builds the level filter. `RUST_LOG` wins over `level` when set.
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter directive.
pub fn filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level `{level}`")),
    }
}

/// Installs the global subscriber writing to stderr, with an empty file
/// layer slot.
///
/// # Errors
///
/// Returns an error if `level` is invalid or a subscriber is already set.
pub fn init(level: &str) -> Result<FileLog> {
    let (file, handle) = reload::Layer::new(None::<FileLayer>);
    let stderr = fmt::layer().with_writer(std::io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(file)
        .with(stderr)
        .with(filter(level)?)
        .try_init()
        .context("Failed to install tracing subscriber")?;
    Ok(FileLog { handle })
}
