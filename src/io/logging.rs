//! Tracing subscriber setup for the command-line binary

use indicatif::MultiProgress;
use std::io::Write;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Stderr writer that hides active progress bars while a record is written
///
/// Without a progress display it writes to stderr directly.
#[derive(Debug, Clone, Default)]
pub struct LogWriter {
    progress: Option<MultiProgress>,
}

impl LogWriter {
    /// Writer that suspends `progress` around each write, if given
    pub const fn new(progress: Option<MultiProgress>) -> Self {
        Self { progress }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match &self.progress {
            Some(progress) => progress.suspend(|| std::io::stderr().write(buf)),
            None => std::io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Install a fmt subscriber writing through `writer`
///
/// Directives in `RUST_LOG` are applied on top of `default_level`. Calling this
/// again after a subscriber is installed is a no-op.
pub fn init_logging(default_level: Level, writer: LogWriter) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .try_init();
}
