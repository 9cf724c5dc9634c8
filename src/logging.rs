//! Log subscriber setup
//!
//! Events are written as `LEVEL message fields` with no timestamps, targets or
//! colour. Where they go depends on the front end:
//!
//! - `--log FILE`: appended to FILE, in any mode
//! - plain shell and batch runs: stderr
//! - TUI without `--log`: nowhere, the alternate screen owns the terminal

use crate::config::{Config, Mode};
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Install the global subscriber described by `config`
///
/// Call once, before the calculator starts. Returns an error only when the log
/// file cannot be opened.
pub fn init(config: &Config) -> io::Result<()> {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(config.log_level.into());

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let layer = tracing_subscriber::fmt::layer()
            .without_time()
            .with_target(false)
            .with_ansi(false)
            .compact()
            .with_writer(Mutex::new(file))
            .with_filter(filter);
        // A subscriber installed earlier (e.g. by a test harness) wins
        let _ = Registry::default().with(layer).try_init();
        return Ok(());
    }

    if config.mode == Mode::Tui {
        return Ok(());
    }

    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .compact()
        .with_writer(io::stderr)
        .with_filter(filter);
    let _ = Registry::default().with(layer).try_init();
    Ok(())
}
