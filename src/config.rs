//! Command-line configuration
//!
//! [`Cli`] is the raw clap surface; [`Config`] is what the rest of the binary
//! reads. The `RPNCALC_LOG` environment variable supplies the log level when
//! `--log-level` is absent.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Interactive Reverse Polish Notation calculator
#[derive(Parser, Debug)]
#[command(name = "rpncalc", version, about, long_about = None)]
pub struct Cli {
    /// Line-mode shell on stdin/stdout instead of the TUI
    #[arg(long, conflicts_with = "batch")]
    pub plain: bool,

    /// Evaluate every line of FILE (or stdin) as one batch and exit
    #[arg(long, value_name = "FILE")]
    pub batch: Option<Option<PathBuf>>,

    /// Append log events to FILE
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Log verbosity
    #[arg(
        long,
        env = "RPNCALC_LOG",
        value_enum,
        ignore_case = true,
        default_value = "warn"
    )]
    pub log_level: LogLevel,
}

/// Which front end to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Full-screen terminal UI
    Tui,
    /// Prompt-per-line shell
    Plain,
    /// Evaluate a file (or stdin when `None`) as one batch
    Batch(Option<PathBuf>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub log_file: Option<PathBuf>,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::Tui,
            log_file: None,
            log_level: LogLevel::Warn,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let mode = match (cli.batch, cli.plain) {
            (Some(file), _) => Mode::Batch(file),
            (None, true) => Mode::Plain,
            (None, false) => Mode::Tui,
        };
        Config {
            mode,
            log_file: cli.log,
            log_level: cli.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        let argv = std::iter::once("rpncalc").chain(args.iter().copied());
        Cli::try_parse_from(argv).map(Config::from)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_tui() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.mode, Mode::Tui);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_batch_with_and_without_file() {
        assert_eq!(
            parse(&["--batch", "exprs.txt"]).unwrap().mode,
            Mode::Batch(Some(PathBuf::from("exprs.txt")))
        );
        assert_eq!(parse(&["--batch"]).unwrap().mode, Mode::Batch(None));

        let config = parse(&["--batch", "--log-level", "debug"]).unwrap();
        assert_eq!(config.mode, Mode::Batch(None));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_log_options() {
        let config = parse(&["--plain", "--log", "calc.log", "--log-level", "TRACE"]).unwrap();
        assert_eq!(config.mode, Mode::Plain);
        assert_eq!(config.log_file, Some(PathBuf::from("calc.log")));
        assert_eq!(config.log_level, LogLevel::Trace);

        let config = parse(&["--log-level", "warning"]).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_log_level_reads_environment() {
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_id() == "log_level")
            .unwrap();
        assert_eq!(arg.get_env(), Some(OsStr::new("RPNCALC_LOG")));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse(&["--frobnicate"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&["--log"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            parse(&["--log-level", "loud"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            parse(&["--plain", "--batch"]).unwrap_err().kind(),
            ErrorKind::ArgumentConflict
        );
    }
}
