//! Logging setup for the host binary.
//!
//! Logging has to be live before the command line is parsed, because the
//! parser reports failures through `tracing`. The options that shape the
//! output (`--quiet`, `--verbose`, `--color`) are only known afterwards, so
//! both the level filter and the stderr formatter are installed behind
//! [`reload`] layers and adjusted by [`LoggingHandle::apply`].

use std::io::{self, IsTerminal};

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, Registry};

use crate::cli::option::{OptionId, ProgramOptions};

type FilterLayer = reload::Layer<LevelFilter, Registry>;
type Filtered = Layered<FilterLayer, Registry>;
type StderrLayer = fmt::Layer<Filtered, DefaultFields, Format, fn() -> io::Stderr>;

/// Level used until the command line says otherwise.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// How `--color` was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// `--color` absent.
    Off,
    /// `--color` without an argument: color when stderr is a terminal.
    Auto,
    /// `--color force`.
    Force,
    /// `--color none`.
    Never,
}

impl ColorMode {
    /// Reads the `--color` option. Unknown arguments fall back to
    /// [`ColorMode::Auto`] with a warning.
    pub fn from_options(options: &ProgramOptions) -> Self {
        if !options.is_enabled(OptionId::ColorLogging) {
            return ColorMode::Off;
        }
        match options.argument(OptionId::ColorLogging) {
            None => ColorMode::Auto,
            Some("force") => ColorMode::Force,
            Some("none") => ColorMode::Never,
            Some(other) => {
                warn!(value = other, "unknown color mode, expected 'force' or 'none'");
                ColorMode::Auto
            }
        }
    }

    pub fn use_ansi(self) -> bool {
        match self {
            ColorMode::Off | ColorMode::Never => false,
            ColorMode::Force => true,
            ColorMode::Auto => io::stderr().is_terminal(),
        }
    }
}

/// Level implied by `--quiet` and `--verbose`. Quiet wins when both are set.
pub fn level_for(options: &ProgramOptions) -> LevelFilter {
    if options.is_enabled(OptionId::Quiet) {
        LevelFilter::ERROR
    } else if options.is_enabled(OptionId::Verbose) {
        LevelFilter::DEBUG
    } else {
        DEFAULT_LEVEL
    }
}

fn stderr_layer(ansi: bool) -> StderrLayer {
    fmt::layer()
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(io::stderr as fn() -> io::Stderr)
}

/// Handles to the reloadable parts of the global subscriber.
pub struct LoggingHandle {
    level: reload::Handle<LevelFilter, Registry>,
    output: reload::Handle<StderrLayer, Filtered>,
}

impl LoggingHandle {
    /// Re-applies level and color according to the parsed `options`.
    pub fn apply(&self, options: &ProgramOptions) -> anyhow::Result<()> {
        let level = level_for(options);
        self.level
            .modify(|filter| *filter = level)
            .context("Failed to update the log level")?;

        let ansi = ColorMode::from_options(options).use_ansi();
        self.output
            .modify(|layer| *layer = stderr_layer(ansi))
            .context("Failed to update the log format")?;
        Ok(())
    }
}

/// Installs the global subscriber: `INFO` and above, plain text on stderr.
pub fn init_logging() -> anyhow::Result<LoggingHandle> {
    let (filter, level) = reload::Layer::new(DEFAULT_LEVEL);
    let (output_layer, output) = reload::Layer::new(stderr_layer(false));
    tracing_subscriber::registry()
        .with(filter)
        .with(output_layer)
        .try_init()
        .context("Failed to install the logger")?;
    Ok(LoggingHandle { level, output })
}
