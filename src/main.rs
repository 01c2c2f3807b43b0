//! Binary entry point for the `plughost` command-line tool.
//!
//! # Control flow
//!
//! 1. [`init_logging`] installs the logger so parse failures are reported.
//! 2. [`parse_args`] fills the option catalog from the command line. On
//!    failure the parser has already logged the reason; we add a hint and
//!    exit with status 1.
//! 3. `--help` and `--version` print their text to stdout and exit 0.
//! 4. Otherwise logging is reconfigured from `--quiet`/`--verbose`/`--color`,
//!    the audio settings are read back and reported.

use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, error, info};

use plughost::cli::arg_utils::last_name_from_path;
use plughost::cli::args::parse_args;
use plughost::cli::help::{print_usage, print_version};
use plughost::cli::logging::init_logging;
use plughost::cli::option::{OptionId, ProgramOptions};
use plughost::cli::settings::HostSettings;

/// Runs the host and returns the process exit code.
fn run() -> anyhow::Result<i32> {
    let logging = init_logging()?;

    let program = std::env::args().next().unwrap_or_default();
    let program = last_name_from_path(&program);

    let mut options = ProgramOptions::new();
    if parse_args(&mut options).is_err() {
        eprintln!("Run '{} --help' to see a list of valid options.", program);
        return Ok(1);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if options.is_enabled(OptionId::Help) {
        print_usage(program, &options, &mut out).context("Failed to print help")?;
        out.flush()?;
        return Ok(0);
    }
    if options.is_enabled(OptionId::Version) {
        print_version(&mut out).context("Failed to print version")?;
        out.flush()?;
        return Ok(0);
    }

    logging.apply(&options)?;
    for option in options.enabled() {
        debug!(option = option.name(), argument = option.argument(), "option enabled");
    }

    let settings = match HostSettings::from_options(&options) {
        Ok(settings) => settings,
        Err(err) => {
            error!("{}", err);
            return Ok(1);
        }
    };

    info!(
        blocksize = settings.blocksize,
        channels = settings.channels,
        sample_rate = settings.sample_rate,
        "audio settings"
    );
    if let Some(input) = &settings.input_source {
        info!(input = input.as_str(), "input source");
    }
    if settings.display_info {
        for (position, plugin) in settings.plugins.iter().enumerate() {
            info!(position, plugin = plugin.as_str(), "plugin");
        }
    }
    Ok(0)
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}: {:#}", plughost::cli::constants::PROGRAM_NAME, err);
            1
        }
    };
    std::process::exit(code);
}
