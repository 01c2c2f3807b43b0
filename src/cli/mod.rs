//! Command-line interface for the `plughost` binary.
//!
//! This module organises the full option pipeline:
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings (name, version, copyright). |
//! | [`error`]     | `OptionError` parse failures and `SettingsError`. |
//! | [`option`]    | The option catalog: `OptionId`, `ProgramOption`, `ProgramOptions`. |
//! | [`arg_utils`] | Token classification, path basename, numeric argument reading. |
//! | [`args`]      | Option matching, argument consumption and the parse loop. |
//! | [`help`]      | Word-wrapped option listing, usage and version text. |
//! | [`logging`]   | `tracing` subscriber setup, reconfigured from parsed options. |
//! | [`settings`]  | `HostSettings` — typed values read back from a parsed catalog. |
//!
//! Typical call sequence: `init_logging` → `ProgramOptions::new` →
//! `parse_args` → `LoggingHandle::apply` → `HostSettings::from_options`.

pub mod constants;
pub mod error;
pub mod arg_utils;
pub mod option;
pub mod args;
pub mod help;
pub mod logging;
pub mod settings;
