// plughost — command-line option registry and parser

pub mod config;
pub mod cli;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use cli::args::{find_option, parse_args, parse_command_line};
pub use cli::error::{OptionError, SettingsError};
pub use cli::help::print_program_options;
pub use cli::option::{ArgumentType, OptionDescriptor, OptionId, ProgramOption, ProgramOptions};
