//! Command-line parsing against a [`ProgramOptions`] catalog.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_command_line`] (takes an explicit slice, suitable for
//! unit-testing). Both walk argv once, left to right, skipping `argv[0]`.
//!
//! Every token in the main scan must name an option, either as `-X` (the
//! option's first letter, for options with a short form) or as `--name`.
//! After a match the option's [`ArgumentType`] decides whether the next
//! token is taken as its argument:
//!
//! | Policy     | Next token is a plain value | Next token is option-shaped | No next token |
//! |------------|-----------------------------|-----------------------------|---------------|
//! | `None`     | left for the main scan      | left for the main scan      | ok            |
//! | `Optional` | consumed                    | left for the main scan      | ok            |
//! | `Required` | consumed                    | `InvalidRequiredArgument`   | `MissingRequiredArgument` |
//!
//! Parsing stops at the first error. Options matched before that point stay
//! enabled, so a failed catalog should be discarded. Exactly one
//! `tracing::error!` event describing the failure is emitted before the
//! error is returned.
//!
//! Combined short flags (`-qv`) and `--name=value` are not supported; both
//! are reported as unrecognised options.

use tracing::{debug, error};

use crate::cli::arg_utils::{is_long_option, is_option_shaped, is_short_option};
use crate::cli::error::OptionError;
use crate::cli::option::{ArgumentType, ProgramOption, ProgramOptions};

// ── Matching ──────────────────────────────────────────────────────────────────

/// What a token asks for: a short-form character or a long name.
#[derive(Clone, Copy)]
enum Lookup<'t> {
    Short(char),
    Long(&'t str),
}

impl<'t> Lookup<'t> {
    fn from_token(token: &'t str) -> Option<Self> {
        if is_short_option(token) {
            token.chars().nth(1).map(Lookup::Short)
        } else if is_long_option(token) {
            Some(Lookup::Long(&token[2..]))
        } else {
            None
        }
    }

    fn matches(self, option: &ProgramOption) -> bool {
        match self {
            Lookup::Short(short) => option.short_form() == Some(short),
            Lookup::Long(name) => option.name() == name,
        }
    }
}

/// Finds the catalog entry named by `token`, or `None`.
///
/// `-c` matches the lowest-index option with a short form whose name starts
/// with `c`. `--name` matches the lowest-index option whose name equals
/// `name` exactly (case-sensitive). Plain values never match.
pub fn find_option<'a>(options: &'a ProgramOptions, token: &str) -> Option<&'a ProgramOption> {
    let lookup = Lookup::from_token(token)?;
    options.iter().find(|option| lookup.matches(option))
}

fn find_option_mut<'a>(
    options: &'a mut ProgramOptions,
    token: &str,
) -> Option<&'a mut ProgramOption> {
    let lookup = Lookup::from_token(token)?;
    options.iter_mut().find(|option| lookup.matches(option))
}

// ── Argument consumption ──────────────────────────────────────────────────────

/// Applies `option`'s argument policy to the token after `*cursor`.
///
/// On success `*cursor` points at the last token consumed for this option
/// (unchanged when nothing was consumed).
fn fill_option_argument<S: AsRef<str>>(
    option: &mut ProgramOption,
    cursor: &mut usize,
    argv: &[S],
) -> Result<(), OptionError> {
    let next: Option<&str> = argv.get(*cursor + 1).map(|token| token.as_ref());

    match option.argument_type() {
        ArgumentType::None => Ok(()),
        ArgumentType::Optional => {
            if let Some(value) = next.filter(|token| !is_option_shaped(token)) {
                option.set_argument(value);
                *cursor += 1;
            }
            Ok(())
        }
        ArgumentType::Required => match next {
            None => Err(OptionError::MissingRequiredArgument { option: option.name().to_owned() }),
            Some(token) if is_option_shaped(token) => Err(OptionError::InvalidRequiredArgument {
                option: option.name().to_owned(),
                token: token.to_owned(),
            }),
            Some(value) => {
                option.set_argument(value);
                *cursor += 1;
                Ok(())
            }
        },
    }
}

// ── Top-level loop ────────────────────────────────────────────────────────────

/// Parses `argv` into `options`. `argv[0]` is the program name and is skipped.
///
/// Matched options are marked enabled and receive any argument their policy
/// consumes; matching the same option again keeps it enabled and replaces
/// the stored argument if a new one is consumed. On failure the error is
/// logged once at error level and returned.
pub fn parse_command_line<S: AsRef<str>>(
    options: &mut ProgramOptions,
    argv: &[S],
) -> Result<(), OptionError> {
    let result = scan(options, argv);
    if let Err(ref err) = result {
        error!("{}", err);
    }
    result
}

/// Parses `std::env::args()` into `options`.
pub fn parse_args(options: &mut ProgramOptions) -> Result<(), OptionError> {
    let argv: Vec<String> = std::env::args().collect();
    parse_command_line(options, &argv)
}

fn scan<S: AsRef<str>>(options: &mut ProgramOptions, argv: &[S]) -> Result<(), OptionError> {
    let mut cursor = 1usize;
    while cursor < argv.len() {
        let token = argv[cursor].as_ref();

        let option = find_option_mut(options, token)
            .ok_or_else(|| OptionError::UnrecognizedOption { token: token.to_owned() })?;

        option.mark_enabled();
        fill_option_argument(option, &mut cursor, argv)?;
        debug!(option = option.name(), argument = option.argument(), "matched option");

        cursor += 1;
    }
    Ok(())
}
