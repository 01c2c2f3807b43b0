// cli/help.rs — Help and version text.
//
// Functions:
//   wrap_for_terminal      → fixed-width word wrapping with a left margin
//   print_program_options  → one entry per catalog option, in index order
//   print_usage            → usage line followed by the option listing
//   print_version          → version banner and copyright

use std::io::{self, Write};

use crate::cli::constants::{version_banner, COPYRIGHT, LICENSE_NOTICE};
use crate::cli::option::{ArgumentType, ProgramOption, ProgramOptions};
use crate::config::{HELP_INDENT, OPTION_INDENT, TERMINAL_LINE_LENGTH};

// ── Word wrapping ─────────────────────────────────────────────────────────────

/// Wraps `text` into lines of at most `width` characters, each prefixed by
/// `indent` spaces. Words are never split; a word longer than the available
/// space gets a line of its own. Runs of whitespace collapse to one space.
///
/// Returns the lines joined by `\n`, without a trailing newline. Empty or
/// whitespace-only text yields an empty string.
pub fn wrap_for_terminal(text: &str, indent: usize, width: usize) -> String {
    let margin = " ".repeat(indent);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && indent + line_len + 1 + word_len > width {
            lines.push(format!("{}{}", margin, line));
            line.clear();
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if line_len > 0 {
        lines.push(format!("{}{}", margin, line));
    }

    lines.join("\n")
}

// ── Option listing ────────────────────────────────────────────────────────────

fn write_option<W: Write>(option: &ProgramOption, out: &mut W) -> io::Result<()> {
    write!(out, "{:width$}", "", width = OPTION_INDENT)?;
    if let Some(short) = option.short_form() {
        write!(out, "-{}, ", short)?;
    }
    // Every option has a long form.
    write!(out, "--{}", option.name())?;
    match option.argument_type() {
        ArgumentType::Required => write!(out, " (argument)")?,
        ArgumentType::Optional => write!(out, " [argument]")?,
        ArgumentType::None => {}
    }
    writeln!(out)?;

    let help = wrap_for_terminal(option.help(), HELP_INDENT, TERMINAL_LINE_LENGTH);
    if !help.is_empty() {
        writeln!(out, "{}", help)?;
    }
    Ok(())
}

/// Writes every option in `options`, in index order.
///
/// Each option gets a header line (`  -b, --blocksize (argument)`) followed
/// by its help text, wrapped to [`TERMINAL_LINE_LENGTH`] with a
/// [`HELP_INDENT`]-space margin.
pub fn print_program_options<W: Write>(options: &ProgramOptions, out: &mut W) -> io::Result<()> {
    for option in options {
        write_option(option, out)?;
    }
    Ok(())
}

/// Writes the usage line for `program` followed by the option listing.
pub fn print_usage<W: Write>(program: &str, options: &ProgramOptions, out: &mut W) -> io::Result<()> {
    writeln!(out, "Usage: {} [options]", program)?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    print_program_options(options, out)
}

/// Writes the version banner and copyright notice.
pub fn print_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", version_banner())?;
    writeln!(out, "{}", COPYRIGHT)?;
    writeln!(out, "{}", LICENSE_NOTICE)
}
