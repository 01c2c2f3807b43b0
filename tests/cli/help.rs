// Integration tests for cli/help.rs — option listing, usage and version text.

use pretty_assertions::assert_eq;

use plughost::cli::help::{print_usage, print_version, wrap_for_terminal};
use plughost::config::{HELP_INDENT, TERMINAL_LINE_LENGTH};
use plughost::{print_program_options, ArgumentType, OptionDescriptor, ProgramOptions};

fn render(options: &ProgramOptions) -> String {
    let mut out = Vec::new();
    print_program_options(options, &mut out).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("help text is UTF-8")
}

#[test]
fn builtin_listing() {
    let expected = "  -b, --blocksize (argument)
    Blocksize
  -c, --channels (argument)
    Number of channels
  --color [argument]
    Color-coded logging output
  --display-info
    Print information about the plugin(s)
  -h, --help
    Print help
  -i, --input (argument)
    Input source
  --pcm-file-num-channels (argument)
    Number of channels to use when reading raw PCM data
  --pcm-file-samplerate (argument)
    Sample rate to use when reading raw PCM data
  -p, --plugin (argument)
    Plugin(s) to process
  -q, --quiet
    Only log critical errors
  -s, --samplerate (argument)
    Set sample rate
  -v, --verbose
    Verbose logging
  --version
    Print version and copyright information
";
    assert_eq!(render(&ProgramOptions::new()), expected);
}

#[test]
fn long_help_is_wrapped_under_margin() {
    const LONG: &str = "Reads the input file in small blocks and hands every block to each \
                        plugin in the chain before writing the processed audio back out";
    let options = ProgramOptions::from_descriptors(&[OptionDescriptor::new(
        0,
        "process",
        LONG,
        false,
        ArgumentType::None,
    )])
    .unwrap();
    let text = render(&options);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("  --process"));
    let help: Vec<&str> = lines.collect();
    assert!(help.len() > 1);
    for line in &help {
        assert!(line.starts_with("    "));
        assert!(!line[HELP_INDENT..].starts_with(' '));
        assert!(line.chars().count() <= TERMINAL_LINE_LENGTH);
    }
    let rejoined: Vec<&str> = help.iter().map(|line| line.trim_start()).collect();
    assert_eq!(rejoined.join(" "), LONG);
}

#[test]
fn empty_help_prints_header_only() {
    let options = ProgramOptions::from_descriptors(&[OptionDescriptor::new(
        0,
        "bare",
        "",
        true,
        ArgumentType::Optional,
    )])
    .unwrap();
    assert_eq!(render(&options), "  -b, --bare [argument]\n");
}

#[test]
fn wrap_keeps_words_intact() {
    assert_eq!(wrap_for_terminal("one two three", 0, 7), "one two\nthree");
}

#[test]
fn usage_starts_with_program_name() {
    let mut out = Vec::new();
    print_usage("plughost", &ProgramOptions::new(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Usage: plughost [options]\n\nOptions:\n  -b, --blocksize"));
}

#[test]
fn version_mentions_copyright() {
    let mut out = Vec::new();
    print_version(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(env!("CARGO_PKG_VERSION")));
    assert!(text.contains("Copyright"));
}
