// config.rs — Compile-time configuration constants.
//
// Nothing here is read from the environment or from a file; the host and the
// help renderer use these values directly.

// Width of the terminal that help text is wrapped for.
// Lines never exceed this many characters, indentation included, unless a
// single word is longer than the available space.
pub const TERMINAL_LINE_LENGTH: usize = 80;

// Indentation applied to every line of an option's help text.
pub const HELP_INDENT: usize = 4;

// Indentation applied to the `-x, --name` line of each option.
pub const OPTION_INDENT: usize = 2;

// Processing block size in sample frames, used when `--blocksize` is absent.
pub const DEFAULT_BLOCKSIZE: u32 = 512;

// Number of audio channels, used when `--channels` is absent.
pub const DEFAULT_NUM_CHANNELS: u32 = 2;

// Sample rate in Hz, used when `--samplerate` is absent.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

// Separators accepted between plugin names in a `--plugin` chain.
pub const PLUGIN_CHAIN_SEPARATORS: &[char] = &[',', ';'];
