// Integration tests for cli/arg_utils.rs — token classification helpers.

use plughost::cli::arg_utils::{classify, is_long_option, is_option_shaped, is_short_option, TokenKind};

#[test]
fn every_two_char_dash_token_is_short() {
    for token in ["-a", "-Z", "-0", "--", "-?"] {
        assert!(is_short_option(token), "{token} should be short");
        assert_eq!(classify(token), TokenKind::Short);
    }
}

#[test]
fn long_requires_double_dash_and_a_name() {
    assert!(is_long_option("--pcm-file-samplerate"));
    assert!(!is_long_option("-pcm"));
    assert!(!is_long_option("--"));
}

#[test]
fn plain_values() {
    for token in ["512", "in.wav", "-", "-44100", "", "a-b"] {
        assert!(!is_option_shaped(token), "{token:?} should be a plain value");
        assert_eq!(classify(token), TokenKind::Value);
    }
}
