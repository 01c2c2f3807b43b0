// Integration tests for cli/settings.rs — reading host settings back out of
// a parsed catalog.

use plughost::cli::settings::{split_plugin_chain, HostSettings};
use plughost::config::{DEFAULT_BLOCKSIZE, DEFAULT_NUM_CHANNELS, DEFAULT_SAMPLE_RATE};
use plughost::{parse_command_line, ProgramOptions, SettingsError};

fn settings(argv: &[&str]) -> Result<HostSettings, SettingsError> {
    let mut options = ProgramOptions::new();
    parse_command_line(&mut options, argv).expect("parse should succeed");
    HostSettings::from_options(&options)
}

#[test]
fn defaults() {
    let s = settings(&["plughost"]).unwrap();
    assert_eq!(s.blocksize, DEFAULT_BLOCKSIZE);
    assert_eq!(s.channels, DEFAULT_NUM_CHANNELS);
    assert_eq!(s.sample_rate, DEFAULT_SAMPLE_RATE);
    assert_eq!(s.input_source, None);
    assert!(s.plugins.is_empty());
    assert!(!s.display_info);
}

#[test]
fn explicit_values() {
    let s = settings(&[
        "plughost", "-b", "1K", "-c", "1", "-s", "96000", "-i", "in.pcm", "-p", "again",
        "--display-info",
    ])
    .unwrap();
    assert_eq!(s.blocksize, 1024);
    assert_eq!(s.channels, 1);
    assert_eq!(s.sample_rate, 96000);
    assert_eq!(s.input_source.as_deref(), Some("in.pcm"));
    assert_eq!(s.plugins, vec!["again".to_string()]);
    assert!(s.display_info);
}

#[test]
fn pcm_overrides() {
    let s = settings(&["plughost", "--pcm-file-samplerate", "22050"]).unwrap();
    assert_eq!(s.sample_rate, DEFAULT_SAMPLE_RATE);
    assert_eq!(s.pcm_sample_rate, 22050);
    assert_eq!(s.pcm_channels, DEFAULT_NUM_CHANNELS);
}

#[test]
fn bad_numbers() {
    assert_eq!(
        settings(&["plughost", "--channels", "two"]).unwrap_err(),
        SettingsError::InvalidNumber { option: "channels".into(), value: "two".into() }
    );
    assert_eq!(
        settings(&["plughost", "-b", "0"]).unwrap_err(),
        SettingsError::Zero { option: "blocksize".into() }
    );
}

#[test]
fn empty_number_is_rejected() {
    assert_eq!(
        settings(&["plughost", "--samplerate", ""]).unwrap_err(),
        SettingsError::InvalidNumber { option: "samplerate".into(), value: String::new() }
    );
}

#[test]
fn plugin_chain_separators() {
    assert_eq!(split_plugin_chain("a,b;c"), vec!["a", "b", "c"]);
    assert!(split_plugin_chain(" , ").is_empty());
}
