//! Typed host settings read back from a parsed catalog.
//!
//! The parser only records strings. [`HostSettings::from_options`] turns the
//! audio-related options into numbers and lists, filling in defaults from
//! [`crate::config`] for options that were not given.

use crate::cli::error::SettingsError;
use crate::cli::option::{OptionId, ProgramOptions};
use crate::config::{
    DEFAULT_BLOCKSIZE, DEFAULT_NUM_CHANNELS, DEFAULT_SAMPLE_RATE, PLUGIN_CHAIN_SEPARATORS,
};

/// Everything the host needs to set up processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSettings {
    /// Sample frames per processing block.
    pub blocksize: u32,
    pub channels: u32,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count for raw PCM input; falls back to `channels`.
    pub pcm_channels: u32,
    /// Sample rate for raw PCM input; falls back to `sample_rate`.
    pub pcm_sample_rate: u32,
    pub input_source: Option<String>,
    /// Plugin names in processing order.
    pub plugins: Vec<String>,
    pub display_info: bool,
}

impl Default for HostSettings {
    fn default() -> Self {
        HostSettings {
            blocksize: DEFAULT_BLOCKSIZE,
            channels: DEFAULT_NUM_CHANNELS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            pcm_channels: DEFAULT_NUM_CHANNELS,
            pcm_sample_rate: DEFAULT_SAMPLE_RATE,
            input_source: None,
            plugins: Vec::new(),
            display_info: false,
        }
    }
}

/// Reads a positive number from `id`, or `None` if the option was not given.
fn positive(options: &ProgramOptions, id: OptionId) -> Result<Option<u32>, SettingsError> {
    let Some(option) = options.get(id).filter(|option| option.is_enabled()) else {
        return Ok(None);
    };
    match option.argument_as_u32()? {
        None => Err(SettingsError::InvalidNumber {
            option: option.name().to_owned(),
            value: String::new(),
        }),
        Some(0) => Err(SettingsError::Zero { option: option.name().to_owned() }),
        value => Ok(value),
    }
}

/// Splits a `--plugin` argument into individual plugin names.
pub fn split_plugin_chain(chain: &str) -> Vec<String> {
    chain
        .split(PLUGIN_CHAIN_SEPARATORS)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

impl HostSettings {
    pub fn from_options(options: &ProgramOptions) -> Result<Self, SettingsError> {
        let defaults = HostSettings::default();

        let blocksize = positive(options, OptionId::Blocksize)?.unwrap_or(defaults.blocksize);
        let channels = positive(options, OptionId::Channels)?.unwrap_or(defaults.channels);
        let sample_rate = positive(options, OptionId::SampleRate)?.unwrap_or(defaults.sample_rate);
        let pcm_channels = positive(options, OptionId::PcmFileNumChannels)?.unwrap_or(channels);
        let pcm_sample_rate =
            positive(options, OptionId::PcmFileSampleRate)?.unwrap_or(sample_rate);

        Ok(HostSettings {
            blocksize,
            channels,
            sample_rate,
            pcm_channels,
            pcm_sample_rate,
            input_source: options.argument(OptionId::InputSource).map(str::to_owned),
            plugins: options
                .argument(OptionId::Plugin)
                .map(split_plugin_chain)
                .unwrap_or_default(),
            display_info: options.is_enabled(OptionId::DisplayInfo),
        })
    }
}
