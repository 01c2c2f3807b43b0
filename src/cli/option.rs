//! The option catalog: every command-line option the host understands.
//!
//! A catalog ([`ProgramOptions`]) is an ordered, fixed-size list of
//! [`ProgramOption`] records. Each record sits at the position given by its
//! `index`, so lookup by index is a plain slice access and iteration always
//! happens in index order. That order matters: help text is printed in it,
//! and when two options share a short-form character the lower index wins.
//!
//! The built-in catalog is keyed by [`OptionId`]. Custom catalogs (used by
//! tests and by embedders with their own option sets) are built from a list
//! of [`OptionDescriptor`]s.

use crate::cli::arg_utils::read_u32_from_str;
use crate::cli::error::{OptionError, SettingsError};

// ── Argument policy ───────────────────────────────────────────────────────────

/// Whether the token following an option is consumed as its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentType {
    /// Never consumes a following token.
    None,
    /// Consumes the next token only if it is a plain value.
    Optional,
    /// Must be followed by a plain value.
    Required,
}

impl ArgumentType {
    /// Converts a numeric policy code (0 = none, 1 = optional, 2 = required).
    ///
    /// Any other code is a catalog-authoring bug and yields
    /// [`OptionError::InternalConfiguration`].
    pub fn from_code(code: u8) -> Result<Self, OptionError> {
        match code {
            0 => Ok(ArgumentType::None),
            1 => Ok(ArgumentType::Optional),
            2 => Ok(ArgumentType::Required),
            other => Err(OptionError::internal(format!("Unknown argument type '{}'", other))),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ArgumentType::None => 0,
            ArgumentType::Optional => 1,
            ArgumentType::Required => 2,
        }
    }
}

// ── Descriptors ───────────────────────────────────────────────────────────────

/// Compile-time description of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub index: usize,
    pub name: &'static str,
    pub help: &'static str,
    pub has_short_form: bool,
    pub argument_type: ArgumentType,
}

impl OptionDescriptor {
    pub const fn new(
        index: usize,
        name: &'static str,
        help: &'static str,
        has_short_form: bool,
        argument_type: ArgumentType,
    ) -> Self {
        OptionDescriptor { index, name, help, has_short_form, argument_type }
    }
}

/// Identifiers of the built-in options. `id as usize` is the catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionId {
    Blocksize = 0,
    Channels,
    ColorLogging,
    DisplayInfo,
    Help,
    InputSource,
    PcmFileNumChannels,
    PcmFileSampleRate,
    Plugin,
    Quiet,
    SampleRate,
    Verbose,
    Version,
}

impl OptionId {
    /// Every built-in option, in index order.
    pub const ALL: [OptionId; 13] = [
        OptionId::Blocksize,
        OptionId::Channels,
        OptionId::ColorLogging,
        OptionId::DisplayInfo,
        OptionId::Help,
        OptionId::InputSource,
        OptionId::PcmFileNumChannels,
        OptionId::PcmFileSampleRate,
        OptionId::Plugin,
        OptionId::Quiet,
        OptionId::SampleRate,
        OptionId::Verbose,
        OptionId::Version,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    /// The built-in descriptor for this option.
    pub const fn descriptor(self) -> OptionDescriptor {
        use ArgumentType::{None, Optional, Required};
        let i = self as usize;
        match self {
            OptionId::Blocksize => OptionDescriptor::new(i, "blocksize", "Blocksize", true, Required),
            OptionId::Channels => {
                OptionDescriptor::new(i, "channels", "Number of channels", true, Required)
            }
            OptionId::ColorLogging => {
                OptionDescriptor::new(i, "color", "Color-coded logging output", false, Optional)
            }
            OptionId::DisplayInfo => OptionDescriptor::new(
                i,
                "display-info",
                "Print information about the plugin(s)",
                false,
                None,
            ),
            OptionId::Help => OptionDescriptor::new(i, "help", "Print help", true, None),
            OptionId::InputSource => OptionDescriptor::new(i, "input", "Input source", true, Required),
            OptionId::PcmFileNumChannels => OptionDescriptor::new(
                i,
                "pcm-file-num-channels",
                "Number of channels to use when reading raw PCM data",
                false,
                Required,
            ),
            OptionId::PcmFileSampleRate => OptionDescriptor::new(
                i,
                "pcm-file-samplerate",
                "Sample rate to use when reading raw PCM data",
                false,
                Required,
            ),
            OptionId::Plugin => {
                OptionDescriptor::new(i, "plugin", "Plugin(s) to process", true, Required)
            }
            OptionId::Quiet => {
                OptionDescriptor::new(i, "quiet", "Only log critical errors", true, None)
            }
            OptionId::SampleRate => {
                OptionDescriptor::new(i, "samplerate", "Set sample rate", true, Required)
            }
            OptionId::Verbose => OptionDescriptor::new(i, "verbose", "Verbose logging", true, None),
            OptionId::Version => OptionDescriptor::new(
                i,
                "version",
                "Print version and copyright information",
                false,
                None,
            ),
        }
    }
}

// ── ProgramOption ─────────────────────────────────────────────────────────────

/// One catalog entry plus the state the parser records for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramOption {
    index: usize,
    name: String,
    help: String,
    has_short_form: bool,
    argument_type: ArgumentType,
    enabled: bool,
    argument: String,
}

impl ProgramOption {
    fn from_descriptor(descriptor: &OptionDescriptor) -> Self {
        ProgramOption {
            index: descriptor.index,
            name: descriptor.name.to_owned(),
            help: descriptor.help.to_owned(),
            has_short_form: descriptor.has_short_form,
            argument_type: descriptor.argument_type,
            enabled: false,
            argument: String::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Canonical long name, without leading dashes.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn has_short_form(&self) -> bool {
        self.has_short_form
    }

    /// The `X` in `-X`: the first character of the name, if this option has
    /// a short form at all.
    pub fn short_form(&self) -> Option<char> {
        if self.has_short_form {
            self.name.chars().next()
        } else {
            None
        }
    }

    pub fn argument_type(&self) -> ArgumentType {
        self.argument_type
    }

    /// `true` once the parser has matched this option.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The most recently consumed argument, or `""` if none was consumed.
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// Reads the argument as an unsigned number (`K`/`M` suffixes allowed).
    ///
    /// Returns `Ok(None)` when no argument was consumed.
    pub fn argument_as_u32(&self) -> Result<Option<u32>, SettingsError> {
        if self.argument.is_empty() {
            return Ok(None);
        }
        match read_u32_from_str(&self.argument) {
            Some((value, "")) => Ok(Some(value)),
            _ => Err(SettingsError::InvalidNumber {
                option: self.name.clone(),
                value: self.argument.clone(),
            }),
        }
    }

    pub(crate) fn mark_enabled(&mut self) {
        self.enabled = true;
    }

    pub(crate) fn set_argument(&mut self, value: &str) {
        self.argument.clear();
        self.argument.push_str(value);
    }
}

// ── ProgramOptions (the catalog) ──────────────────────────────────────────────

/// The complete, ordered option catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramOptions {
    options: Vec<ProgramOption>,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramOptions {
    /// Builds the built-in catalog, one entry per [`OptionId`].
    pub fn new() -> Self {
        let options = OptionId::ALL
            .iter()
            .map(|id| ProgramOption::from_descriptor(&id.descriptor()))
            .collect();
        ProgramOptions { options }
    }

    /// Builds a catalog from `descriptors`, placing each at its declared index.
    ///
    /// Indices must cover `0..descriptors.len()` exactly once each. Duplicate
    /// short-form characters are accepted; lookups resolve them to the lowest
    /// index.
    pub fn from_descriptors(descriptors: &[OptionDescriptor]) -> Result<Self, OptionError> {
        let count = descriptors.len();
        let mut slots: Vec<Option<ProgramOption>> = vec![None; count];

        for descriptor in descriptors {
            let slot = slots.get_mut(descriptor.index).ok_or_else(|| {
                OptionError::internal(format!(
                    "Option '{}' has index {} but the catalog only holds {} options",
                    descriptor.name, descriptor.index, count
                ))
            })?;
            if let Some(existing) = slot {
                return Err(OptionError::internal(format!(
                    "Options '{}' and '{}' both claim index {}",
                    existing.name, descriptor.name, descriptor.index
                )));
            }
            *slot = Some(ProgramOption::from_descriptor(descriptor));
        }

        let options = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| {
                    OptionError::internal(format!("No option declared for index {}", index))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProgramOptions { options })
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Entries in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProgramOption> {
        self.options.iter()
    }

    pub fn by_index(&self, index: usize) -> Option<&ProgramOption> {
        self.options.get(index)
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, ProgramOption> {
        self.options.iter_mut()
    }

    /// Looks up a built-in option.
    ///
    /// Returns `None` for custom catalogs that are smaller than the built-in one.
    pub fn get(&self, id: OptionId) -> Option<&ProgramOption> {
        self.options.get(id.index())
    }

    pub fn get_mut(&mut self, id: OptionId) -> Option<&mut ProgramOption> {
        self.options.get_mut(id.index())
    }

    pub fn is_enabled(&self, id: OptionId) -> bool {
        self.get(id).is_some_and(ProgramOption::is_enabled)
    }

    /// The argument of an enabled option, if one was consumed.
    pub fn argument(&self, id: OptionId) -> Option<&str> {
        self.get(id)
            .filter(|option| option.is_enabled() && !option.argument().is_empty())
            .map(ProgramOption::argument)
    }

    /// Options the parser matched, in index order.
    pub fn enabled(&self) -> impl Iterator<Item = &ProgramOption> {
        self.options.iter().filter(|option| option.is_enabled())
    }
}

impl<'a> IntoIterator for &'a ProgramOptions {
    type Item = &'a ProgramOption;
    type IntoIter = std::slice::Iter<'a, ProgramOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
