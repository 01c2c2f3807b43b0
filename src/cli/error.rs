//! Error types for option parsing and for reading settings back out of a
//! parsed catalog.
//!
//! [`OptionError`] covers everything that can stop a parse. Three variants
//! are caused by the user's command line; [`OptionError::InternalConfiguration`]
//! is caused by a badly authored catalog and is reported separately (see
//! [`OptionError::is_internal`]).

use thiserror::Error;

/// The first malformed input found while building a catalog or parsing argv.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// A token matched neither a short nor a long option in the catalog.
    #[error("Invalid option '{token}'")]
    UnrecognizedOption { token: String },

    /// A `Required` option was the last token on the command line.
    #[error("Option '{option}' requires an argument, but none was given")]
    MissingRequiredArgument { option: String },

    /// A `Required` option was followed by another option-shaped token.
    #[error("Option '{option}' requires an argument, but '{token}' is not valid")]
    InvalidRequiredArgument { option: String, token: String },

    /// The catalog itself is malformed: unknown argument policy code, or
    /// descriptor indices that do not form a dense `[0, N)` range.
    #[error("Internal error: {message}")]
    InternalConfiguration { message: String },
}

impl OptionError {
    /// `true` for catalog-authoring bugs, `false` for bad user input.
    pub fn is_internal(&self) -> bool {
        matches!(self, OptionError::InternalConfiguration { .. })
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        OptionError::InternalConfiguration { message: message.into() }
    }
}

/// A parsed option carried an argument the host cannot use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Option '{option}' expects a number, but '{value}' was given")]
    InvalidNumber { option: String, value: String },

    #[error("Option '{option}' must be greater than zero")]
    Zero { option: String },
}
