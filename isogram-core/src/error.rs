//! Filter error types

use thiserror::Error;

/// Errors reported by the word filter
///
/// Character-level oddities (unassigned code points, undecomposable letters,
/// stray symbols) are never errors; they are silently rejected during
/// normalization.
#[derive(Error, Debug)]
pub enum FilterError {
    /// No input text was supplied
    #[error("input text is missing")]
    MissingInput,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration could not be parsed from TOML
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for filter operations
pub type Result<T> = std::result::Result<T, FilterError>;
