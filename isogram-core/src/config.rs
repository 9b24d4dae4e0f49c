//! Filter configuration

use crate::domain::DuplicatePolicy;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Configuration for a [`WordFilter`](crate::WordFilter)
///
/// Every field has a default, so a TOML document may set any subset:
///
/// ```toml
/// decode_hex_pairs = true
/// duplicates = "keep_all"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Decode two-digit hex tokens (`61` → `a`) before normalization
    pub decode_hex_pairs: bool,
    /// Handling of exact repeats of a kept word
    pub duplicates: DuplicatePolicy,
}

impl FilterConfig {
    /// Create a builder
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }

    /// Parse a configuration from TOML
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct FilterConfigBuilder {
    config: FilterConfig,
}

impl FilterConfigBuilder {
    /// Enable or disable the hex-pair pre-pass
    pub fn decode_hex_pairs(mut self, enabled: bool) -> Self {
        self.config.decode_hex_pairs = enabled;
        self
    }

    /// Set the duplicate policy
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicates = policy;
        self
    }

    /// Build the configuration
    pub fn build(self) -> FilterConfig {
        self.config
    }
}
