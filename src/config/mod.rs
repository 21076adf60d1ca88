//! Card configuration with YAML schema and validation.
//!
//! The timeline and decoration tiers are fixed. Only the knobs that make a
//! card reproducible or guard its reveal loops are configurable:
//!
//! ```yaml
//! seed: 42
//! reveal:
//!   iteration_cap: 100
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{CardError, CardResult};

/// Default bound on marker removals per reveal.
pub const DEFAULT_ITERATION_CAP: usize = 100;

/// Top-level card configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CardConfig {
    /// RNG seed; drawn from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Reveal settings.
    #[validate(nested)]
    #[serde(default)]
    pub reveal: RevealConfig,
}

impl CardConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> CardResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> CardResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> CardResult<String> {
        serde_yaml::to_string(self).map_err(|e| CardError::serialization(e.to_string()))
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> CardConfigBuilder {
        CardConfigBuilder::default()
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct CardConfigBuilder {
    seed: Option<u64>,
    iteration_cap: Option<usize>,
}

impl CardConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reveal iteration cap.
    #[must_use]
    pub const fn iteration_cap(mut self, cap: usize) -> Self {
        self.iteration_cap = Some(cap);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> CardConfig {
        let mut config = CardConfig::default();

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        if let Some(cap) = self.iteration_cap {
            config.reveal.iteration_cap = cap;
        }

        config
    }
}

/// Reveal loop settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RevealConfig {
    /// Maximum markers cleared by a single reveal.
    #[validate(range(min = 1, max = 10_000))]
    #[serde(default = "default_iteration_cap")]
    pub iteration_cap: usize,
}

const fn default_iteration_cap() -> usize {
    DEFAULT_ITERATION_CAP
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            iteration_cap: default_iteration_cap(),
        }
    }
}
