//! Configuration file handling for the CLI.

use crate::cli::CompareArgs;
use crate::error::{CliError, Result};
use pathcards_comparator::ComparatorConfig;
use pathcards_io::OutputOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration.
///
/// ```toml
/// [comparator]
/// position_tolerance = 1
/// max_candidates = 10000
///
/// [output]
/// detailed_output = false
/// color = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Matching engine settings
    #[serde(default)]
    pub comparator: ComparatorConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Keep per-candidate match details
    #[serde(default)]
    pub detailed_output: bool,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            detailed_output: false,
            color: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file, or defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_toml(&fs::read_to_string(path)?)?,
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string; missing tables and keys keep
    /// their defaults.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.comparator.validate().map_err(CliError::Config)
    }

    /// Comparator settings with command-line overrides applied.
    pub fn comparator_for(&self, args: &CompareArgs) -> ComparatorConfig {
        let mut config = self.comparator.clone();
        if let Some(tolerance) = args.position_tolerance {
            config.position_tolerance = tolerance;
        }
        if let Some(limit) = args.max_candidates {
            config.max_candidates = Some(limit);
        }
        config
    }

    /// Output options with command-line overrides applied.
    pub fn output_for(&self, args: &CompareArgs) -> OutputOptions {
        OutputOptions {
            detailed_output: args.detailed || self.output.detailed_output,
        }
    }
}
