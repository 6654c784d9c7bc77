//! Configuration for the comparator

use serde::{Deserialize, Serialize};

/// Configuration for matching and classification
///
/// # Examples
///
/// ```
/// use pathcards_comparator::ComparatorConfig;
///
/// let config = ComparatorConfig::default();
/// assert_eq!(config.position_tolerance, 1);
/// assert!(config.max_candidates.is_none());
///
/// let config = ComparatorConfig::strict();
/// assert_eq!(config.position_tolerance, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparatorConfig {
    /// Modification positions within this absolute difference are equal
    /// Default: 1
    #[serde(default = "default_position_tolerance")]
    pub position_tolerance: u32,

    /// Candidate ceiling per inference card; cards over the limit are skipped
    /// Default: no ceiling
    #[serde(default)]
    pub max_candidates: Option<usize>,
}

fn default_position_tolerance() -> u32 {
    1
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            position_tolerance: default_position_tolerance(),
            max_candidates: None,
        }
    }
}

impl ComparatorConfig {
    /// Strict preset: exact positions, bounded fan-out
    pub fn strict() -> Self {
        Self {
            position_tolerance: 0,
            max_candidates: Some(10_000),
        }
    }

    /// Lenient preset: wider position window, no ceiling
    pub fn lenient() -> Self {
        Self {
            position_tolerance: 2,
            max_candidates: None,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_candidates == Some(0) {
            return Err("max_candidates must be greater than 0".to_string());
        }
        Ok(())
    }
}
