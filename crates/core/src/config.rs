//! Configuration for replacement-policy selection.
//!
//! The policies themselves take no parameters beyond a clock. Configuration
//! only decides which policy a cache level runs:
//! 1. **Enum:** [`ReplacementPolicy`] names the policy family member.
//! 2. **Structure:** [`PolicyConfig`] is the deserialisable per-cache block.
//!
//! Configuration is supplied as JSON by the host simulator, or use
//! `PolicyConfig::default()` for plain LRU.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::ConfigError;

/// Cache replacement policy algorithms.
///
/// Specifies the algorithm used to select which cache line to evict
/// when a new line must be installed in a full cache set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Least Recently Used replacement policy.
    ///
    /// Evicts the cache line that was accessed least recently.
    #[default]
    #[serde(alias = "Lru", alias = "LRURP")]
    Lru,
    /// Clean-First-Aware replacement policy.
    ///
    /// LRU that evicts any clean line before any dirty line, falling
    /// back to plain LRU when the whole set is dirty.
    #[serde(alias = "Cfar", alias = "CFARRP")]
    Cfar,
    /// Frequency-based replacement policy.
    ///
    /// Evicts the least frequently used line; ties go to the line
    /// inserted longest ago.
    #[serde(alias = "FreqRp", alias = "FreqRP", alias = "Freq", alias = "FREQ")]
    FreqRp,
}

impl ReplacementPolicy {
    /// Canonical configuration name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lru => "LRU",
            Self::Cfar => "CFAR",
            Self::FreqRp => "FREQRP",
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplacementPolicy {
    type Err = ConfigError;

    /// Parses a policy name, ignoring ASCII case.
    ///
    /// Accepts the canonical names plus the `*RP` spellings (`LRURP`,
    /// `CFARRP`) and `FREQ`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LRU" | "LRURP" => Ok(Self::Lru),
            "CFAR" | "CFARRP" => Ok(Self::Cfar),
            "FREQRP" | "FREQ" => Ok(Self::FreqRp),
            _ => Err(ConfigError::UnknownPolicy(s.to_owned())),
        }
    }
}

/// Replacement configuration for one cache level.
///
/// # Examples
///
/// ```
/// use replacement_core::config::{PolicyConfig, ReplacementPolicy};
///
/// let config = PolicyConfig::from_json(r#"{ "policy": "CFAR" }"#).unwrap();
/// assert_eq!(config.policy, ReplacementPolicy::Cfar);
///
/// let config = PolicyConfig::from_json("{}").unwrap();
/// assert_eq!(config.policy, ReplacementPolicy::Lru);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PolicyConfig {
    /// Replacement policy
    #[serde(default)]
    pub policy: ReplacementPolicy,
}

impl PolicyConfig {
    /// Creates a configuration selecting `policy`.
    pub const fn new(policy: ReplacementPolicy) -> Self {
        Self { policy }
    }

    /// Deserialises a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed or names an
    /// unknown policy.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
