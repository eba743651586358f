//! Error definitions.
//!
//! Policy operations themselves cannot fail: an empty candidate set or a
//! policy/metadata mismatch is a caller bug and panics. The only recoverable
//! failures come from turning external configuration into a policy.

use thiserror::Error;

/// Errors raised while parsing replacement-policy configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The policy name did not match any known replacement policy.
    #[error("unknown replacement policy `{0}` (expected one of LRU, CFAR, FREQRP)")]
    UnknownPolicy(String),

    /// The configuration document was not valid JSON or had the wrong shape.
    #[error("malformed policy configuration: {0}")]
    Json(#[from] serde_json::Error),
}
