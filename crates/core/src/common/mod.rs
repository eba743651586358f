//! Common types shared by every replacement policy.
//!
//! 1. **Time:** The [`Tick`] type, the [`Clock`] trait policies read, and
//!    [`SimClock`], a shared monotonic counter.
//! 2. **Error Handling:** [`ConfigError`] for configuration parsing.

/// Tick type and clock sources.
pub mod clock;

/// Error types.
pub mod error;

pub use clock::{Clock, SimClock, Tick};
pub use error::ConfigError;
