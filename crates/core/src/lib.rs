//! Cache replacement policy library.
//!
//! This crate implements the victim-selection half of a set-associative cache
//! model with the following:
//! 1. **Policies:** LRU, Clean-First-Aware LRU (CFAR), and LFU with FIFO
//!    tie-break (FreqRP), each keeping one metadata value per cache slot.
//! 2. **Boundary:** The [`ReplaceableEntry`] trait cache slots implement, and
//!    the [`Clock`] policies read timestamps from.
//! 3. **Configuration:** Run-time policy selection via [`PolicyConfig`] and
//!    the [`Policy`] enum.
//!
//! The cache model keeps ownership of its tag array, set indexing, and the
//! metadata attached to each slot. It calls into a policy at four points:
//! insertion (`reset`), hit (`touch`), eviction (`invalidate`), and
//! write-back state changes (`mark_dirty` / `clear_dirty`). When a set is full
//! it asks `get_victim` to choose among the candidate ways.
//!
//! # Examples
//!
//! ```
//! use replacement_core::{CfarPolicy, ReplacementPolicy, SimClock};
//!
//! let clock = SimClock::starting_at(1);
//! let policy = CfarPolicy::new(clock.shared());
//!
//! let mut ways = [policy.instantiate_entry(); 2];
//! policy.reset(&mut ways[0]);
//! policy.mark_dirty(&mut ways[0]);
//! let _ = clock.advance(10);
//! policy.reset(&mut ways[1]);
//!
//! // The clean way goes first even though the dirty one is older.
//! let victim = policy.get_victim(&[&ways[0], &ways[1]]);
//! assert!(std::ptr::eq(victim, &ways[1]));
//! ```

/// Cache-side boundary types and the replacement policies.
pub mod cache;
/// Clock and error types shared by all policies.
pub mod common;
/// Policy selection configuration.
pub mod config;

pub use crate::cache::ReplaceableEntry;
pub use crate::cache::policies::{
    CfarPolicy, CfarReplData, FreqPolicy, FreqReplData, LruPolicy, LruReplData, Policy, ReplData,
    ReplacementPolicy,
};
pub use crate::common::{Clock, ConfigError, SimClock, Tick};
pub use crate::config::PolicyConfig;
