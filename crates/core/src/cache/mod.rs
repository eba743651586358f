//! Cache-side plumbing for replacement decisions.
//!
//! The cache model owns its tag array and set indexing. This module defines
//! only what crosses the boundary into a policy: the [`ReplaceableEntry`]
//! trait implemented by slots, and the policies themselves.

/// The slot-to-metadata boundary.
pub mod entry;

/// Replacement policy implementations (LRU, CFAR, FreqRP).
pub mod policies;

pub use entry::ReplaceableEntry;
