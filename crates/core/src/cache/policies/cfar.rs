//! Clean-First-Aware Replacement (CFAR) Policy.
//!
//! An LRU variant that spends one extra bit per slot to steer eviction away
//! from dirty blocks. The cache model reports write-back state through
//! `mark_dirty` / `clear_dirty`; the policy never infers it.
//!
//! Victim selection runs in two phases:
//!
//! 1. Among candidates whose priority bit is clear, evict the least recently
//!    touched one.
//! 2. If every candidate is dirty, fall back to plain LRU over the whole set.
//!
//! A clean candidate always beats a dirty one, however stale the dirty one is.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()` / `reset()` / `invalidate()` / dirty hooks: O(1)
//!   - `get_victim()`: O(W), at most two passes over the candidates
//! - **Space Complexity:** one `Tick` and one bit per slot

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::lru::lru_index;
use super::{ReplacementPolicy, assert_candidates, first_min_by_key};
use crate::cache::ReplaceableEntry;
use crate::common::{Clock, Tick};

/// Per-slot CFAR metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CfarReplData {
    last_touch_tick: Tick,
    /// `false` = clean-friendly, `true` = dirty-penalised.
    priority: bool,
}

impl CfarReplData {
    /// Tick of the last access or insertion; `0` if invalid.
    #[inline]
    pub const fn last_touch_tick(&self) -> Tick {
        self.last_touch_tick
    }

    /// Whether the slot is currently penalised as dirty.
    #[inline]
    pub const fn priority(&self) -> bool {
        self.priority
    }
}

impl ReplaceableEntry for CfarReplData {
    type Data = Self;

    #[inline]
    fn replacement_data(&self) -> &Self {
        self
    }
}

/// CFAR Policy state.
pub struct CfarPolicy {
    clock: Arc<dyn Clock>,
}

impl CfarPolicy {
    /// Creates a new CFAR policy reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub(crate) fn victim_index<T, F>(candidates: &[&T], data: F) -> usize
    where
        T: ?Sized,
        F: Fn(&T) -> &CfarReplData,
    {
        assert_candidates(candidates);

        let clean = first_min_by_key(candidates, |c| {
            let d = data(c);
            (!d.priority).then_some(d.last_touch_tick)
        });
        let (idx, fallback) = match clean {
            Some(idx) => (idx, false),
            None => (lru_index(candidates, |c| data(c).last_touch_tick), true),
        };

        trace!(
            policy = "cfar",
            candidates = candidates.len(),
            victim = idx,
            fallback,
            "selected victim"
        );
        idx
    }
}

impl fmt::Debug for CfarPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CfarPolicy").finish_non_exhaustive()
    }
}

impl ReplacementPolicy for CfarPolicy {
    type Data = CfarReplData;

    fn instantiate_entry(&self) -> CfarReplData {
        CfarReplData::default()
    }

    /// Zeroes the tick and clears the priority bit.
    fn invalidate(&self, data: &mut CfarReplData) {
        data.last_touch_tick = 0;
        data.priority = false;
    }

    /// Stamps the current tick. The priority bit is left alone.
    fn touch(&self, data: &mut CfarReplData) {
        data.last_touch_tick = self.clock.now();
    }

    fn reset(&self, data: &mut CfarReplData) {
        data.last_touch_tick = self.clock.now();
        data.priority = false;
    }

    fn mark_dirty(&self, data: &mut CfarReplData) {
        data.priority = true;
    }

    fn clear_dirty(&self, data: &mut CfarReplData) {
        data.priority = false;
    }

    fn get_victim<'a, E>(&self, candidates: &[&'a E]) -> &'a E
    where
        E: ReplaceableEntry<Data = CfarReplData> + ?Sized,
    {
        candidates[Self::victim_index(candidates, E::replacement_data)]
    }
}
