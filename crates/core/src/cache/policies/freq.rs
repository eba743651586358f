//! Frequency-Based Replacement Policy (LFU with FIFO tie-break).
//!
//! Each slot counts references since its block was inserted, with the
//! insertion itself counting as the first. The victim is the candidate with
//! the fewest references; among equally cold candidates the one inserted
//! longest ago goes first.
//!
//! Only `reset` reads the clock. Hits bump the counter and nothing else.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()` / `reset()` / `invalidate()`: O(1)
//!   - `get_victim()`: O(W), a single pass
//! - **Space Complexity:** one counter and one `Tick` per slot
//! - **Best Case:** Stable hot sets mixed with one-shot traffic
//! - **Worst Case:** Phase changes, where formerly hot blocks linger

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::{ReplacementPolicy, assert_candidates, first_min_by_key};
use crate::cache::ReplaceableEntry;
use crate::common::{Clock, Tick};

/// Per-slot frequency metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreqReplData {
    /// References since the last (re)insertion.
    ref_count: u32,
    tick_inserted: Tick,
}

impl FreqReplData {
    /// References since the last insertion; `0` if invalid.
    #[inline]
    pub const fn ref_count(&self) -> u32 {
        self.ref_count
    }

    /// Tick at which the current block was inserted; `0` if invalid.
    #[inline]
    pub const fn tick_inserted(&self) -> Tick {
        self.tick_inserted
    }

    /// Eviction order key: fewest references, then oldest insertion.
    #[inline]
    const fn key(&self) -> (u32, Tick) {
        (self.ref_count, self.tick_inserted)
    }
}

impl ReplaceableEntry for FreqReplData {
    type Data = Self;

    #[inline]
    fn replacement_data(&self) -> &Self {
        self
    }
}

/// Frequency Policy state.
pub struct FreqPolicy {
    clock: Arc<dyn Clock>,
}

impl FreqPolicy {
    /// Creates a new frequency policy reading insertion time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub(crate) fn victim_index<T, F>(candidates: &[&T], data: F) -> usize
    where
        T: ?Sized,
        F: Fn(&T) -> &FreqReplData,
    {
        assert_candidates(candidates);
        let idx = first_min_by_key(candidates, |c| Some(data(c).key())).unwrap_or(0);
        trace!(policy = "freq", candidates = candidates.len(), victim = idx, "selected victim");
        idx
    }
}

impl fmt::Debug for FreqPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreqPolicy").finish_non_exhaustive()
    }
}

impl ReplacementPolicy for FreqPolicy {
    type Data = FreqReplData;

    fn instantiate_entry(&self) -> FreqReplData {
        FreqReplData::default()
    }

    fn invalidate(&self, data: &mut FreqReplData) {
        data.ref_count = 0;
        data.tick_inserted = 0;
    }

    /// Counts one more reference, saturating at `u32::MAX`.
    fn touch(&self, data: &mut FreqReplData) {
        data.ref_count = data.ref_count.saturating_add(1);
    }

    fn reset(&self, data: &mut FreqReplData) {
        data.ref_count = 1;
        data.tick_inserted = self.clock.now();
    }

    fn get_victim<'a, E>(&self, candidates: &[&'a E]) -> &'a E
    where
        E: ReplaceableEntry<Data = FreqReplData> + ?Sized,
    {
        candidates[Self::victim_index(candidates, E::replacement_data)]
    }
}
