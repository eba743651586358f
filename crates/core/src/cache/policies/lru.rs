//! Least Recently Used (LRU) Replacement Policy.
//!
//! Each slot records the tick of its last access or insertion. The victim is
//! the candidate with the oldest tick. Invalidated slots carry tick `0` and are
//! therefore picked before any live slot.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()` / `reset()` / `invalidate()`: O(1)
//!   - `get_victim()`: O(W) where W is the number of candidates
//! - **Space Complexity:** one `Tick` per slot
//! - **Best Case:** Workloads with good temporal locality
//! - **Worst Case:** Scanning patterns larger than cache capacity (thrashing)

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::{ReplacementPolicy, assert_candidates, first_min_by_key};
use crate::cache::ReplaceableEntry;
use crate::common::{Clock, Tick};

/// Per-slot LRU metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LruReplData {
    last_touch_tick: Tick,
}

impl LruReplData {
    /// Tick of the last access or insertion; `0` if invalid.
    #[inline]
    pub const fn last_touch_tick(&self) -> Tick {
        self.last_touch_tick
    }
}

impl ReplaceableEntry for LruReplData {
    type Data = Self;

    #[inline]
    fn replacement_data(&self) -> &Self {
        self
    }
}

/// LRU Policy state.
pub struct LruPolicy {
    clock: Arc<dyn Clock>,
}

impl LruPolicy {
    /// Creates a new LRU policy reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Index of the least recently touched candidate.
    pub(crate) fn victim_index<T, F>(candidates: &[&T], data: F) -> usize
    where
        T: ?Sized,
        F: Fn(&T) -> &LruReplData,
    {
        assert_candidates(candidates);
        let idx = lru_index(candidates, |c| data(c).last_touch_tick);
        trace!(policy = "lru", candidates = candidates.len(), victim = idx, "selected victim");
        idx
    }
}

/// First candidate with the smallest tick.
///
/// Shared with the clean-first policy, whose all-dirty fallback is plain LRU.
pub(crate) fn lru_index<T, F>(candidates: &[&T], tick: F) -> usize
where
    T: ?Sized,
    F: Fn(&T) -> Tick,
{
    first_min_by_key(candidates, |c| Some(tick(c))).unwrap_or(0)
}

impl fmt::Debug for LruPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruPolicy").finish_non_exhaustive()
    }
}

impl ReplacementPolicy for LruPolicy {
    type Data = LruReplData;

    fn instantiate_entry(&self) -> LruReplData {
        LruReplData::default()
    }

    fn invalidate(&self, data: &mut LruReplData) {
        data.last_touch_tick = 0;
    }

    fn touch(&self, data: &mut LruReplData) {
        data.last_touch_tick = self.clock.now();
    }

    fn reset(&self, data: &mut LruReplData) {
        data.last_touch_tick = self.clock.now();
    }

    /// Returns the candidate with the oldest last-touch tick.
    fn get_victim<'a, E>(&self, candidates: &[&'a E]) -> &'a E
    where
        E: ReplaceableEntry<Data = LruReplData> + ?Sized,
    {
        candidates[Self::victim_index(candidates, E::replacement_data)]
    }
}
