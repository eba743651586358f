//! Cache Replacement Policies.
//!
//! Each policy keeps one metadata value per cache slot and picks a victim by
//! comparing the metadata of the candidates it is handed.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, by last-touch tick.
//! - `Cfar`: Clean-First-Aware LRU. Prefers clean candidates over dirty ones.
//! - `Freq`: Least Frequently Used with oldest-insertion tie-break.
//!
//! [`Policy`] wraps all three for callers that select the policy at run time.

/// Clean-First-Aware Replacement policy.
pub mod cfar;

/// Run-time selectable policy family.
pub mod dispatch;

/// Frequency-based (LFU + FIFO tie-break) replacement policy.
pub mod freq;

/// Least Recently Used replacement policy.
pub mod lru;

pub use cfar::{CfarPolicy, CfarReplData};
pub use dispatch::{Policy, ReplData};
pub use freq::{FreqPolicy, FreqReplData};
pub use lru::{LruPolicy, LruReplData};

use super::ReplaceableEntry;

/// Trait for cache replacement policies.
///
/// Defines the lifecycle hooks a cache model calls on one slot's metadata and
/// the victim query it runs over a set of candidates. Hooks take `&self`;
/// exclusive access to the metadata is what serialises updates to a slot.
pub trait ReplacementPolicy: Send + Sync {
    /// Per-slot metadata owned by each cache slot.
    type Data;

    /// Creates metadata in its neutral state for a newly tracked slot.
    fn instantiate_entry(&self) -> Self::Data;

    /// Makes the slot the most likely next victim.
    ///
    /// Called when the slot's contents are evicted or explicitly cleared.
    fn invalidate(&self, data: &mut Self::Data);

    /// Records an access hit on the slot.
    fn touch(&self, data: &mut Self::Data);

    /// Reinitialises metadata for a block just inserted into the slot.
    fn reset(&self, data: &mut Self::Data);

    /// Informs the policy that the slot's block became dirty.
    ///
    /// Policies that ignore write-back state leave this as a no-op.
    fn mark_dirty(&self, _data: &mut Self::Data) {}

    /// Informs the policy that the slot's block was written back.
    fn clear_dirty(&self, _data: &mut Self::Data) {}

    /// Selects the victim among `candidates`.
    ///
    /// Reads metadata only. Equal keys resolve to the earliest candidate in
    /// slice order, so identical inputs always give the same victim.
    ///
    /// # Panics
    ///
    /// Panics if `candidates` is empty.
    fn get_victim<'a, E>(&self, candidates: &[&'a E]) -> &'a E
    where
        E: ReplaceableEntry<Data = Self::Data> + ?Sized;
}

/// Fails fast on an empty candidate set.
#[inline]
#[track_caller]
pub(crate) fn assert_candidates<T: ?Sized>(candidates: &[&T]) {
    assert!(
        !candidates.is_empty(),
        "replacement requires at least one candidate"
    );
}

/// Index of the first candidate with the smallest key.
///
/// Candidates for which `key` yields `None` are skipped. Returns `None` when
/// no candidate is eligible.
pub(crate) fn first_min_by_key<T, K, F>(candidates: &[&T], mut key: F) -> Option<usize>
where
    T: ?Sized,
    K: Ord,
    F: FnMut(&T) -> Option<K>,
{
    let mut best: Option<(usize, K)> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        let Some(k) = key(*candidate) else {
            continue;
        };
        if best.as_ref().is_none_or(|(_, best_key)| k < *best_key) {
            best = Some((idx, k));
        }
    }
    best.map(|(idx, _)| idx)
}
