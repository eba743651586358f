//! Run-time policy selection.
//!
//! The typed policies tie their metadata type to the policy at compile time.
//! A cache model that picks its policy from configuration cannot name that
//! type up front, so [`Policy`] and [`ReplData`] close the family into two
//! matching enums. Handing a policy metadata of another variant is a caller
//! bug and panics.

use std::sync::Arc;

use tracing::debug;

use super::{
    CfarPolicy, CfarReplData, FreqPolicy, FreqReplData, LruPolicy, LruReplData, ReplacementPolicy,
};
use crate::cache::ReplaceableEntry;
use crate::common::Clock;
use crate::config::{PolicyConfig, ReplacementPolicy as PolicyType};

/// Per-slot metadata for any member of the policy family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplData {
    /// LRU metadata.
    Lru(LruReplData),
    /// CFAR metadata.
    Cfar(CfarReplData),
    /// Frequency metadata.
    FreqRp(FreqReplData),
}

impl ReplData {
    /// Policy this metadata belongs to.
    pub const fn kind(&self) -> PolicyType {
        match self {
            Self::Lru(_) => PolicyType::Lru,
            Self::Cfar(_) => PolicyType::Cfar,
            Self::FreqRp(_) => PolicyType::FreqRp,
        }
    }
}

impl ReplaceableEntry for ReplData {
    type Data = Self;

    #[inline]
    fn replacement_data(&self) -> &Self {
        self
    }
}

/// A replacement policy chosen at run time.
#[derive(Debug)]
pub enum Policy {
    /// Least Recently Used.
    Lru(LruPolicy),
    /// Clean-First-Aware LRU.
    Cfar(CfarPolicy),
    /// LFU with FIFO tie-break.
    FreqRp(FreqPolicy),
}

impl Policy {
    /// Builds the policy named by `config`.
    pub fn from_config(config: &PolicyConfig, clock: Arc<dyn Clock>) -> Self {
        debug!(policy = %config.policy, "building replacement policy");
        match config.policy {
            PolicyType::Lru => Self::Lru(LruPolicy::new(clock)),
            PolicyType::Cfar => Self::Cfar(CfarPolicy::new(clock)),
            PolicyType::FreqRp => Self::FreqRp(FreqPolicy::new(clock)),
        }
    }

    /// Which family member this is.
    pub const fn kind(&self) -> PolicyType {
        match self {
            Self::Lru(_) => PolicyType::Lru,
            Self::Cfar(_) => PolicyType::Cfar,
            Self::FreqRp(_) => PolicyType::FreqRp,
        }
    }

    #[cold]
    #[track_caller]
    fn mismatch(&self, data: &ReplData) -> ! {
        panic!(
            "{} policy handed {} replacement data",
            self.kind(),
            data.kind()
        )
    }
}

impl ReplacementPolicy for Policy {
    type Data = ReplData;

    fn instantiate_entry(&self) -> ReplData {
        match self {
            Self::Lru(p) => ReplData::Lru(p.instantiate_entry()),
            Self::Cfar(p) => ReplData::Cfar(p.instantiate_entry()),
            Self::FreqRp(p) => ReplData::FreqRp(p.instantiate_entry()),
        }
    }

    fn invalidate(&self, data: &mut ReplData) {
        match (self, data) {
            (Self::Lru(p), ReplData::Lru(d)) => p.invalidate(d),
            (Self::Cfar(p), ReplData::Cfar(d)) => p.invalidate(d),
            (Self::FreqRp(p), ReplData::FreqRp(d)) => p.invalidate(d),
            (_, d) => self.mismatch(d),
        }
    }

    fn touch(&self, data: &mut ReplData) {
        match (self, data) {
            (Self::Lru(p), ReplData::Lru(d)) => p.touch(d),
            (Self::Cfar(p), ReplData::Cfar(d)) => p.touch(d),
            (Self::FreqRp(p), ReplData::FreqRp(d)) => p.touch(d),
            (_, d) => self.mismatch(d),
        }
    }

    fn reset(&self, data: &mut ReplData) {
        match (self, data) {
            (Self::Lru(p), ReplData::Lru(d)) => p.reset(d),
            (Self::Cfar(p), ReplData::Cfar(d)) => p.reset(d),
            (Self::FreqRp(p), ReplData::FreqRp(d)) => p.reset(d),
            (_, d) => self.mismatch(d),
        }
    }

    fn mark_dirty(&self, data: &mut ReplData) {
        match (self, data) {
            (Self::Cfar(p), ReplData::Cfar(d)) => p.mark_dirty(d),
            (Self::Lru(_), ReplData::Lru(_)) | (Self::FreqRp(_), ReplData::FreqRp(_)) => {}
            (_, d) => self.mismatch(d),
        }
    }

    fn clear_dirty(&self, data: &mut ReplData) {
        match (self, data) {
            (Self::Cfar(p), ReplData::Cfar(d)) => p.clear_dirty(d),
            (Self::Lru(_), ReplData::Lru(_)) | (Self::FreqRp(_), ReplData::FreqRp(_)) => {}
            (_, d) => self.mismatch(d),
        }
    }

    /// # Panics
    ///
    /// Panics if `candidates` is empty or any candidate carries metadata of a
    /// different policy.
    fn get_victim<'a, E>(&self, candidates: &[&'a E]) -> &'a E
    where
        E: ReplaceableEntry<Data = ReplData> + ?Sized,
    {
        let idx = match self {
            Self::Lru(_) => LruPolicy::victim_index(candidates, |c| match c.replacement_data() {
                ReplData::Lru(d) => d,
                other => self.mismatch(other),
            }),
            Self::Cfar(_) => CfarPolicy::victim_index(candidates, |c| match c.replacement_data() {
                ReplData::Cfar(d) => d,
                other => self.mismatch(other),
            }),
            Self::FreqRp(_) => {
                FreqPolicy::victim_index(candidates, |c| match c.replacement_data() {
                    ReplData::FreqRp(d) => d,
                    other => self.mismatch(other),
                })
            }
        };
        candidates[idx]
    }
}
