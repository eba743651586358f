//! Simulation tick source.
//!
//! Replacement policies timestamp metadata on insertion and access but never
//! own time themselves. They read it from a [`Clock`] supplied at construction,
//! which the surrounding cache model advances as simulation progresses.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Simulation time in ticks.
///
/// Tick `0` is reserved: metadata carrying it is treated as invalid or never
/// touched, so live timestamps should start at `1`.
pub type Tick = u64;

/// Source of the current simulation tick.
///
/// Implementations must be monotonically non-decreasing between calls.
pub trait Clock: Send + Sync {
    /// Returns the current tick.
    fn now(&self) -> Tick;
}

/// Shared, monotonic tick counter.
///
/// Clones share the same underlying counter, so the cache model can keep one
/// handle to advance time while each policy holds another to read it.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    tick: Arc<AtomicU64>,
}

impl SimClock {
    /// Creates a clock starting at tick `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock starting at `tick`.
    pub fn starting_at(tick: Tick) -> Self {
        Self {
            tick: Arc::new(AtomicU64::new(tick)),
        }
    }

    /// Advances the clock by `delta` ticks and returns the new tick.
    ///
    /// Saturates at [`Tick::MAX`] instead of wrapping.
    pub fn advance(&self, delta: Tick) -> Tick {
        let prev = self
            .tick
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |t| {
                Some(t.saturating_add(delta))
            })
            .unwrap_or_else(|t| t);
        prev.saturating_add(delta)
    }

    /// Moves the clock forward to `tick` and returns the resulting tick.
    ///
    /// Time never runs backwards: if `tick` is behind the current value the
    /// clock is left unchanged and the current value is returned.
    pub fn set(&self, tick: Tick) -> Tick {
        self.tick.fetch_max(tick, Ordering::AcqRel).max(tick)
    }

    /// Returns a type-erased handle suitable for handing to a policy.
    pub fn shared(&self) -> Arc<dyn Clock> {
        Arc::new(self.clone())
    }
}

impl Clock for SimClock {
    #[inline]
    fn now(&self) -> Tick {
        self.tick.load(Ordering::Acquire)
    }
}
