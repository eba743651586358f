//! Clock Access Tests.
//!
//! Policies read the clock only when stamping metadata (`reset`, and `touch`
//! for the recency policies). Invalidation, dirty hooks, and victim selection
//! must never consult it. A mock clock with exact call counts enforces this;
//! expectations are checked when the policy drops its handle.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use replacement_core::{CfarPolicy, FreqPolicy, LruPolicy, ReplacementPolicy};

use crate::common::MockTickSource;

fn clock_expecting(calls: usize, tick: u64) -> Arc<MockTickSource> {
    let mut clock = MockTickSource::new();
    let _ = clock.expect_now().times(calls).return_const(tick);
    Arc::new(clock)
}

#[test]
fn cfar_reads_clock_on_reset_and_touch_only() {
    let policy = CfarPolicy::new(clock_expecting(2, 77));
    let mut a = policy.instantiate_entry();
    let b = policy.instantiate_entry();

    policy.reset(&mut a);
    policy.touch(&mut a);
    policy.mark_dirty(&mut a);
    policy.clear_dirty(&mut a);
    let _ = policy.get_victim(&[&a, &b]);
    policy.invalidate(&mut a);

    assert_eq!(a, policy.instantiate_entry());
}

#[test]
fn lru_reads_clock_on_reset_and_touch_only() {
    let policy = LruPolicy::new(clock_expecting(2, 5));
    let mut a = policy.instantiate_entry();

    policy.reset(&mut a);
    policy.touch(&mut a);
    assert_eq!(a.last_touch_tick(), 5);
    let _ = policy.get_victim(&[&a]);
    policy.invalidate(&mut a);
}

/// Hits only bump the counter, so the frequency policy reads time once per
/// insertion.
#[test]
fn freq_reads_clock_on_reset_only() {
    let policy = FreqPolicy::new(clock_expecting(1, 9));
    let mut a = policy.instantiate_entry();

    policy.reset(&mut a);
    policy.touch(&mut a);
    policy.touch(&mut a);
    let _ = policy.get_victim(&[&a]);
    assert_eq!(a.ref_count(), 3);
    assert_eq!(a.tick_inserted(), 9);
    policy.invalidate(&mut a);
}
