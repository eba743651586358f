//! Clean-First-Aware Replacement Policy Tests.
//!
//! Verifies the two-phase victim selection (clean LRU first, plain LRU when
//! every candidate is dirty) and the priority bit's lifecycle.

use pretty_assertions::assert_eq;
use replacement_core::{CfarPolicy, CfarReplData, ReplacementPolicy, Tick};
use rstest::rstest;

use crate::common::{Block, ManualClock, candidates, cfar_ways, init_tracing};

const CLEAN: bool = false;
const DIRTY: bool = true;

// ══════════════════════════════════════════════════════════
// 1. Victim Selection
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::all_clean_plain_lru(&[(30, CLEAN), (10, CLEAN), (20, CLEAN)], 1)]
#[case::clean_beats_older_dirty(&[(5, DIRTY), (90, CLEAN)], 1)]
#[case::oldest_clean_among_mixed(&[(100, CLEAN), (50, DIRTY), (10, CLEAN)], 2)]
#[case::all_dirty_falls_back(&[(50, DIRTY), (10, DIRTY), (30, DIRTY)], 1)]
#[case::clean_tie_goes_to_first(&[(1, DIRTY), (8, CLEAN), (8, CLEAN)], 1)]
#[case::dirty_tie_goes_to_first(&[(8, DIRTY), (8, DIRTY)], 0)]
fn victim_selection(#[case] layout: &[(Tick, bool)], #[case] expected: u64) {
    init_tracing();
    let clock = ManualClock::new();
    let policy = CfarPolicy::new(clock.shared());
    let ways = cfar_ways(&policy, &clock, layout);

    assert_eq!(policy.get_victim(&candidates(&ways)).tag, expected);
}

/// A(100, clean), B(50, dirty), C(10, clean) evicts C. Once A and C are
/// dirtied too, every candidate is dirty and plain LRU still picks C.
#[test]
fn clean_preference_then_all_dirty_fallback() {
    let clock = ManualClock::new();
    let policy = CfarPolicy::new(clock.shared());
    let mut ways = cfar_ways(&policy, &clock, &[(100, CLEAN), (50, DIRTY), (10, CLEAN)]);

    let victim = policy.get_victim(&candidates(&ways));
    assert_eq!(victim.tag, 2);
    assert!(!victim.dirty);

    policy.mark_dirty(&mut ways[0].repl);
    policy.mark_dirty(&mut ways[2].repl);
    assert!(ways.iter().all(|w| w.repl.priority()));

    assert_eq!(policy.get_victim(&candidates(&ways)).tag, 2);
}

/// Cleaning the only clean-eligible way after a write-back makes it the
/// preferred victim again.
#[test]
fn clear_dirty_restores_preference() {
    let clock = ManualClock::new();
    let policy = CfarPolicy::new(clock.shared());
    let mut ways = cfar_ways(&policy, &clock, &[(10, DIRTY), (20, DIRTY), (30, CLEAN)]);
    assert_eq!(policy.get_victim(&candidates(&ways)).tag, 2);

    policy.clear_dirty(&mut ways[1].repl);
    assert!(!ways[1].repl.priority());
    assert_eq!(policy.get_victim(&candidates(&ways)).tag, 1);
}

// ══════════════════════════════════════════════════════════
// 2. Lifecycle
// ══════════════════════════════════════════════════════════

#[test]
fn instantiate_is_neutral() {
    let policy = CfarPolicy::new(ManualClock::new().shared());
    let data = policy.instantiate_entry();
    assert_eq!(data, CfarReplData::default());
    assert_eq!(data.last_touch_tick(), 0);
    assert!(!data.priority());
}

/// Invalidation zeroes the tick and clears the priority bit, so the way is
/// picked ahead of every live clean way.
#[test]
fn invalidated_way_evicted_before_live_clean_ways() {
    let clock = ManualClock::new();
    let policy = CfarPolicy::new(clock.shared());
    let mut ways = cfar_ways(&policy, &clock, &[(3, CLEAN), (4, CLEAN), (90, DIRTY)]);

    policy.invalidate(&mut ways[2].repl);
    assert_eq!(ways[2].repl.last_touch_tick(), 0);
    assert!(!ways[2].repl.priority());
    assert_eq!(policy.get_victim(&candidates(&ways)).tag, 2);
}

/// Hits refresh recency without changing write-back state.
#[test]
fn touch_refreshes_tick_only() {
    let clock = ManualClock::new();
    let policy = CfarPolicy::new(clock.shared());
    let mut ways = cfar_ways(&policy, &clock, &[(10, DIRTY), (20, DIRTY)]);

    clock.set(30);
    policy.touch(&mut ways[0].repl);
    assert_eq!(ways[0].repl.last_touch_tick(), 30);
    assert!(ways[0].repl.priority());
    assert_eq!(policy.get_victim(&candidates(&ways)).tag, 1);
}

/// Reinsertion starts clean regardless of the previous block's state.
#[test]
fn reset_after_dirty_starts_clean() {
    let clock = ManualClock::new();
    let policy = CfarPolicy::new(clock.shared());
    let mut ways = cfar_ways(&policy, &clock, &[(10, DIRTY), (20, DIRTY)]);

    clock.set(40);
    policy.reset(&mut ways[0].repl);
    assert!(!ways[0].repl.priority());
    assert_eq!(ways[0].repl.last_touch_tick(), 40);
    assert_eq!(policy.get_victim(&candidates(&ways)).tag, 0);
}

/// Repeated queries over unchanged metadata agree.
#[test]
fn victim_selection_is_repeatable() {
    let clock = ManualClock::new();
    let policy = CfarPolicy::new(clock.shared());
    let ways = cfar_ways(&policy, &clock, &[(7, DIRTY), (7, CLEAN), (7, CLEAN)]);
    let cands = candidates(&ways);

    let first = policy.get_victim(&cands);
    let second = policy.get_victim(&cands);
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.tag, 1);
}

#[test]
#[should_panic(expected = "at least one candidate")]
fn empty_candidate_set_panics() {
    let policy = CfarPolicy::new(ManualClock::new().shared());
    let none: [&Block<CfarReplData>; 0] = [];
    let _ = policy.get_victim(&none);
}
