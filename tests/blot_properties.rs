//! Property tests for blot accumulation

use blue_blot::core::config::BlotConfig;
use blue_blot::core::types::EntityId;
use blue_blot::rules::{BlotTracker, GameSession};
use proptest::prelude::*;

/// Session with no active entity; elimination must never fire
struct NoActiveSession;

impl GameSession for NoActiveSession {
    fn active_entity(&self) -> Option<EntityId> {
        None
    }

    fn eliminate(&mut self, entity: EntityId) {
        panic!("eliminated {:?} with no active entity", entity);
    }
}

proptest! {
    /// For any number of hits, the blot count equals floor(hits / 3)
    #[test]
    fn prop_blot_count_is_hits_div_three(total_hits in 0u32..300) {
        let mut tracker = BlotTracker::with_config(BlotConfig::default());
        let mut session = NoActiveSession;
        let entity = EntityId::new();

        for _ in 0..total_hits {
            tracker.record_hit(Some(entity), &mut session);
        }
        prop_assert_eq!(tracker.blot_count(Some(entity)), total_hits / 3);
    }

    /// Interleaving hits between two entities never couples their counters
    #[test]
    fn prop_interleaved_entities_stay_independent(pattern in prop::collection::vec(any::<bool>(), 0..200)) {
        let mut tracker = BlotTracker::with_config(BlotConfig::default());
        let mut session = NoActiveSession;
        let a = EntityId::new();
        let b = EntityId::new();

        let mut a_hits = 0u32;
        let mut b_hits = 0u32;
        for hit_a in pattern {
            if hit_a {
                tracker.record_hit(Some(a), &mut session);
                a_hits += 1;
            } else {
                tracker.record_hit(Some(b), &mut session);
                b_hits += 1;
            }
        }
        prop_assert_eq!(tracker.blot_count(Some(a)), a_hits / 3);
        prop_assert_eq!(tracker.blot_count(Some(b)), b_hits / 3);
    }

    /// A reset at any point erases history; later hits start from zero
    #[test]
    fn prop_reset_erases_history(before in 0u32..50, after in 0u32..50) {
        let mut tracker = BlotTracker::with_config(BlotConfig::default());
        let mut session = NoActiveSession;
        let entity = EntityId::new();

        for _ in 0..before {
            tracker.record_hit(Some(entity), &mut session);
        }
        tracker.reset(Some(entity));

        for _ in 0..after {
            tracker.record_hit(Some(entity), &mut session);
        }
        prop_assert_eq!(tracker.blot_count(Some(entity)), after / 3);
    }

    /// Direct blot additions and hit-driven blots add up
    #[test]
    fn prop_direct_blots_add_to_hit_blots(hits in 0u32..100, direct in 0u32..10) {
        let mut tracker = BlotTracker::with_config(BlotConfig::default());
        let mut session = NoActiveSession;
        let entity = EntityId::new();

        for _ in 0..direct {
            tracker.add_blot(Some(entity));
        }
        for _ in 0..hits {
            tracker.record_hit(Some(entity), &mut session);
        }
        prop_assert_eq!(tracker.blot_count(Some(entity)), direct + hits / 3);
    }
}
