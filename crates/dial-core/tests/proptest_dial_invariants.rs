//! Property-based invariant tests for the dial core.
//!
//! Verifies:
//! 1. Wraparound: `current` stays inside `[0, max_index]` for any input stream
//! 2. `increment` from `max_index` lands on 0
//! 3. Forward then backward is the identity
//! 4. Label is always at least three digits and parses back to the position
//! 5. Swipe: sub-threshold drags never step; each super-threshold move steps once
//! 6. Content lookup never panics and matches the list at in-range indices

use dial_core::gesture::SwipeTracker;
use dial_core::{
    DialConfig, DialController, DialInput, DialState, DialView, EpisodeList, LOADING_PLACEHOLDER,
    RebindPolicy, Step, render_label,
};
use proptest::prelude::*;

#[derive(Default)]
struct NullView;

impl DialView for NullView {
    fn set_label(&mut self, _label: &str) {}
    fn set_content(&mut self, _html: &str) {}
}

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![Just(Step::Forward), Just(Step::Backward)]
}

fn arb_input() -> impl Strategy<Value = DialInput> {
    prop_oneof![
        Just(DialInput::Activate),
        Just(DialInput::TouchEnd),
        (-500.0f64..500.0, -500.0f64..500.0).prop_map(|(x, y)| DialInput::TouchStart { x, y }),
        (-500.0f64..500.0, -500.0f64..500.0).prop_map(|(x, y)| DialInput::TouchMove { x, y }),
    ]
}

proptest! {
    #[test]
    fn steps_stay_in_bounds(max_index in 0u32..400, steps in prop::collection::vec(arb_step(), 0..300)) {
        let mut dial = DialState::new(max_index);
        for step in steps {
            dial.apply(step);
            prop_assert!(dial.current() <= max_index);
        }
    }

    #[test]
    fn increment_from_bound_wraps_to_zero(max_index in 0u32..10_000) {
        let mut dial = DialState::new(max_index);
        for _ in 0..max_index {
            dial.increment();
        }
        prop_assert_eq!(dial.current(), max_index);
        prop_assert_eq!(dial.increment(), 0);
    }

    #[test]
    fn forward_then_backward_is_identity(max_index in 0u32..400, offset in 0u32..400) {
        let mut dial = DialState::new(max_index);
        for _ in 0..offset {
            dial.increment();
        }
        let before = dial.current();
        dial.apply(Step::Forward);
        dial.apply(Step::Backward);
        prop_assert_eq!(dial.current(), before);
    }

    #[test]
    fn label_roundtrips(n in 0u32..100_000) {
        let label = render_label(n);
        prop_assert!(label.len() >= 3);
        prop_assert_eq!(label.parse::<u32>().unwrap(), n);
    }

    #[test]
    fn sub_threshold_drags_never_step(start in -500.0f64..500.0, moves in prop::collection::vec(-7.5f64..=7.5, 0..50)) {
        let mut swipe = SwipeTracker::default();
        swipe.start(start, 0.0);
        for dx in moves {
            prop_assert_eq!(swipe.move_to(start + dx, 0.0), None);
        }
    }

    #[test]
    fn each_long_move_steps_once(start in -500.0f64..500.0, deltas in prop::collection::vec(prop_oneof![9.0f64..100.0, -100.0f64..-9.0], 1..30)) {
        let mut swipe = SwipeTracker::default();
        swipe.start(start, 0.0);
        let mut x = start;
        for dx in deltas {
            x += dx;
            prop_assert_eq!(swipe.move_to(x, 0.0), Some(Step::from_delta(dx)));
        }
    }

    #[test]
    fn controller_input_stream_keeps_invariant(
        inputs in prop::collection::vec(arb_input(), 0..200),
        loaded_len in prop::option::of(1usize..50),
    ) {
        let mut dial = DialController::new(&DialConfig::default(), NullView);
        let split = inputs.len() / 2;
        for input in &inputs[..split] {
            dial.handle(*input);
            prop_assert!(dial.state().in_bounds());
        }
        if let Some(len) = loaded_len {
            let list = EpisodeList::new((0..len).map(|i| format!("<p>{i}</p>")).collect());
            dial.apply_outcome(&dial_core::LoadOutcome::Loaded { episodes: list, via: "fresh" });
            prop_assert!(dial.state().in_bounds());
        }
        for input in &inputs[split..] {
            dial.handle(*input);
            prop_assert!(dial.state().in_bounds());
        }
    }

    #[test]
    fn content_lookup_is_total(len in 0usize..20, index in 0u32..64) {
        let list = EpisodeList::new((0..len).map(|i| i.to_string()).collect());
        let html = list.content_at(index, LOADING_PLACEHOLDER);
        if len == 0 {
            prop_assert_eq!(html, LOADING_PLACEHOLDER);
        } else if (index as usize) < len {
            prop_assert_eq!(html, index.to_string());
        } else {
            prop_assert_eq!(html, "");
        }
    }

    #[test]
    fn clamp_rebind_always_in_bounds(start in 0u32..500, new_bound in 0u32..500) {
        let mut dial = DialState::new(500);
        for _ in 0..start {
            dial.increment();
        }
        dial.rebind(new_bound, RebindPolicy::Clamp);
        prop_assert!(dial.in_bounds());
    }
}
