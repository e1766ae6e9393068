//! Property-based invariant tests for the host-driven input path.
//!
//! Verifies:
//! 1. Encoded events decode to the same kind
//! 2. Non-finite coordinates are flagged before reaching the dial
//! 3. A replayed JSON stream keeps the dial inside its bound

use dial_core::{DialConfig, DialController, DialInput, DialView};
use dial_web::input::DialInputJson;
use proptest::prelude::*;

struct NullView;

impl DialView for NullView {
    fn set_label(&mut self, _label: &str) {}
    fn set_content(&mut self, _html: &str) {}
}

fn arb_event() -> impl Strategy<Value = DialInputJson> {
    prop_oneof![
        Just(DialInputJson::Activate),
        Just(DialInputJson::TouchEnd),
        (-2000.0f64..2000.0, -2000.0f64..2000.0)
            .prop_map(|(x, y)| DialInputJson::TouchStart { x, y }),
        (-2000.0f64..2000.0, -2000.0f64..2000.0)
            .prop_map(|(x, y)| DialInputJson::TouchMove { x, y }),
    ]
}

proptest! {
    #[test]
    fn encoded_events_keep_their_kind(event in arb_event()) {
        prop_assert!(event.is_finite());
        let json = event.to_json_string().unwrap();
        let decoded = DialInputJson::from_json_str(&json).unwrap();
        prop_assert_eq!(std::mem::discriminant(&decoded), std::mem::discriminant(&event));
    }

    #[test]
    fn non_finite_coordinates_are_flagged(x in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)], y in -10.0f64..10.0) {
        let touch_move = DialInputJson::TouchMove { x, y };
        let touch_start = DialInputJson::TouchStart { x: y, y: x };
        prop_assert!(!touch_move.is_finite());
        prop_assert!(!touch_start.is_finite());
    }

    #[test]
    fn replayed_stream_stays_in_bounds(events in prop::collection::vec(arb_event(), 0..200)) {
        let mut dial = DialController::new(&DialConfig::default(), NullView);
        for event in events {
            let json = event.to_json_string().unwrap();
            let input: DialInput = DialInputJson::from_json_str(&json).unwrap().into();
            dial.handle(input);
            prop_assert!(dial.current() <= dial.max_index());
        }
    }
}
