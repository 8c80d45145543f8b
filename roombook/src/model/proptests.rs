//! Property-based tests for the overlap predicate.

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;

use super::TimeSlot;

fn time_strategy() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

fn slot_strategy() -> impl Strategy<Value = TimeSlot> {
    (0u32..3, time_strategy(), time_strategy())
        .prop_filter("start must precede end", |(_, a, b)| a != b)
        .prop_map(|(day, a, b)| {
            let date = NaiveDate::from_ymd_opt(2025, 7, 1 + day).unwrap();
            let (start, end) = if a < b { (a, b) } else { (b, a) };
            TimeSlot::new(date, start, end).unwrap()
        })
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in slot_strategy(), b in slot_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn overlap_matches_interval_formula(a in slot_strategy(), b in slot_strategy()) {
        let expected = a.date() == b.date() && a.start() < b.end() && a.end() > b.start();
        prop_assert_eq!(a.overlaps(&b), expected);
    }

    #[test]
    fn slot_overlaps_itself(a in slot_strategy()) {
        prop_assert!(a.overlaps(&a));
    }

    #[test]
    fn adjacent_slots_never_overlap(a in slot_strategy(), b in slot_strategy()) {
        if let Ok(next) = TimeSlot::new(a.date(), a.end(), b.end()) {
            prop_assert!(!a.overlaps(&next));
        }
    }
}
