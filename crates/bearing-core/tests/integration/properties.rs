//! Property tests for first-match lookup.

use bearing_core::{Lookup, LookupOptions, MatchMode, Query, StoreFormat};
use proptest::prelude::*;

use crate::common::{Row, StoreHarness};

fn rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec((1u32..60, 1u32..120, 1u32..40, "[A-Z0-9]{1,8}"), 1..25)
}

fn query(d: u32, outer: u32, b: u32) -> Query {
    Query::bearing(d.to_string(), outer.to_string(), b.to_string())
}

fn first_model(rows: &[Row], d: u32, outer: u32, b: u32) -> Option<String> {
    rows.iter()
        .find(|(rd, ro, rb, _)| (*rd, *ro, *rb) == (d, outer, b))
        .map(|(_, _, _, model)| model.clone())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_present_dimensions_return_first_model(
        rows in rows(),
        pick in any::<prop::sample::Index>(),
    ) {
        let (d, outer, b, _) = pick.get(&rows).clone();
        let harness = StoreHarness::with_rows(&rows);
        let hit = Lookup::default()
            .first(&harness.store(StoreFormat::Lines), &query(d, outer, b))
            .unwrap();
        prop_assert_eq!(hit.map(|h| h.model), first_model(&rows, d, outer, b));
    }

    #[test]
    fn test_absent_dimensions_are_not_found(
        rows in rows(),
        d in 1u32..200,
        outer in 1u32..200,
        b in 1u32..200,
    ) {
        prop_assume!(first_model(&rows, d, outer, b).is_none());
        let harness = StoreHarness::with_rows(&rows);
        let hit = Lookup::default()
            .first(&harness.store(StoreFormat::Lines), &query(d, outer, b))
            .unwrap();
        prop_assert_eq!(hit, None);
    }

    #[test]
    fn test_fragment_mode_finds_present_dimensions(
        rows in rows(),
        pick in any::<prop::sample::Index>(),
    ) {
        let (d, outer, b, _) = pick.get(&rows).clone();
        let harness = StoreHarness::with_rows(&rows);
        let lookup = Lookup::new(LookupOptions {
            mode: MatchMode::Fragment,
            tolerance: 0.0,
        });
        let hit = lookup
            .first(&harness.store(StoreFormat::Lines), &query(d, outer, b))
            .unwrap();
        prop_assert!(hit.is_some());
    }
}
