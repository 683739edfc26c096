//! Lookups across the accepted store layouts.

use bearing_core::{
    Error, Language, Lookup, LookupOutcome, Query, RecordStore, StoreFormat, find_model,
};

use crate::common::{StoreHarness, line};

#[test]
fn test_documented_example() {
    let harness = StoreHarness::with_content(&line(10, 26, 8, "608"));
    assert_eq!(
        find_model(&harness.path, "10", "26", "8").unwrap(),
        LookupOutcome::Found("608".to_string())
    );
    assert_eq!(
        find_model(&harness.path, "10", "26", "9").unwrap(),
        LookupOutcome::NotFound
    );
}

#[test]
fn test_duplicate_dimensions_return_first_record() {
    let content = [line(10, 26, 8, "608ZZ"), line(10, 26, 8, "608-2RS")].join("\n");
    let harness = StoreHarness::with_content(&content);
    assert_eq!(
        find_model(&harness.path, "10", "26", "8").unwrap(),
        LookupOutcome::Found("608ZZ".to_string())
    );
}

#[test]
fn test_pretty_array_one_object_per_line() {
    let content = format!(
        "[\n  {},\n  {}\n]\n",
        line(17, 40, 12, "6203"),
        line(20, 47, 14, "6204")
    );
    let harness = StoreHarness::with_content(&content);
    assert_eq!(
        find_model(&harness.path, "20", "47", "14").unwrap(),
        LookupOutcome::Found("6204".to_string())
    );
}

#[test]
fn test_persian_digits_in_query() {
    let harness = StoreHarness::with_content(&line(10, 26, 8, "608"));
    assert_eq!(
        find_model(&harness.path, "۱۰", "۲۶", "۸").unwrap(),
        LookupOutcome::Found("608".to_string())
    );
}

#[test]
fn test_missing_store_is_distinguishable() {
    let err = find_model("/nonexistent/dir/DataBase.json", "10", "26", "8").unwrap_err();
    assert!(matches!(err, Error::StoreUnavailable { .. }));
}

#[test]
fn test_document_store_bearings_section() {
    let harness = StoreHarness::with_content(
        r#"{
            "bearings": [
                {"d": 25, "D": 52, "B": 15, "model": "6205",
                 "purpose": "موتور", "purpose_en": "Motor"}
            ],
            "housings": [{"d": 25, "model": "UCP205"}]
        }"#,
    );
    let store = RecordStore::new(&harness.path, StoreFormat::Document);
    let hits = Lookup::default()
        .all(&store, &Query::bearing("25", "52", "15"))
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].model, "6205");
    assert_eq!(hits[0].description.for_language(Language::En), Some("Motor"));
    assert_eq!(hits[0].description.for_language(Language::Fa), Some("موتور"));
}
