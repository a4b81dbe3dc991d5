#![allow(clippy::float_cmp)]

use super::*;
use serde_json::json;

// --- ChartKind ---

#[test]
fn recognized_kinds_parse() {
    assert_eq!(ChartKind::parse("donut"), Some(ChartKind::Donut));
    assert_eq!(ChartKind::parse("donut-chart"), Some(ChartKind::Donut));
    assert_eq!(ChartKind::parse("stacked-bar"), Some(ChartKind::StackedBar));
    assert_eq!(ChartKind::parse("histogram"), Some(ChartKind::StackedBar));
}

#[test]
fn unknown_kinds_parse_to_none() {
    assert_eq!(ChartKind::parse("pie"), None);
    assert_eq!(ChartKind::parse("DONUT"), None);
    assert_eq!(ChartKind::parse(""), None);
}

// --- CategoryDatum ---

#[test]
fn datum_reads_all_fields() {
    let datum = CategoryDatum::from_value(&json!({
        "name": "Overdue",
        "value": 1_079_098.66,
        "quantity": 149,
    }));
    assert_eq!(
        datum,
        Some(CategoryDatum {
            name: "Overdue".to_owned(),
            value: 1_079_098.66,
            quantity: 149.0,
        })
    );
}

#[test]
fn datum_without_a_name_is_dropped() {
    assert_eq!(CategoryDatum::from_value(&json!({"quantity": 5})), None);
    assert_eq!(CategoryDatum::from_value(&json!({"name": 7, "quantity": 5})), None);
    assert_eq!(CategoryDatum::from_value(&json!(null)), None);
    assert_eq!(CategoryDatum::from_value(&json!("Overdue")), None);
}

#[test]
fn missing_or_non_numeric_measurements_read_as_zero() {
    let datum = CategoryDatum::from_value(&json!({"name": "Overdue"}));
    assert_eq!(
        datum,
        Some(CategoryDatum { name: "Overdue".to_owned(), value: 0.0, quantity: 0.0 })
    );

    let datum = CategoryDatum::from_value(&json!({
        "name": "Overdue",
        "value": "a lot",
        "quantity": null,
    }));
    assert_eq!(
        datum,
        Some(CategoryDatum { name: "Overdue".to_owned(), value: 0.0, quantity: 0.0 })
    );
}

// --- PeriodBucket ---

#[test]
fn bucket_reads_start_date_and_entries() {
    let bucket = PeriodBucket::from_value(&json!({
        "startDate": "2025-01-01T00:00:00Z",
        "stackDataList": [
            {"name": "Overdue", "quantity": 149, "value": 10.0},
            {"name": "Firm Order", "quantity": 4848, "value": 20.0},
        ],
    }));
    assert_eq!(bucket.start_date.as_deref(), Some("2025-01-01T00:00:00Z"));
    assert_eq!(bucket.entries.len(), 2);
    assert_eq!(bucket.entries[0].name, "Overdue");
    assert_eq!(bucket.entries[1].quantity, 4848.0);
}

#[test]
fn blank_start_date_reads_as_absent() {
    let bucket = PeriodBucket::from_value(&json!({"startDate": "", "stackDataList": []}));
    assert_eq!(bucket.start_date, None);

    let bucket = PeriodBucket::from_value(&json!({"startDate": "  ", "stackDataList": []}));
    assert_eq!(bucket.start_date, None);
}

#[test]
fn non_string_start_date_reads_as_absent() {
    let bucket = PeriodBucket::from_value(&json!({"startDate": 0, "stackDataList": []}));
    assert_eq!(bucket.start_date, None);
}

#[test]
fn missing_or_malformed_stack_list_reads_as_empty() {
    assert!(PeriodBucket::from_value(&json!({})).entries.is_empty());
    assert!(PeriodBucket::from_value(&json!({"stackDataList": "oops"})).entries.is_empty());
    assert!(PeriodBucket::from_value(&json!(42)).entries.is_empty());
}

#[test]
fn nameless_entries_are_dropped_from_buckets() {
    let bucket = PeriodBucket::from_value(&json!({
        "stackDataList": [
            {"name": "Overdue", "quantity": 1},
            null,
            {"quantity": 2},
            {"name": "Forecasted", "quantity": 3},
        ],
    }));
    let names: Vec<&str> = bucket.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Overdue", "Forecasted"]);
}

// --- period_buckets ---

#[test]
fn lone_object_becomes_a_single_period() {
    let buckets = period_buckets(&json!({"startDate": "2024-01-15", "stackDataList": []}));
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].start_date.as_deref(), Some("2024-01-15"));
}

#[test]
fn array_payload_maps_bucket_by_bucket() {
    let buckets = period_buckets(&json!([
        {"startDate": "2024-01-15", "stackDataList": []},
        {"startDate": "2024-02-15", "stackDataList": []},
        {},
    ]));
    assert_eq!(buckets.len(), 3);
    assert_eq!(buckets[2], PeriodBucket::default());
}
