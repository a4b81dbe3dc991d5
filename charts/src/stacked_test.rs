#![allow(clippy::float_cmp)]

use super::*;
use serde_json::json;

fn three_period_payload() -> serde_json::Value {
    json!([
        {
            "startDate": "2024-01-15",
            "stackDataList": [
                {"name": "Firm Order", "quantity": 100},
                {"name": "Overdue", "quantity": 20},
            ],
        },
        {
            "startDate": "2024-02-15",
            "stackDataList": [
                {"name": "Firm Order", "quantity": 80},
            ],
        },
        {
            "startDate": "2024-03-15",
            "stackDataList": [
                {"name": "Overdue", "quantity": 5},
                {"name": "Forecasted", "quantity": 60},
            ],
        },
    ])
}

// --- shape normalization ---

#[test]
fn lone_period_object_becomes_one_bar() {
    let chart = StackedBarChart::from_value(&json!({
        "startDate": "2024-01-15",
        "stackDataList": [{"name": "Overdue", "quantity": 7}],
    }));
    assert_eq!(chart.labels, ["Jan 2024"]);
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].values, [7.0]);
}

#[test]
fn series_follow_first_appearance_order_across_periods() {
    let chart = StackedBarChart::from_value(&three_period_payload());
    let keys: Vec<&str> = chart.series.iter().map(|series| series.key.as_str()).collect();
    assert_eq!(keys, ["Firm Order", "Overdue", "Forecasted"]);
}

#[test]
fn duplicate_names_produce_a_single_series() {
    let chart = StackedBarChart::from_value(&json!([
        {"stackDataList": [{"name": "Overdue", "quantity": 1}]},
        {"stackDataList": [{"name": "Overdue", "quantity": 2}]},
    ]));
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].values, [1.0, 2.0]);
}

#[test]
fn absent_category_contributes_zero_for_that_period() {
    let chart = StackedBarChart::from_value(&three_period_payload());
    let overdue = &chart.series[1];
    assert_eq!(overdue.values, [20.0, 0.0, 5.0]);
}

#[test]
fn first_match_wins_within_a_period() {
    let chart = StackedBarChart::from_value(&json!([
        {"stackDataList": [
            {"name": "Overdue", "quantity": 9},
            {"name": "Overdue", "quantity": 1},
        ]},
    ]));
    assert_eq!(chart.series[0].values, [9.0]);
}

#[test]
fn malformed_periods_contribute_zero_and_never_fail() {
    let chart = StackedBarChart::from_value(&json!([
        {"startDate": "2024-01-15", "stackDataList": [{"name": "Overdue", "quantity": 3}]},
        {"startDate": "2024-02-15"},
        {"startDate": "2024-03-15", "stackDataList": "oops"},
    ]));
    assert_eq!(chart.labels.len(), 3);
    assert_eq!(chart.series[0].values, [3.0, 0.0, 0.0]);
}

#[test]
fn empty_payload_yields_an_empty_chart() {
    let chart = StackedBarChart::from_value(&json!([]));
    assert!(chart.labels.is_empty());
    assert!(chart.series.is_empty());
    assert_eq!(chart.max_stack_total(), 0.0);
}

// --- period labels ---

#[test]
fn period_labels_cover_valid_missing_and_invalid_dates() {
    let chart = StackedBarChart::from_value(&json!([
        {"startDate": "2024-01-15", "stackDataList": []},
        {"stackDataList": []},
        {"startDate": "not-a-date", "stackDataList": []},
    ]));
    assert_eq!(chart.labels, ["Jan 2024", "Unknown", "Invalid Date"]);
}

#[test]
fn null_start_date_labels_unknown() {
    let chart = StackedBarChart::from_value(&json!([{"startDate": null, "stackDataList": []}]));
    assert_eq!(chart.labels, ["Unknown"]);
}

// --- display relabel ---

#[test]
fn firm_order_series_displays_as_forecasted() {
    let chart = StackedBarChart::from_value(&json!([
        {"stackDataList": [{"name": "Firm Order", "quantity": 10}]},
    ]));
    assert_eq!(chart.series[0].key, "Firm Order");
    assert_eq!(chart.series[0].label, "Forecasted");
    assert_eq!(chart.legend_entries()[0].0, "Forecasted");
}

#[test]
fn relabel_does_not_affect_matching() {
    // One period names the category "Firm Order", another "Forecasted";
    // they stay separate series even though both display as "Forecasted".
    let chart = StackedBarChart::from_value(&json!([
        {"stackDataList": [{"name": "Firm Order", "quantity": 10}]},
        {"stackDataList": [{"name": "Forecasted", "quantity": 4}]},
    ]));
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.series[0].values, [10.0, 0.0]);
    assert_eq!(chart.series[1].values, [0.0, 4.0]);
    assert_eq!(chart.series[0].label, "Forecasted");
    assert_eq!(chart.series[1].label, "Forecasted");
}

#[test]
fn other_series_keep_their_own_labels() {
    let chart = StackedBarChart::from_value(&three_period_payload());
    assert_eq!(chart.series[1].label, "Overdue");
}

// --- colors ---

#[test]
fn series_colors_cycle_through_the_palette() {
    let periods: Vec<serde_json::Value> = (0..10)
        .map(|i| json!({"stackDataList": [{"name": format!("Series {i}"), "quantity": 1}]}))
        .collect();
    let chart = StackedBarChart::from_value(&json!(periods));
    assert_eq!(chart.series.len(), 10);
    assert_eq!(chart.series[0].color, chart.series[8].color);
    assert_eq!(chart.series[1].color, chart.series[9].color);
    assert_ne!(chart.series[0].color, chart.series[1].color);
}

// --- totals and tooltips ---

#[test]
fn stack_totals_sum_per_period() {
    let chart = StackedBarChart::from_value(&three_period_payload());
    assert_eq!(chart.stack_total(0), 120.0);
    assert_eq!(chart.stack_total(1), 80.0);
    assert_eq!(chart.stack_total(2), 65.0);
    assert_eq!(chart.max_stack_total(), 120.0);
}

#[test]
fn tooltip_reports_label_and_quantity() {
    let chart = StackedBarChart::from_value(&json!([
        {"stackDataList": [{"name": "Firm Order", "quantity": 1500}]},
    ]));
    assert_eq!(chart.tooltip_line(0, 0), "Forecasted: 1,500 units");
}

#[test]
fn tooltip_out_of_range_is_empty_or_zero() {
    let chart = StackedBarChart::from_value(&json!([
        {"stackDataList": [{"name": "Overdue", "quantity": 3}]},
    ]));
    assert_eq!(chart.tooltip_line(5, 0), "");
    assert_eq!(chart.tooltip_line(0, 5), "Overdue: 0 units");
}
