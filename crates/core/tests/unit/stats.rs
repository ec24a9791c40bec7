//! # Report Tests
//!
//! Verifies the efficiency ratio, the page-table estimate, and both report renderings.

use pagesim_core::SimulationReport;
use pagesim_core::config::PolicyKind;
use pagesim_core::stats::efficiency_percent;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::trace;

fn report(policy: PolicyKind, optimal: u64, practical: u64) -> SimulationReport {
    let t = trace(&["A", "B", "C", "A", "B", "D", "A", "B", "C"]);
    SimulationReport::new(policy, 3, &t, optimal, practical)
}

#[rstest]
#[case(5, 7, 500.0 / 7.0)]
#[case(4, 5, 80.0)]
#[case(3, 3, 100.0)]
#[case(0, 0, 100.0)]
#[case(0, 4, 0.0)]
fn efficiency_ratio(#[case] optimal: u64, #[case] practical: u64, #[case] expected: f64) {
    assert!((efficiency_percent(optimal, practical) - expected).abs() < 1e-9);
}

#[test]
fn report_counts_trace() {
    let r = report(PolicyKind::GlobalClock, 5, 7);
    assert_eq!(r.accesses, 9);
    assert_eq!(r.distinct_pages, 4);
    assert_eq!(r.capacity, 3);
    assert_eq!(r.page_table_estimate_bytes(), 32);
}

#[test]
fn display_global() {
    let r = report(PolicyKind::GlobalClock, 5, 7);
    assert_eq!(
        r.to_string(),
        "With the Optimal algorithm 5 page faults occur.\n\
         With the Second Chance (global) algorithm 7 page faults occur, \
         reaching 71.43% of Optimal's performance."
    );
}

#[test]
fn display_local() {
    let r = report(PolicyKind::SegmentedClock, 4, 5);
    let text = r.to_string();
    assert!(text.ends_with(
        "With the Second Chance (local) algorithm 5 page faults occur, \
         reaching 80.00% of Optimal's performance."
    ));
}

#[test]
fn summary_json_carries_derived_values() {
    let r = report(PolicyKind::SegmentedClock, 4, 5);
    let json = serde_json::to_value(r.summary()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "policy": "SegmentedClock",
            "capacity": 3,
            "accesses": 9,
            "distinct_pages": 4,
            "optimal_faults": 4,
            "practical_faults": 5,
            "efficiency_percent": 80.0,
            "page_table_estimate_bytes": 32
        })
    );
}
