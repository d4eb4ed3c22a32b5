use std::sync::Once;

use docs_core::{ExpectedStatusMap, StatusLedger, StatusMismatch, TOTAL_LABEL};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(docs_logging::initialize_for_tests);
}

fn expected(code: &str) -> Vec<String> {
    ExpectedStatusMap::peps().expected(code).unwrap().to_vec()
}

#[test]
fn matching_statuses_are_counted_without_mismatch() {
    init_logging();
    let mut ledger = StatusLedger::new();
    let active = expected("A");

    assert_eq!(ledger.record("https://peps/pep-0001/", "Active", &active), None);
    assert_eq!(ledger.record("https://peps/pep-0002/", "Active", &active), None);

    let table = ledger.into_table().unwrap();
    assert_eq!(
        table.rows(),
        &[
            vec!["Active".to_string(), "2".to_string()],
            vec![TOTAL_LABEL.to_string(), "2".to_string()],
        ]
    );
}

#[test]
fn mismatched_status_is_still_counted() {
    init_logging();
    let mut ledger = StatusLedger::new();
    let final_only = expected("F");

    let mismatch = ledger.record("https://peps/pep-0008/", "Funny", &final_only);

    assert_eq!(
        mismatch,
        Some(StatusMismatch {
            page_url: "https://peps/pep-0008/".to_string(),
            actual: "Funny".to_string(),
            expected: vec!["Final".to_string()],
        })
    );
    assert_eq!(ledger.count("Funny"), 1);
    assert_eq!(ledger.total(), 1);
    let table = ledger.into_table().unwrap();
    assert_eq!(table.header(), &["Status".to_string(), "Count".to_string()]);
    assert_eq!(table.rows()[0], vec!["Funny".to_string(), "1".to_string()]);
    assert_eq!(table.rows()[1], vec!["Total".to_string(), "1".to_string()]);
}

#[test]
fn total_tracks_sum_of_counts_after_every_row() {
    let mut ledger = StatusLedger::new();
    let statuses = ["Final", "Draft", "Final", "Rejected", "Draft", "Final"];
    let any: Vec<String> = Vec::new();

    for (processed, status) in statuses.iter().enumerate() {
        ledger.record("https://peps/x/", status, &any);
        let sum: u64 = ledger.counts().iter().map(|(_, count)| count).sum();
        assert_eq!(ledger.total(), processed as u64 + 1);
        assert_eq!(sum, ledger.total());
    }
}

#[test]
fn statuses_keep_first_seen_order() {
    let mut ledger = StatusLedger::new();
    for status in ["Rejected", "Active", "Rejected", "Final"] {
        ledger.record("https://peps/x/", status, &[]);
    }
    let labels: Vec<&str> = ledger.counts().iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(labels, vec!["Rejected", "Active", "Final"]);
}

#[test]
fn empty_ledger_has_only_total_row() {
    let table = StatusLedger::new().into_table().unwrap();
    assert_eq!(table.rows(), &[vec!["Total".to_string(), "0".to_string()]]);
}
