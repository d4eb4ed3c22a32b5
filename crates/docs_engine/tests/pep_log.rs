//! Runs in its own binary so the file logger installed here is the global one.
mod common;

use std::fs::{self, File};

use common::{pep_index, pep_page, Harness, StubFetcher, PEPS_URL};
use docs_core::OutputLayout;
use docs_engine::routines::pep_ledger;
use log::LevelFilter;
use simplelog::WriteLogger;
use tempfile::TempDir;

#[tokio::test]
async fn pep_status_mismatch_is_written_to_the_log() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("parser.log");
    WriteLogger::init(
        LevelFilter::Info,
        docs_logging::line_config(),
        File::create(&log_path).unwrap(),
    )
    .unwrap();

    let fetcher = StubFetcher::new()
        .page(PEPS_URL, pep_index(&[("SA", "pep-0001/"), ("S", "pep-0751/")]))
        .page(&format!("{PEPS_URL}pep-0001/"), pep_page("Active"))
        .page(&format!("{PEPS_URL}pep-0751/"), pep_page("Final"));
    let harness = Harness::new(fetcher, OutputLayout::default());

    let report = pep_ledger(&harness.ctx()).await.unwrap();
    assert_eq!(report.mismatches.len(), 1);

    let logged = fs::read_to_string(&log_path).unwrap();
    let mismatches: Vec<&str> = logged
        .lines()
        .filter(|line| line.contains("Mismatched status"))
        .collect();
    assert_eq!(mismatches.len(), 1, "{logged}");
    assert!(
        mismatches[0].ends_with(
            "Mismatched status: https://peps.example.org/pep-0751/; \
             status on page: Final; expected: Draft, Active"
        ),
        "{logged}"
    );
}
